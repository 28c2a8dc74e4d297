//! Rules of the game: the three moves, cyclic dominance and round outcomes.

mod moves;
mod outcome;
mod round;
mod token;

pub use moves::*;
pub use outcome::*;
pub use round::*;
pub use token::*;

use serde::Deserialize;
use serde::Serialize;
