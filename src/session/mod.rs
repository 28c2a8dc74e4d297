//! Game orchestration: one explicit session per human opponent.

mod controller;
mod mode;
mod player;
mod status;

pub use controller::*;
pub use mode::*;
pub use player::*;
pub use status::*;
