//! Learning the human's habits.
//!
//! Rounds are turned into [`Sample`]s and collected in a [`SampleStore`].
//! A [`Model`] fits a one-hidden-layer [`Network`] to the store with
//! full-batch [`Adam`] and predicts the next human move from the last round.

mod adam;
mod error;
mod hyper;
mod layer;
mod model;
mod network;
mod sample;
mod store;

pub use adam::*;
pub use error::*;
pub use hyper::*;
pub use layer::*;
pub use model::*;
pub use network::*;
pub use sample::*;
pub use store::*;
