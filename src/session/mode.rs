use crate::game::*;
use serde::Serialize;

/// How the opponent chose its throw for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Uniform random: no trained model, or no previous round to condition on.
    Random,
    /// Countered the model's prediction of the human's move.
    Model,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "Program plays randomly."),
            Self::Model => write!(f, "Program uses AI."),
        }
    }
}

/// A round played through the controller, with how the opponent decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Play {
    pub round: Round,
    pub mode: Mode,
}
