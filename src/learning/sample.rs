use crate::FEATURES;
use crate::Scalar;
use crate::game::*;
use serde::Deserialize;
use serde::Serialize;

/// One labeled example: the context of a round and the move the human
/// threw in the round right after it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(Move, Move, Outcome, Move)", into = "(Move, Move, Outcome, Move)")]
pub struct Sample {
    pub context: Round,
    pub next: Move,
}

impl Sample {
    pub fn new(human: Move, opponent: Move, outcome: Outcome, next: Move) -> Self {
        let context = Round {
            human,
            opponent,
            outcome,
        };
        Self { context, next }
    }
    pub fn features(&self) -> [Scalar; FEATURES] {
        encode(&self.context)
    }
    pub fn label(&self) -> usize {
        self.next.index()
    }
}

/// one-hot(human) ‖ one-hot(opponent) ‖ one-hot(outcome)
pub fn encode(context: &Round) -> [Scalar; FEATURES] {
    let mut x = [0.; FEATURES];
    x[0..3].copy_from_slice(&context.human.onehot());
    x[3..6].copy_from_slice(&context.opponent.onehot());
    x[6..9].copy_from_slice(&context.outcome.onehot());
    x
}

impl From<(Move, Move, Outcome, Move)> for Sample {
    fn from((human, opponent, outcome, next): (Move, Move, Outcome, Move)) -> Self {
        Self::new(human, opponent, outcome, next)
    }
}
impl From<Sample> for (Move, Move, Outcome, Move) {
    fn from(s: Sample) -> Self {
        (s.context.human, s.context.opponent, s.context.outcome, s.next)
    }
}

impl std::fmt::Display for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}, {}] -> {}",
            self.context.human, self.context.opponent, self.context.outcome, self.next
        )
    }
}
