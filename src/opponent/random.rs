use crate::Arbitrary;
use crate::game::Move;

/// Throws uniformly at random. Plays every round until a model is trained,
/// and every round of a data-collection session so the human's training
/// signal is not shaped by the model's own guesses.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomOpponent;

impl RandomOpponent {
    pub fn play(&self) -> Move {
        Move::random()
    }
}
