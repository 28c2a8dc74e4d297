use crate::game::Move;

/// The throw that defeats a predicted human move.
pub fn counter_for(predicted: Move) -> Move {
    predicted.counter()
}
