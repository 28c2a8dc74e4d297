use crate::game::*;

/// Source of human moves for a data-collection session.
pub trait Player {
    /// Move for round `index` (zero-based) of `total`.
    /// `None` means the player walked away and collection stops early.
    fn decide(&mut self, index: usize, total: usize) -> Option<Move>;

    /// Called after every collected round.
    fn notify(&mut self, _: &Round) {}
}
