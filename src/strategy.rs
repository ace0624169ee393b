//! The move-selection contract implemented by every computer strategy

use crate::board::{Board, Cell};

/// A move-selection policy for one turn.
///
/// Implementations are stateless and side-effect free: given a board they
/// return the cell the mark on turn should take. Callers must hand in a
/// board that is not yet complete; strategies treat a violation as a
/// programming error and panic rather than returning an error.
pub trait Strategy {
    /// Picks the cell for the mark currently on turn.
    fn choose_move(&self, board: &Board) -> Cell;

    /// Short human-readable name, used in menus and player labels.
    fn name(&self) -> &'static str;
}
