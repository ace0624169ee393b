//! Opening-tuned variant of the heuristic strategy

use crate::board::{Board, Cell};
use crate::heuristic::Heuristic;
use crate::strategy::Strategy;
use crate::threat::find_threats;

/// The heuristic strategy with its first three plies overridden: take the
/// center when it is free, otherwise the first quiet corner. The plain
/// chain telegraphs its openings, which steers games into draws; a quiet
/// corner keeps the position open. From ply four onwards, or when no quiet
/// corner exists, every move is delegated to the wrapped heuristic.
pub struct TunedHeuristic {
    inner: Heuristic,
}

impl TunedHeuristic {
    pub fn new() -> Self {
        Self { inner: Heuristic }
    }
}

impl Default for TunedHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for TunedHeuristic {
    fn choose_move(&self, board: &Board) -> Cell {
        let turn_number = board.filled_count() + 1;
        if turn_number <= 3 {
            if board.is_empty_cell(Board::CENTER) {
                return Board::CENTER;
            }
            if let Some(cell) = quiet_corner(board) {
                return cell;
            }
        }
        self.inner.choose_move(board)
    }

    fn name(&self) -> &'static str {
        "Tuned"
    }
}

// first empty corner, fixed order, whose occupation creates no threat for
// the mover
fn quiet_corner(board: &Board) -> Option<Cell> {
    let mover = board.current_mark();
    for &corner in Board::CORNERS.iter() {
        if !board.is_empty_cell(corner) {
            continue;
        }
        let (threat, _) = find_threats(&board.with_mark(corner, mover), mover);
        if threat.is_none() {
            return Some(corner);
        }
    }
    None
}
