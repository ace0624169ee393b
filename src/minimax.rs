//! Exhaustive game-tree search

use crate::board::{Board, Cell, Mark};
use crate::strategy::Strategy;
use crate::SIZE;

// score of a position the searching side wins; not scaled by depth, a
// later win counts the same as an immediate one
const WIN_SCORE: i32 = 10;

/// Move selection by full game-tree search.
///
/// Every empty cell is tried and scored by playing out all continuations
/// to the end of the game. The first cell in row-major order with the
/// strictly best score wins, so the choice is deterministic.
pub struct Minimax;

impl Strategy for Minimax {
    fn choose_move(&self, board: &Board) -> Cell {
        let mover = board.current_mark();
        let opponent = board.opponent_mark();

        let mut best_score = i32::MIN;
        let mut best_cell = None;

        for row in 0..SIZE {
            for column in 0..SIZE {
                let cell = Cell::at(row, column);
                if !board.is_empty_cell(cell) {
                    continue;
                }
                let score = search(&board.with_mark(cell, mover), false, mover, opponent);
                if score > best_score {
                    best_score = score;
                    best_cell = Some(cell);
                }
            }
        }

        best_cell.expect("choose_move called on a board with no empty cells")
    }

    fn name(&self) -> &'static str {
        "Minimax"
    }
}

/// Scores a position for `mover`, alternating between the mover picking
/// the best continuation and the opponent picking the worst.
fn search(board: &Board, maximizing: bool, mover: Mark, opponent: Mark) -> i32 {
    if let Some(winner) = board.winner() {
        return if winner == mover { WIN_SCORE } else { -WIN_SCORE };
    }
    if board.is_full() {
        return 0;
    }

    let placing = if maximizing { mover } else { opponent };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for row in 0..SIZE {
        for column in 0..SIZE {
            let cell = Cell::at(row, column);
            if !board.is_empty_cell(cell) {
                continue;
            }
            let score = search(&board.with_mark(cell, placing), !maximizing, mover, opponent);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
    }

    best
}
