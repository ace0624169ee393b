//! Rule-chain move selection based on classical tic-tac-toe theory

use crate::board::{Board, Cell};
use crate::strategy::Strategy;
use crate::threat::find_threats;
use crate::SIZE;

/// Move selection through a strict priority chain, no search involved.
///
/// Rules are tried in order and the first applicable one wins: win, block,
/// fork, block the opponent's fork, center, opposite corner, any corner,
/// any side. On a board that is not yet complete at least one rule always
/// applies.
pub struct Heuristic;

impl Strategy for Heuristic {
    fn choose_move(&self, board: &Board) -> Cell {
        // win: complete a line of our own
        if let (Some(cell), _) = find_threats(board, board.current_mark()) {
            return cell;
        }
        // block: deny the opponent their completion
        if let (Some(cell), _) = find_threats(board, board.opponent_mark()) {
            return cell;
        }
        // fork: open two lines at once
        if let Some(cell) = fork_move(board) {
            return cell;
        }
        // keep the opponent from forking
        if let Some(cell) = block_fork_move(board) {
            return cell;
        }
        // center
        if board.is_empty_cell(Board::CENTER) {
            return Board::CENTER;
        }
        // opposite corner: mirror a corner the opponent holds
        if let Some(cell) = opposite_corner(board) {
            return cell;
        }
        // any corner, then any side, in fixed order
        if let Some(cell) = first_empty(board, &Board::CORNERS) {
            return cell;
        }
        if let Some(cell) = first_empty(board, &Board::SIDES) {
            return cell;
        }
        unreachable!("rule chain exhausted on an incomplete board")
    }

    fn name(&self) -> &'static str {
        "Heuristic"
    }
}

/// First cell, row-major, where placing the current mark creates two
/// threats at once. Forks need at least three open cells, so the search is
/// skipped entirely in the endgame.
pub(crate) fn fork_move(board: &Board) -> Option<Cell> {
    if board.filled_count() > SIZE * SIZE - 3 {
        return None;
    }
    let mover = board.current_mark();
    for row in 0..SIZE {
        for column in 0..SIZE {
            let cell = Cell::at(row, column);
            if !board.is_empty_cell(cell) {
                continue;
            }
            let (_, count) = find_threats(&board.with_mark(cell, mover), mover);
            if count > 1 {
                return Some(cell);
            }
        }
    }
    None
}

/// Cell that keeps the opponent from forking on their next move, `None`
/// when no fork threatens.
///
/// Every empty cell is tried for the mover. A cell after which the
/// opponent still has a fork raises the risk flag; one after which they do
/// not is remembered as safe (last found wins). Preferred over any safe
/// cell is the first forcing cell: one that creates a threat of our own
/// whose forced block leaves the opponent short of two threats. Risk with
/// neither kind of answer cannot happen on a well-formed board.
pub(crate) fn block_fork_move(board: &Board) -> Option<Cell> {
    if board.filled_count() > SIZE * SIZE - 3 {
        return None;
    }
    let mover = board.current_mark();
    let opponent = board.opponent_mark();

    let mut risk = false;
    let mut forcing: Option<Cell> = None;
    let mut safe: Option<Cell> = None;

    for row in 0..SIZE {
        for column in 0..SIZE {
            let cell = Cell::at(row, column);
            if !board.is_empty_cell(cell) {
                continue;
            }
            // the opponent moves next on this board
            let reply_board = board.with_mark(cell, mover);
            if fork_move(&reply_board).is_some() {
                risk = true;
            } else {
                safe = Some(cell);
            }
            if forcing.is_none() {
                if let (Some(block), _) = find_threats(&reply_board, mover) {
                    let blocked = reply_board.with_mark(block, opponent);
                    let (_, opponent_threats) = find_threats(&blocked, opponent);
                    if opponent_threats < 2 {
                        forcing = Some(cell);
                    }
                }
            }
        }
    }

    if !risk {
        return None;
    }
    if forcing.is_some() {
        return forcing;
    }
    if safe.is_some() {
        return safe;
    }
    unreachable!("opponent fork flagged with no forcing or safe cell to answer it")
}

// diagonal pairs in fixed order: top-left with bottom-right first, then
// top-right with bottom-left
fn opposite_corner(board: &Board) -> Option<Cell> {
    let opponent = board.opponent_mark();
    let pairs = [
        (Cell::at(0, 0), Cell::at(SIZE - 1, SIZE - 1)),
        (Cell::at(0, SIZE - 1), Cell::at(SIZE - 1, 0)),
    ];
    for &(near, far) in pairs.iter() {
        if board.mark_at(near) == opponent && board.is_empty_cell(far) {
            return Some(far);
        }
        if board.is_empty_cell(near) && board.mark_at(far) == opponent {
            return Some(near);
        }
    }
    None
}

fn first_empty(board: &Board, cells: &[Cell]) -> Option<Cell> {
    cells.iter().copied().find(|&cell| board.is_empty_cell(cell))
}
