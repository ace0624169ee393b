//! Line analysis for spotting immediate winning moves

use crate::board::{Board, Cell, Mark};
use crate::SIZE;

// the 8 board lines in fixed scan order: row then column per index,
// interleaved, then the diagonal, then the anti-diagonal
const LINES: [[Cell; SIZE]; 2 * SIZE + 2] = [
    [Cell::at(0, 0), Cell::at(0, 1), Cell::at(0, 2)],
    [Cell::at(0, 0), Cell::at(1, 0), Cell::at(2, 0)],
    [Cell::at(1, 0), Cell::at(1, 1), Cell::at(1, 2)],
    [Cell::at(0, 1), Cell::at(1, 1), Cell::at(2, 1)],
    [Cell::at(2, 0), Cell::at(2, 1), Cell::at(2, 2)],
    [Cell::at(0, 2), Cell::at(1, 2), Cell::at(2, 2)],
    [Cell::at(0, 0), Cell::at(1, 1), Cell::at(2, 2)],
    [Cell::at(0, 2), Cell::at(1, 1), Cell::at(2, 0)],
];

/// Finds the lines where `mark` is one move away from winning.
///
/// A line qualifies when its cell values sum to `mark.value() * (SIZE - 1)`,
/// which can only happen with SIZE - 1 cells of `mark` and a single empty
/// cell, since the two marks carry opposite values. Returns the empty cell
/// of the *last* qualifying line in scan order together with the number of
/// qualifying lines; a count of 2 or more after a hypothetical placement
/// means that placement forks.
///
/// The last-wins candidate choice is deliberate and pinned by tests; the
/// strategies' tie-breaking depends on it.
pub fn find_threats(board: &Board, mark: Mark) -> (Option<Cell>, usize) {
    let needed = mark.value() * (SIZE as i32 - 1);

    let mut candidate = None;
    let mut count = 0;

    for line in LINES.iter() {
        let sum: i32 = line.iter().map(|&cell| board.mark_at(cell).value()).sum();
        if sum != needed {
            continue;
        }
        count += 1;
        // the qualifying sum guarantees exactly one empty cell in the line
        for &cell in line.iter() {
            if board.is_empty_cell(cell) {
                candidate = Some(cell);
            }
        }
    }

    (candidate, count)
}
