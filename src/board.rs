use std::fmt;

use thiserror::Error;

use crate::SIZE;

#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum BoardError {
    #[error("invalid cell, row and column must be between 0 and 2, inclusive")]
    InvalidPosition,
    #[error("cell is not empty")]
    CellOccupied,
    #[error("game is over")]
    GameAlreadyOver,
}

/// A mark occupying a board cell.
///
/// `X` and `O` carry the numeric values +1 and -1 so line sums can detect
/// alignments: a line summing to ±(SIZE - 1) holds two equal marks and one
/// empty cell.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn value(self) -> i32 {
        match self {
            Mark::Empty => 0,
            Mark::X => 1,
            Mark::O => -1,
        }
    }

    pub fn is_empty(self) -> bool {
        match self {
            Mark::Empty => true,
            _ => false,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Empty => "-",
        };
        write!(f, "{}", symbol)
    }
}

/// A position on the board, in bounds by construction.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Cell {
    row: usize,
    column: usize,
}

impl Cell {
    /// Creates a cell, failing with `InvalidPosition` unless both
    /// coordinates are within the grid.
    pub fn new(row: usize, column: usize) -> Result<Self, BoardError> {
        if row >= SIZE || column >= SIZE {
            return Err(BoardError::InvalidPosition);
        }
        Ok(Self { row, column })
    }

    // callers pass indices already in range
    pub(crate) const fn at(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn column(self) -> usize {
        self.column
    }
}

/// The 3x3 game board.
///
/// A board is a value: writes return a new board and the original is never
/// altered. Turn order, completion and the winner are all derived from the
/// cell contents, X always moves first.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [[Mark; SIZE]; SIZE],
}

impl Board {
    /// The center cell.
    pub const CENTER: Cell = Cell::at(1, 1);

    /// The corner cells: top-left, top-right, bottom-left, bottom-right.
    pub const CORNERS: [Cell; 4] = [
        Cell::at(0, 0),
        Cell::at(0, SIZE - 1),
        Cell::at(SIZE - 1, 0),
        Cell::at(SIZE - 1, SIZE - 1),
    ];

    /// The edge-midpoint cells: top, left, right, bottom.
    pub const SIDES: [Cell; 4] = [
        Cell::at(0, 1),
        Cell::at(1, 0),
        Cell::at(1, SIZE - 1),
        Cell::at(SIZE - 1, 1),
    ];

    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; SIZE]; SIZE],
        }
    }

    pub fn mark_at(&self, cell: Cell) -> Mark {
        self.cells[cell.row][cell.column]
    }

    pub fn is_empty_cell(&self, cell: Cell) -> bool {
        self.mark_at(cell).is_empty()
    }

    /// Writes the current-turn mark to `cell`, returning the new board.
    ///
    /// Fails with `CellOccupied` if the cell already holds a mark, then with
    /// `GameAlreadyOver` if the board is complete, in that order.
    pub fn set_mark(&self, cell: Cell) -> Result<Self, BoardError> {
        if !self.is_empty_cell(cell) {
            return Err(BoardError::CellOccupied);
        }
        if self.is_complete() {
            return Err(BoardError::GameAlreadyOver);
        }
        Ok(self.with_mark(cell, self.current_mark()))
    }

    // unchecked write, for hypothetical positions during analysis
    pub(crate) fn with_mark(&self, cell: Cell, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[cell.row][cell.column] = mark;
        next
    }

    /// The mark on turn: X when the filled count is even, O otherwise.
    pub fn current_mark(&self) -> Mark {
        if self.filled_count() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// The mark of whoever is not on turn.
    pub fn opponent_mark(&self) -> Mark {
        match self.current_mark() {
            Mark::X => Mark::O,
            _ => Mark::X,
        }
    }

    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|mark| !mark.is_empty())
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.filled_count() == SIZE * SIZE
    }

    /// Returns the mark of the first complete line found, scanning row i
    /// then column i for each index, then the two diagonals. The fixed
    /// order only matters on boards with several complete lines, which
    /// legal play never produces, but it stays deterministic for any input.
    pub fn winner(&self) -> Option<Mark> {
        let c = &self.cells;
        for i in 0..SIZE {
            if c[i][0] == c[i][1] && c[i][1] == c[i][2] && !c[i][0].is_empty() {
                return Some(c[i][0]);
            }
            if c[0][i] == c[1][i] && c[1][i] == c[2][i] && !c[0][i].is_empty() {
                return Some(c[0][i]);
            }
        }
        if c[0][0] == c[1][1] && c[1][1] == c[2][2] && !c[0][0].is_empty() {
            return Some(c[0][0]);
        }
        if c[0][2] == c[1][1] && c[1][1] == c[2][0] && !c[0][2].is_empty() {
            return Some(c[0][2]);
        }
        None
    }

    /// True once a winner exists or the board is full.
    pub fn is_complete(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    pub fn first_empty_cell(&self) -> Option<Cell> {
        for row in 0..SIZE {
            for column in 0..SIZE {
                if self.cells[row][column].is_empty() {
                    return Some(Cell::at(row, column));
                }
            }
        }
        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..SIZE {
            for column in 0..SIZE {
                if column > 0 {
                    write!(f, " | ")?;
                }
                write!(f, " {} ", self.cells[row][column])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
