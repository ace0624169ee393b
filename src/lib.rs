//! Board model and move-selection strategies for 3x3 tic-tac-toe
//!
//! The board is an immutable value type; winner, completion and whose turn
//! it is are all derived from the cell contents. Three interchangeable
//! strategies implement the same single-method contract: exhaustive
//! minimax search, a classical rule-priority chain, and an opening-tuned
//! variant of the chain.
//!
//! # Basic Usage
//!
//! ```
//! use tictactoe_ai::board::Board;
//! use tictactoe_ai::minimax::Minimax;
//! use tictactoe_ai::strategy::Strategy;
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::new();
//! let opening = Minimax.choose_move(&board);
//! let board = board.set_mark(opening)?;
//!
//! assert_eq!((opening.row(), opening.column()), (0, 0));
//! assert_eq!(board.filled_count(), 1);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod game;

pub mod heuristic;

pub mod minimax;

pub mod strategy;

pub mod threat;

pub mod tuned;


/// The width and height of the game board in cells
pub const SIZE: usize = 3;

// the line scans, corner geometry and opening rules are written for the
// classic board only
const_assert!(SIZE == 3);
