//! Turn management: players and the match between them

use std::fmt;

use thiserror::Error;

use crate::board::{Board, BoardError, Cell, Mark};
use crate::strategy::Strategy;

#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("invalid player name")]
pub struct InvalidName;

/// A participant: a named human or a computer driven by a strategy.
pub struct Player {
    kind: PlayerKind,
}

enum PlayerKind {
    Human(String),
    Computer(Box<dyn Strategy>),
}

impl Player {
    /// Creates a human player; blank names are rejected. The stored name
    /// is trimmed.
    pub fn human(name: &str) -> Result<Self, InvalidName> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InvalidName);
        }
        Ok(Self {
            kind: PlayerKind::Human(name.to_string()),
        })
    }

    pub fn computer(strategy: Box<dyn Strategy>) -> Self {
        Self {
            kind: PlayerKind::Computer(strategy),
        }
    }

    pub fn name(&self) -> String {
        match &self.kind {
            PlayerKind::Human(name) => name.clone(),
            PlayerKind::Computer(strategy) => format!("Computer/{}", strategy.name()),
        }
    }

    /// The strategy driving this player, `None` for humans.
    pub fn strategy(&self) -> Option<&dyn Strategy> {
        match &self.kind {
            PlayerKind::Human(_) => None,
            PlayerKind::Computer(strategy) => Some(strategy.as_ref()),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One match: a board plus the two players on it.
///
/// The first player holds X and always moves first, the second holds O.
pub struct Game {
    board: Board,
    players: [Player; 2],
}

impl Game {
    pub fn new(player_x: Player, player_o: Player) -> Self {
        Self {
            board: Board::new(),
            players: [player_x, player_o],
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    /// Applies the current player's move; errors carry the board's
    /// taxonomy (`CellOccupied`, `GameAlreadyOver`).
    pub fn play(&mut self, cell: Cell) -> Result<(), BoardError> {
        self.board = self.board.set_mark(cell)?;
        Ok(())
    }

    pub fn is_over(&self) -> bool {
        self.board.is_complete()
    }

    pub fn current_player(&self) -> &Player {
        self.player_for(self.board.current_mark())
    }

    /// The player holding the winning mark, `None` while playing or drawn.
    pub fn winner(&self) -> Option<&Player> {
        self.board.winner().map(|mark| self.player_for(mark))
    }

    fn player_for(&self, mark: Mark) -> &Player {
        match mark {
            Mark::O => &self.players[1],
            _ => &self.players[0],
        }
    }
}
