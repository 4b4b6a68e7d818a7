//! Both boards of one game and the win/loss check on them.

use crate::core::{
    bitboard::CellSet,
    board::Board,
    common::{BoardError, Position, ShotOutcome},
};

/// Current status of a game, seen from the user's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Both boards of a user-vs-computer game and the shot bookkeeping on them.
///
/// The user's shot set is the set of cells fired at on the computer's board
/// and vice versa.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    user: Board,
    computer: Board,
}

impl GameEngine {
    /// Create a new engine with empty boards.
    pub fn new() -> Self {
        Self::default()
    }

    /// The user's own board.
    pub fn user_board(&self) -> &Board {
        &self.user
    }

    /// The computer's board. Callers must not reveal its ships to the user.
    pub fn computer_board(&self) -> &Board {
        &self.computer
    }

    /// Mutable access to the computer's board for fleet deployment.
    pub fn computer_board_mut(&mut self) -> &mut Board {
        &mut self.computer
    }

    /// Cells the user has fired at.
    pub fn user_shots(&self) -> CellSet {
        self.computer.incoming()
    }

    /// Cells the computer has fired at.
    pub fn computer_shots(&self) -> CellSet {
        self.user.incoming()
    }

    /// Places one of the user's ships.
    pub fn place_user_ship(&mut self, pos: Position) -> Result<(), BoardError> {
        self.user.place(pos)
    }

    /// User fires at the computer's board.
    pub fn user_fire(&mut self, pos: Position) -> Result<ShotOutcome, BoardError> {
        self.computer.receive_shot(pos)
    }

    /// Computer fires at the user's board.
    pub fn computer_fire(&mut self, pos: Position) -> Result<ShotOutcome, BoardError> {
        self.user.receive_shot(pos)
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.computer.fleet_destroyed() {
            GameStatus::Won
        } else if self.user.fleet_destroyed() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Clears ships and shots on both boards.
    pub fn reset(&mut self) {
        self.user.clear();
        self.computer.clear();
    }
}
