//! Common types for the game core: positions, shot outcomes and board errors.

use core::fmt;

use crate::core::config::BOARD_SIZE;

/// A cell on the board, both coordinates in `[0, BOARD_SIZE)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Checked constructor.
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= BOARD_SIZE as usize || col >= BOARD_SIZE as usize {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(Position {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Position of the `index`-th cell in row-major order.
    pub fn from_index(index: usize) -> Result<Self, BoardError> {
        let n = BOARD_SIZE as usize;
        Self::new(index / n, index % n)
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Row-major index, the inverse of [`Position::from_index`].
    pub fn index(&self) -> usize {
        self.row() * BOARD_SIZE as usize + self.col()
    }

    /// Every position on the board, row-major.
    pub fn all() -> impl Iterator<Item = Position> {
        let n = BOARD_SIZE;
        (0..n).flat_map(move |row| (0..n).map(move |col| Position { row, col }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Hit,
    Miss,
}

/// What a single cell of a board shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Open water nobody has fired at.
    Empty,
    /// A ship still afloat.
    Ship,
    /// A ship that has been hit.
    Hit,
    /// A shot that found only water.
    Miss,
}

/// Errors returned by board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinates outside the board.
    OutOfBounds { row: usize, col: usize },
    /// A ship already occupies this cell.
    ShipOverlaps,
    /// The fleet already holds the maximum number of ships.
    FleetComplete,
    /// This cell has already been fired at.
    AlreadyShot,
    /// No untried cell is left to fire at.
    NoTargetsLeft,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is outside the board", row, col)
            }
            BoardError::ShipOverlaps => write!(f, "A ship is already placed there"),
            BoardError::FleetComplete => write!(f, "All ships have already been placed"),
            BoardError::AlreadyShot => write!(f, "That cell has already been fired at"),
            BoardError::NoTargetsLeft => write!(f, "Every cell has already been fired at"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
