//! Core game logic (no_std compatible)
//!
//! Positions, cell sets, the two boards, the turn countdown and the random
//! targeting policy. Nothing in here knows about windows or wall-clock time.

pub mod ai;
pub mod bitboard;
pub mod board;
pub mod clock;
pub mod common;
pub mod config;
pub mod game;

// Re-export commonly used types
pub use ai::random_target;
pub use bitboard::CellSet;
pub use board::Board;
pub use clock::{ClockStep, TurnClock};
pub use common::{BoardError, CellState, Position, ShotOutcome};
pub use config::*;
pub use game::{GameEngine, GameStatus};
