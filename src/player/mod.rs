//! Player trait and the computer opponent.
//!
//! A Player is responsible for:
//! - Deploying its fleet on a board
//! - Selecting cells to fire at
//! - Optionally reacting to the outcome of its shots
//!
//! The human side is driven directly by clicks and does not go through this
//! trait.

use crate::core::{BoardError, Board, CellSet, Position, ShotOutcome};
use rand::rngs::SmallRng;

/// Interface implemented by automated players.
pub trait Player: Send {
    /// Place all ships onto the provided board.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError>;

    /// Choose the next cell to fire at, given every cell already tried.
    /// `None` means nothing is left to shoot.
    fn select_target(&mut self, rng: &mut SmallRng, tried: &CellSet) -> Option<Position>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _pos: Position, _outcome: ShotOutcome) {}
}

pub mod ai;
pub use ai::RandomPlayer;
