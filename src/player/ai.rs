use crate::core::{ai, Board, BoardError, CellSet, Position};
use rand::rngs::SmallRng;

use super::Player;

/// Computer opponent: random fleet, uniformly random shots, no memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        board.place_random(rng)
    }

    fn select_target(&mut self, rng: &mut SmallRng, tried: &CellSet) -> Option<Position> {
        ai::random_target(tried, rng)
    }
}
