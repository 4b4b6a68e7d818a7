//! Uniform random targeting for the computer opponent.

use rand::Rng;

use crate::core::bitboard::CellSet;
use crate::core::common::Position;
use crate::core::config::BOARD_SIZE;

/// Picks a cell not yet in `tried` uniformly at random.
///
/// Draws row and column independently and redraws on a repeat. Returns `None`
/// when every cell has already been tried.
pub fn random_target<R: Rng + ?Sized>(tried: &CellSet, rng: &mut R) -> Option<Position> {
    if tried.is_full() {
        return None;
    }
    loop {
        let row = rng.random_range(0..BOARD_SIZE as usize);
        let col = rng.random_range(0..BOARD_SIZE as usize);
        let pos = Position::new(row, col).ok()?;
        if !tried.contains(pos) {
            return Some(pos);
        }
    }
}
