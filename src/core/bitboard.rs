//! Set of board cells packed into the low `NUM_CELLS` bits of a `u32`.
//!
//! Row-major: cell `(r, c)` is bit `r * BOARD_SIZE + c`. The type is `Copy`,
//! allocation free and usable without `std`.

use core::fmt;
use core::ops::BitOr;

use crate::core::common::Position;
use crate::core::config::NUM_CELLS;

const MASK: u32 = (1u32 << NUM_CELLS) - 1;

/// Cell set covering one game board.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellSet {
    bits: u32,
}

impl CellSet {
    /// Empty set.
    #[inline]
    pub const fn new() -> Self {
        CellSet { bits: 0 }
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Whether every cell of the board is in the set.
    pub fn is_full(&self) -> bool {
        self.bits == MASK
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.bits & Self::bit(pos) != 0
    }

    /// Adds `pos`, returning `true` if it was not already present.
    pub fn insert(&mut self, pos: Position) -> bool {
        let fresh = !self.contains(pos);
        self.bits |= Self::bit(pos);
        fresh
    }

    /// Removes `pos`, returning `true` if it was present.
    pub fn remove(&mut self, pos: Position) -> bool {
        let present = self.contains(pos);
        self.bits &= !Self::bit(pos);
        present
    }

    /// `true` when every cell of `self` is also in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// Cells in the set, row-major.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        (0..NUM_CELLS)
            .filter(move |i| self.bits >> i & 1 == 1)
            .filter_map(|i| Position::from_index(i).ok())
    }

    #[inline]
    fn bit(pos: Position) -> u32 {
        1 << pos.index()
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for CellSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellSet {
            bits: (self.bits | rhs.bits) & MASK,
        }
    }
}
