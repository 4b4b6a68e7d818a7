//! One player's waters: where their ships are and where the opponent fired.

use alloc::vec::Vec;
use core::fmt;
use rand::seq::index;
use rand::Rng;

use crate::core::bitboard::CellSet;
use crate::core::common::{BoardError, CellState, Position, ShotOutcome};
use crate::core::config::NUM_SHIPS;

/// Ship placements, wrecks and incoming shots for a single player.
///
/// Ships are single cells. A hit moves the cell from `ships` to `wrecks`, so
/// the afloat set shrinks until the fleet is destroyed.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    ships: CellSet,
    wrecks: CellSet,
    incoming: CellSet,
}

impl Board {
    /// Empty board: no ships, no shots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills the remaining ship slots by sampling free cells without
    /// replacement.
    pub fn place_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        let free: Vec<Position> = Position::all()
            .filter(|p| !self.occupied().contains(*p))
            .collect();
        let wanted = NUM_SHIPS - self.fleet_size();
        if free.len() < wanted {
            return Err(BoardError::FleetComplete);
        }
        for i in index::sample(rng, free.len(), wanted).into_iter() {
            self.place(free[i])?;
        }
        Ok(())
    }

    /// Places a ship at `pos`.
    pub fn place(&mut self, pos: Position) -> Result<(), BoardError> {
        if self.fleet_size() >= NUM_SHIPS {
            return Err(BoardError::FleetComplete);
        }
        if self.occupied().contains(pos) {
            return Err(BoardError::ShipOverlaps);
        }
        self.ships.insert(pos);
        Ok(())
    }

    /// Takes a shot from the opponent.
    pub fn receive_shot(&mut self, pos: Position) -> Result<ShotOutcome, BoardError> {
        if self.incoming.contains(pos) {
            return Err(BoardError::AlreadyShot);
        }
        self.incoming.insert(pos);
        if self.ships.remove(pos) {
            self.wrecks.insert(pos);
            Ok(ShotOutcome::Hit)
        } else {
            Ok(ShotOutcome::Miss)
        }
    }

    /// Ships still afloat.
    pub fn ships(&self) -> CellSet {
        self.ships
    }

    /// Ships that have been hit.
    pub fn wrecks(&self) -> CellSet {
        self.wrecks
    }

    /// Every cell the opponent has fired at.
    pub fn incoming(&self) -> CellSet {
        self.incoming
    }

    /// Number of ships placed, sunk or not.
    pub fn fleet_size(&self) -> usize {
        self.occupied().len()
    }

    /// All ships placed are in position.
    pub fn fleet_ready(&self) -> bool {
        self.fleet_size() == NUM_SHIPS
    }

    /// `true` once a fleet was placed and every one of its cells was fired at.
    pub fn fleet_destroyed(&self) -> bool {
        let fleet = self.occupied();
        !fleet.is_empty() && fleet.is_subset(&self.incoming)
    }

    /// What `pos` shows to its owner.
    pub fn cell(&self, pos: Position) -> CellState {
        if self.wrecks.contains(pos) {
            CellState::Hit
        } else if self.incoming.contains(pos) {
            CellState::Miss
        } else if self.ships.contains(pos) {
            CellState::Ship
        } else {
            CellState::Empty
        }
    }

    /// Wipes ships and shots.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn occupied(&self) -> CellSet {
        self.ships | self.wrecks
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("ships", &self.ships)
            .field("wrecks", &self.wrecks)
            .field("incoming", &self.incoming)
            .finish()
    }
}
