use core::time::Duration;

pub const BOARD_SIZE: u8 = 5;
pub const NUM_SHIPS: usize = 3;
/// Total number of cells on a board.
pub const NUM_CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Seconds the user has to fire before the computer takes the turn.
pub const TURN_SECONDS: u32 = 20;
/// Delay between the user's shot and the computer's reply.
pub const COMPUTER_DELAY_MS: u64 = 1000;

/// Runtime knobs for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Whole seconds on the countdown at the start of every user turn.
    pub turn_seconds: u32,
    /// How long the computer "thinks" after the user has fired.
    pub computer_delay: Duration,
}

impl GameConfig {
    pub const fn new(turn_seconds: u32, computer_delay: Duration) -> Self {
        Self {
            turn_seconds,
            computer_delay,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(TURN_SECONDS, Duration::from_millis(COMPUTER_DELAY_MS))
    }
}
