//! Per-turn countdown driven by externally measured elapsed time.

use core::time::Duration;

const SECOND: Duration = Duration::from_secs(1);

/// What happened while feeding time into a [`TurnClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStep {
    /// Still running; `ticks` whole seconds went by.
    Running { ticks: u32 },
    /// Reached zero. Time fed past the expiry is discarded.
    Expired { ticks: u32 },
}

/// 1 Hz countdown from a fixed number of seconds.
///
/// Sub-second remainders are carried between calls, so the countdown only
/// depends on the total time fed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnClock {
    limit: u32,
    remaining: u32,
    carry: Duration,
    running: bool,
}

impl TurnClock {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            remaining: limit,
            carry: Duration::ZERO,
            running: false,
        }
    }

    /// Whole seconds left on the countdown.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Refills the countdown and starts it.
    pub fn restart(&mut self) {
        self.reset();
        self.running = true;
    }

    /// Refills the countdown without starting it.
    pub fn reset(&mut self) {
        self.remaining = self.limit;
        self.carry = Duration::ZERO;
        self.running = false;
    }

    /// Freezes the countdown where it is.
    pub fn stop(&mut self) {
        self.running = false;
        self.carry = Duration::ZERO;
    }

    /// Feeds `dt` into the countdown. A stopped clock ignores time.
    pub fn advance(&mut self, dt: Duration) -> ClockStep {
        if !self.running {
            return ClockStep::Running { ticks: 0 };
        }
        self.carry = self.carry.saturating_add(dt);
        let mut ticks = 0;
        while self.carry >= SECOND && self.remaining > 0 {
            self.carry -= SECOND;
            self.remaining -= 1;
            ticks += 1;
        }
        if self.remaining == 0 {
            self.running = false;
            self.carry = Duration::ZERO;
            return ClockStep::Expired { ticks };
        }
        ClockStep::Running { ticks }
    }
}
