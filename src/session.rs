//! Turn and timeout state machine for one user-vs-computer game.
//!
//! A [`Session`] owns the [`GameEngine`], the computer [`Player`] and the
//! user's [`TurnClock`]. The front end feeds it clicks and elapsed time and
//! gets back the [`Event`]s to render. Rejected actions leave the session
//! untouched.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::core::{
    BoardError, ClockStep, GameConfig, GameEngine, GameStatus, Position, ShotOutcome, TurnClock,
};
use crate::player::{Player, RandomPlayer};

/// Who sank the other fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    User,
    Computer,
}

/// Where the game is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the start dialog to be accepted.
    NotStarted,
    /// The user is placing ships on their board.
    PlacingShips,
    /// The user may fire; the countdown is running.
    UserTurn,
    /// The computer is about to fire.
    ComputerTurn,
    GameOver(Winner),
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::NotStarted => write!(f, "not started"),
            Phase::PlacingShips => write!(f, "ship placement"),
            Phase::UserTurn => write!(f, "user turn"),
            Phase::ComputerTurn => write!(f, "computer turn"),
            Phase::GameOver(Winner::User) => write!(f, "game over (user won)"),
            Phase::GameOver(Winner::Computer) => write!(f, "game over (computer won)"),
        }
    }
}

/// Something the front end should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    PlacementStarted,
    ShipPlaced(Position),
    /// Both fleets are deployed and the user's first turn begins.
    BattleStarted,
    UserFired { pos: Position, outcome: ShotOutcome },
    ComputerFired { pos: Position, outcome: ShotOutcome },
    /// Seconds left on the user's countdown.
    Countdown(u32),
    /// The user let the countdown run out.
    TimeExpired,
    GameOver(Winner),
    Reset,
}

/// Why an action was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The action is not available in this phase.
    WrongPhase(Phase),
    Board(BoardError),
}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        SessionError::Board(err)
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::WrongPhase(phase) => write!(f, "Not allowed during {}", phase),
            SessionError::Board(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SessionError {}

pub struct Session {
    engine: GameEngine,
    phase: Phase,
    clock: TurnClock,
    /// Time left before the computer fires, while it is the computer's turn.
    pending: Option<Duration>,
    opponent: Box<dyn Player>,
    rng: SmallRng,
    config: GameConfig,
}

impl Session {
    /// Session against the random computer opponent.
    pub fn new(config: GameConfig, rng: SmallRng) -> Self {
        Self::with_opponent(config, rng, Box::new(RandomPlayer::new()))
    }

    pub fn with_opponent(config: GameConfig, rng: SmallRng, opponent: Box<dyn Player>) -> Self {
        Self {
            engine: GameEngine::new(),
            phase: Phase::NotStarted,
            clock: TurnClock::new(config.turn_seconds),
            pending: None,
            opponent,
            rng,
            config,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seconds left on the user's countdown.
    pub fn time_left(&self) -> u32 {
        self.clock.remaining()
    }

    /// Whether the countdown is currently running.
    pub fn clock_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Time until the computer fires, if it is the computer's turn.
    pub fn computer_pending(&self) -> Option<Duration> {
        self.pending
    }

    /// Accepts the start dialog.
    pub fn start(&mut self) -> Result<Vec<Event>, SessionError> {
        self.expect_phase(Phase::NotStarted)?;
        self.phase = Phase::PlacingShips;
        info!("game started, waiting for ship placement");
        Ok(alloc::vec![Event::PlacementStarted])
    }

    /// Places a user ship. The last ship deploys the computer fleet and hands
    /// the first turn to the user.
    pub fn place_ship(&mut self, pos: Position) -> Result<Vec<Event>, SessionError> {
        self.expect_phase(Phase::PlacingShips)?;
        self.engine.place_user_ship(pos)?;
        debug!("user ship placed at {}", pos);
        let mut events = alloc::vec![Event::ShipPlaced(pos)];

        if self.engine.user_board().fleet_ready() {
            let board = self.engine.computer_board_mut();
            board.clear();
            self.opponent.place_ships(&mut self.rng, board)?;
            self.phase = Phase::UserTurn;
            self.clock.restart();
            info!("fleets deployed, user turn");
            events.push(Event::BattleStarted);
            events.push(Event::Countdown(self.clock.remaining()));
        }
        Ok(events)
    }

    /// User fires at the computer's board.
    pub fn fire(&mut self, pos: Position) -> Result<Vec<Event>, SessionError> {
        self.expect_phase(Phase::UserTurn)?;
        let outcome = self.engine.user_fire(pos)?;
        debug!("user fired at {}: {:?}", pos, outcome);
        let mut events = alloc::vec![Event::UserFired { pos, outcome }];

        self.clock.stop();
        if self.engine.status() == GameStatus::Won {
            self.finish(Winner::User, &mut events);
        } else {
            self.phase = Phase::ComputerTurn;
            self.pending = Some(self.config.computer_delay);
        }
        Ok(events)
    }

    /// Feeds elapsed time: runs the countdown during the user's turn and
    /// fires the computer's shot once its delay has passed. Time left over
    /// after the computer's delay carries into the user's countdown.
    ///
    /// A timeout ends the call: the computer takes its forced shot and the
    /// rest of `dt` is dropped, so a stalled front end sees one `TimeExpired`
    /// per call and can stop on it.
    pub fn advance(&mut self, dt: Duration) -> Result<Vec<Event>, SessionError> {
        let mut events = Vec::new();
        let mut budget = dt;
        loop {
            match self.phase {
                Phase::UserTurn => match self.clock.advance(budget) {
                    ClockStep::Running { ticks } => {
                        if ticks > 0 {
                            events.push(Event::Countdown(self.clock.remaining()));
                        }
                        break;
                    }
                    ClockStep::Expired { ticks } => {
                        if ticks > 0 {
                            events.push(Event::Countdown(0));
                        }
                        info!("user ran out of time");
                        events.push(Event::TimeExpired);
                        self.phase = Phase::ComputerTurn;
                        self.computer_turn(&mut events)?;
                        break;
                    }
                },
                Phase::ComputerTurn => {
                    let wait = self.pending.unwrap_or(Duration::ZERO);
                    if budget < wait {
                        self.pending = Some(wait - budget);
                        break;
                    }
                    budget -= wait;
                    self.pending = Some(Duration::ZERO);
                    self.computer_turn(&mut events)?;
                }
                _ => break,
            }
        }
        Ok(events)
    }

    /// Starts over from ship placement after a finished game.
    pub fn reset(&mut self) -> Result<Vec<Event>, SessionError> {
        if !matches!(self.phase, Phase::GameOver(_)) {
            return Err(SessionError::WrongPhase(self.phase));
        }
        self.engine.reset();
        self.clock.reset();
        self.pending = None;
        self.phase = Phase::PlacingShips;
        info!("game reset");
        Ok(alloc::vec![Event::Reset])
    }

    fn computer_turn(&mut self, events: &mut Vec<Event>) -> Result<(), SessionError> {
        let tried = self.engine.computer_shots();
        let pos = self
            .opponent
            .select_target(&mut self.rng, &tried)
            .ok_or(BoardError::NoTargetsLeft)?;
        let outcome = self.engine.computer_fire(pos)?;
        self.opponent.handle_shot_result(pos, outcome);
        self.pending = None;
        debug!("computer fired at {}: {:?}", pos, outcome);
        events.push(Event::ComputerFired { pos, outcome });

        if self.engine.status() == GameStatus::Lost {
            self.finish(Winner::Computer, events);
        } else {
            self.phase = Phase::UserTurn;
            self.clock.restart();
            events.push(Event::Countdown(self.clock.remaining()));
        }
        Ok(())
    }

    fn finish(&mut self, winner: Winner, events: &mut Vec<Event>) {
        self.clock.stop();
        self.pending = None;
        self.phase = Phase::GameOver(winner);
        info!("game over: {:?} wins", winner);
        events.push(Event::GameOver(winner));
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            debug!("ignoring action in phase {}", self.phase);
            Err(SessionError::WrongPhase(self.phase))
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("phase", &self.phase)
            .field("engine", &self.engine)
            .field("clock", &self.clock)
            .field("pending", &self.pending)
            .field("config", &self.config)
            .finish()
    }
}
