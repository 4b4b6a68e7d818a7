//! Texts shown by the window.

use crate::core::{ShotOutcome, NUM_SHIPS};
use crate::session::{Event, Phase, Winner};

pub const WINDOW_TITLE: &str = "Battleship Game";
pub const WELCOME: &str = "🎯 Welcome to Battleship Game!";

pub const INSTRUCTIONS_TITLE: &str = "Game Instructions";

/// Body of the instructions dialog for a turn limit of `turn_seconds`.
pub fn instructions(turn_seconds: u32) -> String {
    format!(
        "📜 How to Play:\n\n\
        1. Place {ships} ships on your board (blue tiles).\n\
        2. Click on the computer's board to shoot.\n\
        3. You have {turn_seconds} seconds for each turn.\n\
        4. Hit: Red tile with 'X'. Miss: Gray tile with 'O'.\n\
        5. First to sink all {ships} opponent ships wins!\n\
        6. If you don't move in time, the computer takes a turn.",
        ships = NUM_SHIPS,
    )
}

pub const TIMES_UP_TITLE: &str = "Time's Up";
pub const TIMES_UP: &str = "You took too long! It's now the computer's turn.";

/// Banner of the game-over dialog.
pub fn winner_message(winner: Winner) -> &'static str {
    match winner {
        Winner::User => "🎉 You Win!",
        Winner::Computer => "💻 Computer Wins!",
    }
}

/// Status line above the boards.
pub fn status_text(phase: Phase) -> &'static str {
    match phase {
        Phase::NotStarted => "Click Start to Begin!",
        Phase::PlacingShips => "Place Your Ships!",
        Phase::UserTurn => "Your Turn!",
        Phase::ComputerTurn => "Computer's Turn!",
        Phase::GameOver(winner) => winner_message(winner),
    }
}

fn outcome_text(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Hit => "hit",
        ShotOutcome::Miss => "miss",
    }
}

/// One line about what just happened, for the action label and the log.
/// Countdown ticks have their own label and get `None`.
pub fn describe_event(event: &Event) -> Option<String> {
    let text = match event {
        Event::PlacementStarted => format!("Place {} ships on your board.", NUM_SHIPS),
        Event::ShipPlaced(pos) => format!("Ship placed at {}.", pos),
        Event::BattleStarted => "Fleets deployed. Fire at the computer's board!".to_string(),
        Event::UserFired { pos, outcome } => {
            format!("You fired at {}: {}.", pos, outcome_text(*outcome))
        }
        Event::ComputerFired { pos, outcome } => {
            format!("Computer fired at {}: {}.", pos, outcome_text(*outcome))
        }
        Event::Countdown(_) => return None,
        Event::TimeExpired => "Out of time, the computer fires.".to_string(),
        Event::GameOver(winner) => winner_message(*winner).to_string(),
        Event::Reset => format!("New game. Place {} ships.", NUM_SHIPS),
    };
    Some(text)
}

/// Countdown label.
pub fn timer_text(seconds: u32) -> String {
    format!("Time Left: {}s", seconds)
}
