#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
#[cfg(feature = "gui")]
pub mod gui;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod session;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use player::{Player, RandomPlayer};
pub use session::{Event, Phase, Session, SessionError, Winner};
