use std::time::Duration;

use clap::Parser;
use log::info;
use minibattle::{gui, init_logging, GameConfig, Session, COMPUTER_DELAY_MS, TURN_SECONDS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// 5×5 Battleship against the computer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(
        long,
        default_value_t = TURN_SECONDS,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Seconds the user has to fire before the computer takes the turn"
    )]
    turn_seconds: u32,
    #[arg(
        long,
        default_value_t = COMPUTER_DELAY_MS,
        help = "Milliseconds the computer waits before replying to a shot"
    )]
    computer_delay_ms: u64,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig::new(
            self.turn_seconds,
            Duration::from_millis(self.computer_delay_ms),
        )
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    if let Some(s) = cli.seed {
        info!("using fixed seed {} (computer play is reproducible)", s);
    }

    let config = cli.config();
    info!(
        "turn limit {}s, computer delay {:?}",
        config.turn_seconds, config.computer_delay
    );
    gui::run(Session::new(config, cli.rng()))
}
