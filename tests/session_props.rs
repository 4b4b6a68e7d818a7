use std::time::Duration;

use minibattle::{Event, GameConfig, GameStatus, Phase, Position, Session, Winner, NUM_SHIPS};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Starts a seeded session and places the user fleet at random cells.
fn battle(seed: u64) -> Session {
    let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
    let mut session = Session::new(GameConfig::default(), SmallRng::seed_from_u64(seed));
    session.start().unwrap();
    while session.phase() == Phase::PlacingShips {
        let p = Position::from_index(rng.random_range(0..25)).unwrap();
        let _ = session.place_ship(p);
    }
    session
}

fn check_invariants(session: &Session) -> Result<(), TestCaseError> {
    let engine = session.engine();
    prop_assert!(engine.user_shots().len() <= 25);
    prop_assert!(engine.computer_shots().len() <= 25);
    prop_assert!(engine.user_board().fleet_size() <= NUM_SHIPS);
    prop_assert!(engine.computer_board().fleet_size() <= NUM_SHIPS);

    // a fleet is gone exactly when every ship is in the opponent's shot set
    let user_gone = engine.user_board().wrecks().len() == NUM_SHIPS;
    let computer_gone = engine.computer_board().wrecks().len() == NUM_SHIPS;
    prop_assert_eq!(user_gone, engine.user_board().fleet_destroyed());
    prop_assert_eq!(computer_gone, engine.computer_board().fleet_destroyed());
    prop_assert!(engine.user_board().wrecks().is_subset(&engine.computer_shots()));
    prop_assert!(engine.computer_board().wrecks().is_subset(&engine.user_shots()));

    match session.phase() {
        Phase::GameOver(Winner::User) => prop_assert_eq!(engine.status(), GameStatus::Won),
        Phase::GameOver(Winner::Computer) => prop_assert_eq!(engine.status(), GameStatus::Lost),
        _ => prop_assert_eq!(engine.status(), GameStatus::InProgress),
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Random user play mixed with idle stretches always ends in a finished
    /// game without breaking the board invariants.
    #[test]
    fn random_games_finish(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        let mut session = battle(seed);
        let mut steps = 0;
        while !matches!(session.phase(), Phase::GameOver(_)) {
            steps += 1;
            prop_assert!(steps < 500, "game did not finish");
            match session.phase() {
                Phase::UserTurn if rng.random_bool(0.7) => {
                    let p = Position::from_index(rng.random_range(0..25)).unwrap();
                    let before = session.engine().user_shots();
                    if session.fire(p).is_err() {
                        prop_assert_eq!(session.engine().user_shots(), before);
                    }
                }
                _ => {
                    let dt = Duration::from_millis(rng.random_range(0..25_000));
                    session.advance(dt).unwrap();
                }
            }
            check_invariants(&session)?;
        }
        prop_assert!(!session.clock_running());
    }

    /// Within one computer delay and the countdown that follows it, feeding
    /// time in one piece or in slices leads to the same game.
    #[test]
    fn time_slicing_is_irrelevant(
        seed in any::<u64>(),
        slices in proptest::collection::vec(0u64..1_000, 1..21),
    ) {
        let total: u64 = slices.iter().sum();
        let mut whole = battle(seed);
        let mut sliced = battle(seed);
        let target = Position::new(0, 0).unwrap();
        whole.fire(target).unwrap();
        sliced.fire(target).unwrap();

        whole.advance(Duration::from_millis(total)).unwrap();
        for ms in slices {
            sliced.advance(Duration::from_millis(ms)).unwrap();
        }

        prop_assert_eq!(whole.phase(), sliced.phase());
        prop_assert_eq!(whole.time_left(), sliced.time_left());
        prop_assert_eq!(whole.engine().computer_shots(), sliced.engine().computer_shots());
        prop_assert_eq!(whole.computer_pending(), sliced.computer_pending());
    }

    /// However long the stall, one call yields at most one timeout.
    #[test]
    fn one_timeout_per_call(seed in any::<u64>(), secs in 20u64..10_000) {
        let mut session = battle(seed);
        let events = session.advance(Duration::from_secs(secs)).unwrap();
        prop_assert_eq!(events.iter().filter(|e| **e == Event::TimeExpired).count(), 1);
        prop_assert_eq!(session.engine().computer_shots().len(), 1);
        check_invariants(&session)?;
    }

    /// Running out the countdown gives the computer exactly one shot.
    #[test]
    fn expiry_switches_turn(seed in any::<u64>(), extra in 0u64..999) {
        let mut session = battle(seed);
        let shots_before = session.engine().computer_shots().len();
        session.advance(Duration::from_millis(19_000 + extra)).unwrap();
        prop_assert_eq!(session.engine().computer_shots().len(), shots_before);
        session.advance(Duration::from_millis(1_000)).unwrap();
        prop_assert_eq!(session.engine().computer_shots().len(), shots_before + 1);
    }
}
