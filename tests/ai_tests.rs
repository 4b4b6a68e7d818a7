use minibattle::{random_target, Board, CellSet, Player, Position, RandomPlayer};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn every_cell() -> CellSet {
    let mut set = CellSet::new();
    Position::all().for_each(|p| {
        set.insert(p);
    });
    set
}

#[test]
fn test_full_board_has_no_target() {
    let mut rng = SmallRng::seed_from_u64(3);
    assert_eq!(random_target(&every_cell(), &mut rng), None);
}

#[test]
fn test_last_free_cell_is_found() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut tried = every_cell();
    let last = Position::new(3, 1).unwrap();
    tried.remove(last);
    assert_eq!(random_target(&tried, &mut rng), Some(last));
}

#[test]
fn test_random_player_exhausts_board_without_repeats() {
    let mut rng = SmallRng::seed_from_u64(77);
    let mut player = RandomPlayer::new();
    let mut tried = CellSet::new();
    for _ in 0..25 {
        let pos = player.select_target(&mut rng, &tried).unwrap();
        assert!(tried.insert(pos), "{} fired twice", pos);
    }
    assert!(tried.is_full());
    assert_eq!(player.select_target(&mut rng, &tried), None);
}

#[test]
fn test_random_player_deploys_full_fleet() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut board = Board::new();
    RandomPlayer::new().place_ships(&mut rng, &mut board).unwrap();
    assert!(board.fleet_ready());
}

proptest! {
    #[test]
    fn target_is_never_tried(seed in any::<u64>(), raw in 0u32..(1 << 25) - 1) {
        let mut tried = CellSet::new();
        Position::all().filter(|p| raw >> p.index() & 1 == 1).for_each(|p| {
            tried.insert(p);
        });
        let mut rng = SmallRng::seed_from_u64(seed);
        let pos = random_target(&tried, &mut rng).unwrap();
        prop_assert!(!tried.contains(pos));
    }
}
