use minibattle::{Board, BoardError, CellState, Position, ShotOutcome, NUM_SHIPS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

#[test]
fn test_position_bounds() {
    assert!(Position::new(4, 4).is_ok());
    assert_eq!(
        Position::new(5, 0).unwrap_err(),
        BoardError::OutOfBounds { row: 5, col: 0 }
    );
    assert_eq!(
        Position::new(0, 7).unwrap_err(),
        BoardError::OutOfBounds { row: 0, col: 7 }
    );
    assert_eq!(Position::from_index(7).unwrap(), pos(1, 2));
    assert!(Position::from_index(25).is_err());

    let all: Vec<_> = Position::all().collect();
    assert_eq!(all.len(), 25);
    assert_eq!(all[0], pos(0, 0));
    assert_eq!(all[24], pos(4, 4));
}

#[test]
fn test_place_limits() {
    let mut board = Board::new();
    board.place(pos(0, 0)).unwrap();
    assert_eq!(board.place(pos(0, 0)).unwrap_err(), BoardError::ShipOverlaps);
    board.place(pos(1, 1)).unwrap();
    board.place(pos(2, 2)).unwrap();
    assert!(board.fleet_ready());
    assert_eq!(board.place(pos(3, 3)).unwrap_err(), BoardError::FleetComplete);
    assert_eq!(board.fleet_size(), NUM_SHIPS);
}

#[test]
fn test_shots_sink_the_fleet() {
    let mut board = Board::new();
    for p in [pos(0, 0), pos(1, 1), pos(2, 2)] {
        board.place(p).unwrap();
    }

    assert_eq!(board.receive_shot(pos(4, 4)).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.receive_shot(pos(0, 0)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.ships().len(), 2);
    assert_eq!(board.receive_shot(pos(0, 0)).unwrap_err(), BoardError::AlreadyShot);
    assert!(!board.fleet_destroyed());

    board.receive_shot(pos(1, 1)).unwrap();
    board.receive_shot(pos(2, 2)).unwrap();
    assert!(board.fleet_destroyed());
    assert!(board.ships().is_empty());
    assert_eq!(board.wrecks().len(), 3);
    assert_eq!(board.incoming().len(), 4);
    // a wreck still counts as placed
    assert_eq!(board.place(pos(3, 3)).unwrap_err(), BoardError::FleetComplete);
}

#[test]
fn test_cell_states() {
    let mut board = Board::new();
    board.place(pos(0, 0)).unwrap();
    board.place(pos(0, 1)).unwrap();
    board.receive_shot(pos(0, 1)).unwrap();
    board.receive_shot(pos(3, 3)).unwrap();

    assert_eq!(board.cell(pos(0, 0)), CellState::Ship);
    assert_eq!(board.cell(pos(0, 1)), CellState::Hit);
    assert_eq!(board.cell(pos(3, 3)), CellState::Miss);
    assert_eq!(board.cell(pos(4, 4)), CellState::Empty);
}

#[test]
fn test_empty_board_is_not_destroyed() {
    assert!(!Board::new().fleet_destroyed());
}

#[test]
fn test_random_fleet() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut board = Board::new();
    board.place_random(&mut rng).unwrap();
    assert_eq!(board.ships().len(), NUM_SHIPS);
    assert!(board.incoming().is_empty());

    let mut partial = Board::new();
    partial.place(pos(2, 2)).unwrap();
    partial.place_random(&mut rng).unwrap();
    assert!(partial.fleet_ready());
    assert!(partial.ships().contains(pos(2, 2)));
}

#[test]
fn test_random_fleet_is_reproducible() {
    let (mut a, mut b) = (Board::new(), Board::new());
    a.place_random(&mut SmallRng::seed_from_u64(9)).unwrap();
    b.place_random(&mut SmallRng::seed_from_u64(9)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_clear() {
    let mut board = Board::new();
    board.place_random(&mut SmallRng::seed_from_u64(1)).unwrap();
    board.receive_shot(pos(0, 0)).unwrap();
    board.clear();
    assert_eq!(board, Board::new());
}
