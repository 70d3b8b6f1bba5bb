mod common;

use gridfleet::{Board, BoardError, CellState, Coord, Direction, FleetComposition};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

const SIZE: i32 = 10;

fn random_board(seed: u64) -> (Board, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(SIZE as usize, SIZE as usize).unwrap();
    board
        .generate_random_board(&FleetComposition::default(), &mut rng)
        .unwrap();
    (board, rng)
}

fn coord() -> impl Strategy<Value = Coord> {
    (0..SIZE, 0..SIZE).prop_map(|(x, y)| Coord::new(x, y))
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_layouts_are_well_formed(seed in any::<u64>()) {
        let (board, _) = random_board(seed);
        common::assert_well_formed(&board);
        prop_assert_eq!(
            common::ship_lengths(&board),
            FleetComposition::default().lengths_descending()
        );
    }

    #[test]
    fn second_hit_is_always_invalid(seed in any::<u64>(), c in coord()) {
        let (mut board, _) = random_board(seed);
        board.hit(c).unwrap();
        let after_first = board.clone();
        prop_assert_eq!(board.hit(c).unwrap_err(), BoardError::AlreadyTargeted(c));
        prop_assert_eq!(board, after_first);
    }

    #[test]
    fn destroyed_iff_whole_run_hit(seed in any::<u64>(), shots in 0usize..80) {
        let (mut board, mut rng) = random_board(seed);
        for _ in 0..shots {
            let c = Coord::new(rng.random_range(0..SIZE), rng.random_range(0..SIZE));
            let _ = board.hit(c);
        }
        let hits: Vec<Coord> = board
            .grid()
            .iter()
            .filter(|&(_, s)| s == CellState::ShipHit)
            .map(|(c, _)| c)
            .collect();
        for c in hits {
            let ship = board.ship_at(c).unwrap();
            let all_hit = ship
                .cells()
                .all(|cell| board.grid().peek(cell) == Some(CellState::ShipHit));
            prop_assert_eq!(board.ship_destroyed(c), all_hit);
        }
        prop_assert_eq!(
            board.all_ships_destroyed(),
            board.grid().count(CellState::Ship) == 0
        );
    }

    #[test]
    fn move_is_atomic(seed in any::<u64>(), from in coord(), to in coord()) {
        let (mut board, _) = random_board(seed);
        let before = board.clone();
        match board.move_ship(from, to) {
            Ok(()) => {
                common::assert_well_formed(&board);
                prop_assert_eq!(common::ship_lengths(&board), common::ship_lengths(&before));
            }
            Err(_) => prop_assert_eq!(board, before),
        }
    }

    #[test]
    fn rotate_is_atomic(seed in any::<u64>(), loc in coord(), dir in direction()) {
        let (mut board, _) = random_board(seed);
        let before = board.clone();
        match board.rotate_ship(loc, dir) {
            Ok(()) => {
                common::assert_well_formed(&board);
                prop_assert_eq!(common::ship_lengths(&board), common::ship_lengths(&before));
            }
            Err(_) => prop_assert_eq!(board, before),
        }
    }

    #[test]
    fn deduction_never_touches_ships(seed in any::<u64>(), shots in 1usize..100) {
        let (mut board, mut rng) = random_board(seed);
        let ship_cells = FleetComposition::default().cell_count().unwrap();
        for _ in 0..shots {
            let c = Coord::new(rng.random_range(0..SIZE), rng.random_range(0..SIZE));
            if board.hit(c).is_ok() {
                let sunk = board.ship_destroyed(c);
                board.update_redundant_squares(c, sunk).unwrap();
            }
            prop_assert_eq!(
                board.grid().count(CellState::Ship) + board.grid().count(CellState::ShipHit),
                ship_cells
            );
        }
    }
}
