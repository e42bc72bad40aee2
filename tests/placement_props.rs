use std::collections::HashMap;

use broadside::{
    place_random, place_shuffled, preview, validate, Board, Orientation, ShipId, BOARD_SIZE,
    TOTAL_SHIP_CELLS, WIDTH,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

/// Which ship sits on each occupied cell.
fn occupancy(board: &Board) -> HashMap<usize, ShipId> {
    board
        .cells()
        .iter()
        .filter_map(|c| c.occupant().map(|s| (c.index(), s)))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn any_input_yields_on_board_cells(o in orientation(), start in any::<usize>(), len in any::<usize>()) {
        let v = validate(&Board::new(), o, start, len);
        prop_assert!(v.cells.len() <= BOARD_SIZE);
        prop_assert!(v.cells.iter().all(|&i| i < BOARD_SIZE));
        if start >= BOARD_SIZE {
            prop_assert!(v.cells.is_empty());
            prop_assert!(!v.legal);
        }
    }

    #[test]
    fn legal_run_is_a_straight_line(o in orientation(), start in 0..BOARD_SIZE, len in 2usize..=5) {
        let v = validate(&Board::new(), o, start, len);
        if v.legal {
            prop_assert_eq!(v.cells.len(), len);
            prop_assert!(v.cells.windows(2).all(|w| w[0] < w[1]));
            match o {
                Orientation::Horizontal => {
                    prop_assert!(v.cells.iter().all(|&i| i / WIDTH == start / WIDTH));
                }
                Orientation::Vertical => {
                    prop_assert!(v.cells.iter().all(|&i| i % WIDTH == start % WIDTH));
                }
            }
        }
        prop_assert!(v.cells.len() <= len);
    }

    #[test]
    fn horizontal_legal_iff_run_fits_in_row(start in 0..BOARD_SIZE, len in 2usize..=5) {
        let v = validate(&Board::new(), Orientation::Horizontal, start, len);
        prop_assert_eq!(v.legal, start % WIDTH + len <= WIDTH);
    }

    #[test]
    fn vertical_legal_iff_run_ends_on_board(start in 0..BOARD_SIZE, len in 2usize..=5) {
        let v = validate(&Board::new(), Orientation::Vertical, start, len);
        prop_assert_eq!(v.legal, start + (len - 1) * WIDTH < BOARD_SIZE);
    }

    #[test]
    fn random_fleet_never_overlaps(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        for ship in ShipId::all() {
            place_random(&mut board, ship, &mut rng).unwrap();
        }
        let cells = occupancy(&board);
        prop_assert_eq!(cells.len(), TOTAL_SHIP_CELLS);
        for ship in ShipId::all() {
            prop_assert_eq!(cells.values().filter(|&&s| s == ship).count(), ship.length());
        }
    }

    #[test]
    fn shuffled_fleet_never_overlaps(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        for ship in ShipId::all() {
            let placed = place_shuffled(&mut board, ship, &mut rng).unwrap();
            prop_assert_eq!(board.ship_cells(ship).collect::<Vec<_>>(), placed.cells);
        }
        prop_assert_eq!(board.occupied_count(), TOTAL_SHIP_CELLS);
    }

    #[test]
    fn preview_never_mutates(seed in any::<u64>(), o in orientation(), start in 0..BOARD_SIZE, idx in 0usize..5) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        for ship in ShipId::all().take(3) {
            place_random(&mut board, ship, &mut rng).unwrap();
        }
        let before = board.clone();
        let ship = ShipId::new(idx).unwrap();
        let _ = preview(&board, o, start, ship);
        prop_assert_eq!(board, before);
    }
}
