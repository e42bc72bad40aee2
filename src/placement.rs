//! Ship placement: run validation and the placement engine used by both
//! sides.
//!
//! A run is the contiguous list of cell indices a ship would cover from a
//! start index. [`validate`] judges the run exactly as requested.
//! [`snap_start`] moves a drop target that would hang off the end of the
//! board back onto it, and the placement entry points apply it before
//! validating.

use alloc::vec::Vec;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::common::GameError;
use crate::config::{BOARD_SIZE, MAX_ATTEMPTS, WIDTH};
use crate::ship::{Orientation, ShipId};

/// Result of checking a candidate run against a board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation {
    /// Candidate cells that exist on the board, in increasing order.
    pub cells: Vec<usize>,
    /// Run stays inside the board without wrapping across a row.
    pub legal: bool,
    /// No candidate cell carries a ship.
    pub free: bool,
}

impl Validation {
    /// Placement succeeds iff the run is both legal and free.
    pub fn is_valid(&self) -> bool {
        self.legal && self.free
    }

    /// The run's cells, or the reason it cannot be used. Bounds are checked
    /// before occupancy.
    pub fn into_cells(self) -> Result<Vec<usize>, GameError> {
        if !self.legal {
            Err(GameError::InvalidPlacement)
        } else if !self.free {
            Err(GameError::CellOccupied)
        } else {
            Ok(self.cells)
        }
    }
}

/// A committed placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub ship: ShipId,
    pub orientation: Orientation,
    pub start: usize,
    pub cells: Vec<usize>,
}

/// Cells covered by a run of `length` from `start`, stopping at the end of
/// the board. Empty when `start` is off the board.
pub fn run_cells(orientation: Orientation, start: usize, length: usize) -> Vec<usize> {
    if start >= BOARD_SIZE {
        return Vec::new();
    }
    let step = match orientation {
        Orientation::Horizontal => 1,
        Orientation::Vertical => WIDTH,
    };
    (0..length)
        .map_while(|i| i.checked_mul(step).and_then(|offset| start.checked_add(offset)))
        .take_while(|&index| index < BOARD_SIZE)
        .collect()
}

/// Bounds check for a run: horizontal runs must end in the row they start
/// in, vertical runs must end above the bottom edge.
pub fn is_legal(orientation: Orientation, start: usize, length: usize) -> bool {
    if start >= BOARD_SIZE || length == 0 {
        return false;
    }
    match orientation {
        Orientation::Horizontal => length <= WIDTH - start % WIDTH,
        Orientation::Vertical => (length - 1)
            .checked_mul(WIDTH)
            .and_then(|offset| start.checked_add(offset))
            .is_some_and(|end| end < BOARD_SIZE),
    }
}

/// Check a candidate run against `board` without modifying it.
pub fn validate(board: &Board, orientation: Orientation, start: usize, length: usize) -> Validation {
    if start >= BOARD_SIZE {
        return Validation {
            cells: Vec::new(),
            legal: false,
            free: true,
        };
    }
    let cells = run_cells(orientation, start, length);
    let legal = is_legal(orientation, start, length);
    let free = cells
        .iter()
        .all(|&index| board.cells()[index].occupant().is_none());
    Validation { cells, legal, free }
}

/// Pull a drop target back so the run fits on the board: horizontal runs
/// past the last cell are clamped to `BOARD_SIZE - length`; vertical runs
/// that would pass the bottom edge move up by `length` rows. Starts outside
/// the board, and runs longer than the board, are returned unchanged.
pub fn snap_start(orientation: Orientation, start: usize, length: usize) -> usize {
    if start >= BOARD_SIZE || length == 0 || length > BOARD_SIZE {
        return start;
    }
    match orientation {
        Orientation::Horizontal if start > BOARD_SIZE - length => BOARD_SIZE - length,
        Orientation::Vertical if start + (length - 1) * WIDTH >= BOARD_SIZE => {
            start.saturating_sub(length * WIDTH)
        }
        _ => start,
    }
}

/// Hover feedback for dragging `ship` over `start`. Read-only.
pub fn preview(board: &Board, orientation: Orientation, start: usize, ship: ShipId) -> Validation {
    let length = ship.length();
    validate(board, orientation, snap_start(orientation, start, length), length)
}

/// Place `ship` at a single requested position. Nothing changes on failure.
pub fn place_ship(
    board: &mut Board,
    ship: ShipId,
    orientation: Orientation,
    start: usize,
) -> Result<Placement, GameError> {
    if start >= BOARD_SIZE {
        return Err(GameError::IndexOutOfRange(start));
    }
    if board.is_placed(ship) {
        return Err(GameError::ShipAlreadyPlaced);
    }
    let start = snap_start(orientation, start, ship.length());
    let cells = validate(board, orientation, start, ship.length()).into_cells()?;
    board.occupy(ship, &cells)?;
    Ok(Placement {
        ship,
        orientation,
        start,
        cells,
    })
}

/// Uniformly random orientation.
pub fn random_orientation<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
    if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

/// Retry random start cells and orientations until `ship` fits, giving up
/// after `MAX_ATTEMPTS` draws.
pub fn place_random<R: Rng + ?Sized>(
    board: &mut Board,
    ship: ShipId,
    rng: &mut R,
) -> Result<Placement, GameError> {
    if board.is_placed(ship) {
        return Err(GameError::ShipAlreadyPlaced);
    }
    for attempt in 1..=MAX_ATTEMPTS {
        let orientation = random_orientation(rng);
        let start = rng.random_range(0..BOARD_SIZE);
        match place_ship(board, ship, orientation, start) {
            Ok(placement) => {
                debug!("placed {} at {} {:?} after {} attempt(s)", ship, placement.start, orientation, attempt);
                return Ok(placement);
            }
            Err(GameError::InvalidPlacement) | Err(GameError::CellOccupied) => continue,
            Err(e) => return Err(e),
        }
    }
    Err(GameError::NoValidPlacementFound)
}

/// Every `(orientation, start)` at which `ship` would currently be legal and
/// free.
pub fn legal_placements(board: &Board, ship: ShipId) -> Vec<(Orientation, usize)> {
    let length = ship.length();
    [Orientation::Horizontal, Orientation::Vertical]
        .into_iter()
        .flat_map(|orientation| (0..BOARD_SIZE).map(move |start| (orientation, start)))
        .filter(|&(orientation, start)| validate(board, orientation, start, length).is_valid())
        .collect()
}

/// Deterministic alternative to [`place_random`]: shuffle the list of every
/// legal position and take one. Fails only when no position is left.
pub fn place_shuffled<R: Rng + ?Sized>(
    board: &mut Board,
    ship: ShipId,
    rng: &mut R,
) -> Result<Placement, GameError> {
    if board.is_placed(ship) {
        return Err(GameError::ShipAlreadyPlaced);
    }
    let mut candidates = legal_placements(board, ship);
    candidates.shuffle(rng);
    let (orientation, start) = candidates.pop().ok_or(GameError::NoValidPlacementFound)?;
    place_ship(board, ship, orientation, start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    /// Every cell taken by a single ship, so nothing else fits anywhere.
    fn saturated_board() -> Board {
        let mut board = Board::new();
        let all: Vec<usize> = (0..BOARD_SIZE).collect();
        board.occupy(ShipId::DESTROYER, &all).unwrap();
        board
    }

    #[test]
    fn test_saturated_board_has_no_placements() {
        let board = saturated_board();
        for ship in ShipId::all().skip(1) {
            assert!(legal_placements(&board, ship).is_empty());
        }
    }

    #[test]
    fn test_place_shuffled_gives_up_on_saturated_board() {
        let mut board = saturated_board();
        let before = board.clone();
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(
            place_shuffled(&mut board, ShipId::CARRIER, &mut rng).unwrap_err(),
            GameError::NoValidPlacementFound
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_random_stops_after_attempt_cap() {
        let mut board = saturated_board();
        let before = board.clone();
        let mut rng = SmallRng::seed_from_u64(2);
        assert_eq!(
            place_random(&mut board, ShipId::SUBMARINE, &mut rng).unwrap_err(),
            GameError::NoValidPlacementFound
        );
        assert_eq!(board, before);
    }
}
