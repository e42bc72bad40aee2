use core::time::Duration;

use crate::ship::ShipType;

/// Cells per row and per column.
pub const WIDTH: usize = 10;
/// Total number of cells on one board.
pub const BOARD_SIZE: usize = WIDTH * WIDTH;
pub const NUM_SHIPS: usize = 5;
/// Fleet catalog in placement order.
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("destroyer", 2),
    ShipType::new("submarine", 3),
    ShipType::new("cruiser", 3),
    ShipType::new("battleship", 4),
    ShipType::new("carrier", 5),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 2 + 3 + 3 + 4 + 5;

/// Upper bound on random placement and targeting draws before giving up.
pub const MAX_ATTEMPTS: usize = 10_000;

/// Pause between the human attack and the computer's move.
pub const THINK_DELAY: Duration = Duration::from_millis(3000);
/// Pause between the computer's move and re-enabling human input.
pub const RESUME_DELAY: Duration = Duration::from_millis(3000);

/// Convert a ship name string to the canonical static name used in the
/// configuration. Returns `None` if the name does not match any defined ship.
pub fn ship_name_static(name: &str) -> Option<&'static str> {
    SHIPS
        .iter()
        .find(|def| def.name().eq_ignore_ascii_case(name))
        .map(|def| def.name())
}
