//! Game board state: one side's 10×10 grid of indexed cells.

use alloc::vec::Vec;
use core::fmt;

use crate::common::GameError;
use crate::config::{BOARD_SIZE, NUM_SHIPS, WIDTH};
use crate::ship::ShipId;

/// A single board cell tracking ship occupancy and attack history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    index: usize,
    occupant: Option<ShipId>,
    attacked: bool,
}

impl Cell {
    fn new(index: usize) -> Self {
        Cell {
            index,
            occupant: None,
            attacked: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn row(&self) -> usize {
        self.index / WIDTH
    }

    pub fn col(&self) -> usize {
        self.index % WIDTH
    }

    /// Ship placed on this cell, if any.
    pub fn occupant(&self) -> Option<ShipId> {
        self.occupant
    }

    pub fn is_attacked(&self) -> bool {
        self.attacked
    }

    /// Attacked and occupied.
    pub fn is_hit(&self) -> bool {
        self.attacked && self.occupant.is_some()
    }

    /// Attacked open water.
    pub fn is_miss(&self) -> bool {
        self.attacked && self.occupant.is_none()
    }
}

/// Main board state: ship placements and attacked cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    placed: [bool; NUM_SHIPS],
}

impl Board {
    /// Create an empty board (no ships placed, nothing attacked).
    pub fn new() -> Self {
        Board {
            cells: (0..BOARD_SIZE).map(Cell::new).collect(),
            placed: [false; NUM_SHIPS],
        }
    }

    /// Cell at `index`.
    pub fn cell(&self, index: usize) -> Result<&Cell, GameError> {
        self.cells.get(index).ok_or(GameError::IndexOutOfRange(index))
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns `true` once `ship` has been placed on this board.
    pub fn is_placed(&self, ship: ShipId) -> bool {
        self.placed[ship.index()]
    }

    /// Returns `true` when the whole fleet is on the board.
    pub fn fleet_complete(&self) -> bool {
        self.placed.iter().all(|&p| p)
    }

    /// Ships not yet placed, in placement order.
    pub fn unplaced(&self) -> impl Iterator<Item = ShipId> + '_ {
        ShipId::all().filter(move |ship| !self.is_placed(*ship))
    }

    /// Number of cells carrying a ship.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.occupant.is_some()).count()
    }

    /// Indices of the cells occupied by `ship`, in increasing order.
    pub fn ship_cells(&self, ship: ShipId) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .filter(move |c| c.occupant == Some(ship))
            .map(|c| c.index)
    }

    /// Indices of cells that have not been attacked yet.
    pub fn untried(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().filter(|c| !c.attacked).map(|c| c.index)
    }

    pub fn attacked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.attacked).count()
    }

    /// Record `ship` on every cell of `run`. The run must already have been
    /// validated as legal and free.
    pub(crate) fn occupy(&mut self, ship: ShipId, run: &[usize]) -> Result<(), GameError> {
        if self.is_placed(ship) {
            return Err(GameError::ShipAlreadyPlaced);
        }
        for &index in run {
            let cell = self
                .cells
                .get(index)
                .ok_or(GameError::IndexOutOfRange(index))?;
            if cell.occupant.is_some() {
                return Err(GameError::CellOccupied);
            }
        }
        for &index in run {
            self.cells[index].occupant = Some(ship);
        }
        self.placed[ship.index()] = true;
        Ok(())
    }

    /// Mark `index` attacked. Returns the previous cell state so callers can
    /// tell a fresh strike from a repeat.
    pub(crate) fn strike(&mut self, index: usize) -> Result<Cell, GameError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GameError::IndexOutOfRange(index))?;
        let before = *cell;
        cell.attacked = true;
        Ok(before)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.cells.chunks(WIDTH) {
            f.write_str("  ")?;
            for cell in row {
                let ch = match (cell.occupant, cell.attacked) {
                    (Some(_), true) => 'X',
                    (None, true) => 'o',
                    (Some(ship), false) => ship
                        .name()
                        .chars()
                        .next()
                        .map(|c| c.to_ascii_uppercase())
                        .unwrap_or('S'),
                    (None, false) => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
