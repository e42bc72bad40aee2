//! Common types for Broadside: sides, attack results and game errors.

use core::fmt;

use crate::ship::ShipId;

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    /// The human.
    Player,
    Computer,
}

impl Side {
    /// The side on the receiving end of this side's attacks.
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("player"),
            Side::Computer => f.write_str("computer"),
        }
    }
}

/// Outcome of a single attack against a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// The cell held part of this ship.
    Hit(ShipId),
    /// The cell was open water.
    Miss,
    /// The cell had been attacked before; nothing changed.
    AlreadyAttacked,
}

impl AttackResult {
    /// Ship struck by this attack, if any.
    pub fn ship(&self) -> Option<ShipId> {
        match self {
            AttackResult::Hit(ship) => Some(*ship),
            _ => None,
        }
    }

    /// `true` when the attack marked a fresh cell.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, AttackResult::AlreadyAttacked)
    }
}

/// Errors returned by placement, combat and turn operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Candidate run leaves the board or wraps across a row boundary.
    #[error("ship placement is out of bounds")]
    InvalidPlacement,
    /// Candidate run overlaps a ship already on the board.
    #[error("ship placement overlaps with another ship")]
    CellOccupied,
    /// The ship is already on this board.
    #[error("ship is already placed on the board")]
    ShipAlreadyPlaced,
    /// Cell index outside `0..BOARD_SIZE`.
    #[error("cell index {0} is out of range")]
    IndexOutOfRange(usize),
    /// Random placement gave up after the attempt budget.
    #[error("no valid placement found")]
    NoValidPlacementFound,
    /// No unattacked cell could be selected.
    #[error("no valid target found")]
    NoValidTargetFound,
    /// The game cannot start before both fleets are placed.
    #[error("please place all your pieces first")]
    FleetIncomplete,
    /// Action attempted while the other side holds the turn.
    #[error("it is not this side's turn")]
    NotYourTurn,
    /// Any placement or attack once a fleet has been sunk.
    #[error("the game is over")]
    ActionAfterGameOver,
}
