//! Commonly used types and utilities for ease of import.

pub use crate::{
    AttackResult, Board, Game, GameError, GameObserver, Orientation, Player, RandomAi, ShipId,
    ShuffledAi, Side, TurnReport, TurnState,
};

#[cfg(feature = "std")]
pub use crate::{run_computer_turn, ConsoleObserver, Pacing};
