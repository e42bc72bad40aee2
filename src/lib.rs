#![cfg_attr(not(feature = "std"), no_std)]

// Core modules name `alloc` paths in both builds.
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod combat;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
pub mod session;
mod ship;
pub mod prelude;

pub use board::*;
pub use combat::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
pub use placement::*;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
#[cfg(feature = "std")]
pub use session::{run_computer_turn, Pacing};
pub use ship::*;
