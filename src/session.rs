#![cfg(feature = "std")]

//! Paced computer turns.
//!
//! The computer's move is deferred by two timers so a front end can show
//! "thinking" before the strike and the result before handing input back.
//! The delays only pace the display; `Pacing::instant()` removes them.

use std::time::Duration;

use log::debug;
use tokio::time::sleep;

use crate::{
    common::GameError,
    config::{RESUME_DELAY, THINK_DELAY},
    game::{Game, TurnReport, TurnState},
};

/// Delays around the computer's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Before the computer attacks.
    pub think: Duration,
    /// After the computer attacks, before human input is re-enabled.
    pub resume: Duration,
}

impl Pacing {
    pub fn new(think: Duration, resume: Duration) -> Self {
        Self { think, resume }
    }

    /// No waiting at all, for headless play and tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// Both delays set to `millis`.
    pub fn uniform_millis(millis: u64) -> Self {
        let d = Duration::from_millis(millis);
        Self::new(d, d)
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(THINK_DELAY, RESUME_DELAY)
    }
}

/// Run one computer turn: wait, attack, wait again. The game is borrowed
/// for the whole turn, so no human attack can slip in between.
pub async fn run_computer_turn(game: &mut Game, pacing: &Pacing) -> Result<TurnReport, GameError> {
    match game.state() {
        TurnState::ComputerThinking => {}
        TurnState::GameOver { .. } => return Err(GameError::ActionAfterGameOver),
        _ => return Err(GameError::NotYourTurn),
    }
    if !pacing.think.is_zero() {
        debug!("computer thinking for {:?}", pacing.think);
        sleep(pacing.think).await;
    }
    let report = game.computer_turn()?;
    if report.winner.is_none() && !pacing.resume.is_zero() {
        sleep(pacing.resume).await;
    }
    Ok(report)
}
