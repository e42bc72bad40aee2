use alloc::vec::Vec;

use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::{
    board::Board,
    common::GameError,
    config::{BOARD_SIZE, MAX_ATTEMPTS},
    placement::{self, Placement},
    player::Player,
    ship::ShipId,
};

/// Computer that draws placements and targets uniformly at random,
/// redrawing whenever a draw is unusable.
#[derive(Debug, Default)]
pub struct RandomAi;

impl RandomAi {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomAi {
    fn place_ship(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        ship: ShipId,
    ) -> Result<Placement, GameError> {
        placement::place_random(board, ship, rng)
    }

    fn select_target(&mut self, rng: &mut SmallRng, target: &Board) -> Result<usize, GameError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let index = rng.random_range(0..BOARD_SIZE);
            if !target.cell(index)?.is_attacked() {
                debug!("computer targets {} after {} draw(s)", index, attempt);
                return Ok(index);
            }
        }
        Err(GameError::NoValidTargetFound)
    }
}

/// Computer that shuffles the list of every open option and takes one, so a
/// seeded game never redraws.
#[derive(Debug, Default)]
pub struct ShuffledAi;

impl ShuffledAi {
    pub fn new() -> Self {
        Self
    }
}

impl Player for ShuffledAi {
    fn place_ship(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        ship: ShipId,
    ) -> Result<Placement, GameError> {
        placement::place_shuffled(board, ship, rng)
    }

    fn select_target(&mut self, rng: &mut SmallRng, target: &Board) -> Result<usize, GameError> {
        let mut open: Vec<usize> = target.untried().collect();
        open.shuffle(rng);
        open.pop().ok_or(GameError::NoValidTargetFound)
    }
}
