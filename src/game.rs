//! Turn controller: fleet setup, strictly alternating attacks and game over.

use alloc::boxed::Box;
use alloc::vec::Vec;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{
    board::Board,
    combat::{self, Combatant, HitLog, SunkSet},
    common::{AttackResult, GameError, Side},
    config::{BOARD_SIZE, MAX_ATTEMPTS},
    placement::{self, Placement, Validation},
    player::Player,
    player_ai::RandomAi,
    ship::{Orientation, ShipId},
};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnState {
    /// Fleets are still being placed.
    Setup,
    /// The human may attack.
    AwaitingHumanInput,
    /// Human input is disabled until the computer has moved.
    ComputerThinking,
    /// A fleet is sunk; nothing further is accepted.
    GameOver { winner: Side },
}

/// Callbacks for the presentation layer. All methods default to no-ops.
pub trait GameObserver: Send {
    /// An attack resolved against a fresh cell.
    fn on_attack(&mut self, _attacker: Side, _index: usize, _result: AttackResult) {}

    /// `owner` lost `ship`.
    fn on_sunk(&mut self, _owner: Side, _ship: ShipId) {}

    fn on_game_over(&mut self, _winner: Side) {}
}

/// Everything one attack produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub attacker: Side,
    pub index: usize,
    pub result: AttackResult,
    /// Defender's ships that went down on this attack.
    pub sunk: Vec<ShipId>,
    pub winner: Option<Side>,
}

/// A human-versus-computer game.
pub struct Game {
    player: Combatant,
    computer: Combatant,
    ai: Box<dyn Player>,
    rng: SmallRng,
    state: TurnState,
    observer: Option<Box<dyn GameObserver>>,
}

impl Game {
    /// Create a game in [`TurnState::Setup`] with empty boards.
    pub fn new(ai: Box<dyn Player>, rng: SmallRng) -> Self {
        Self {
            player: Combatant::new(),
            computer: Combatant::new(),
            ai,
            rng,
            state: TurnState::Setup,
            observer: None,
        }
    }

    /// Game against [`RandomAi`] with a reproducible RNG.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Box::new(RandomAi::new()), SmallRng::seed_from_u64(seed))
    }

    pub fn set_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observer = Some(observer);
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, TurnState::GameOver { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            TurnState::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.combatant(side).board
    }

    /// Hits scored by `side` on its opponent.
    pub fn hit_log(&self, side: Side) -> &HitLog {
        &self.combatant(side).hits
    }

    /// Ships of `side` that have been sunk.
    pub fn sunk(&self, side: Side) -> &SunkSet {
        &self.combatant(side).sunk
    }

    /// Ships of `side` still afloat.
    pub fn remaining_ships(&self, side: Side) -> Vec<ShipId> {
        self.combatant(side).remaining().collect()
    }

    fn ensure_not_over(&self) -> Result<(), GameError> {
        if self.is_over() {
            Err(GameError::ActionAfterGameOver)
        } else {
            Ok(())
        }
    }

    /// Human placement from a drop target. A missing `start` picks a random
    /// cell. Failures are reported, never retried.
    pub fn place_player_ship(
        &mut self,
        ship: ShipId,
        orientation: Orientation,
        start: Option<usize>,
    ) -> Result<Placement, GameError> {
        self.ensure_not_over()?;
        let start = match start {
            Some(start) => start,
            None => self.rng.random_range(0..BOARD_SIZE),
        };
        placement::place_ship(&mut self.player.board, ship, orientation, start)
            .inspect_err(|e| debug!("rejected {} at {} {:?}: {}", ship, start, orientation, e))
    }

    /// Place one computer ship through the strategy's retry policy.
    pub fn place_computer_ship(&mut self, ship: ShipId) -> Result<Placement, GameError> {
        self.ensure_not_over()?;
        self.ai.place_ship(&mut self.rng, &mut self.computer.board, ship)
    }

    /// Place the computer's remaining ships in fleet order.
    pub fn place_computer_fleet(&mut self) -> Result<(), GameError> {
        self.ensure_not_over()?;
        self.ai.place_ships(&mut self.rng, &mut self.computer.board)
    }

    /// Place the human's remaining ships automatically, the way the computer
    /// places its own.
    pub fn auto_place_player_fleet(&mut self) -> Result<(), GameError> {
        self.ensure_not_over()?;
        self.ai.place_ships(&mut self.rng, &mut self.player.board)
    }

    /// Hover feedback for placing `ship` on `side`'s board. Read-only.
    pub fn preview_placement(
        &self,
        side: Side,
        orientation: Orientation,
        start: usize,
        ship: ShipId,
    ) -> Validation {
        placement::preview(self.board(side), orientation, start, ship)
    }

    /// Leave setup once both fleets are complete.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.ensure_not_over()?;
        if self.state != TurnState::Setup {
            return Ok(());
        }
        if !self.player.board.fleet_complete() || !self.computer.board.fleet_complete() {
            return Err(GameError::FleetIncomplete);
        }
        self.state = TurnState::AwaitingHumanInput;
        info!("both fleets placed, player to move");
        Ok(())
    }

    fn pair_mut(&mut self, attacker: Side) -> (&mut Combatant, &mut Combatant) {
        match attacker {
            Side::Player => (&mut self.player, &mut self.computer),
            Side::Computer => (&mut self.computer, &mut self.player),
        }
    }

    /// Resolve `attacker`'s strike at `index` on the opponent's board.
    ///
    /// A repeat attack returns [`AttackResult::AlreadyAttacked`] and keeps
    /// the turn where it is. Any other result hands the turn over, or ends
    /// the game when the defender's last ship goes down.
    ///
    /// Presentation code submits only human attacks here. Computer moves go
    /// through [`Game::computer_turn`] or [`crate::session::run_computer_turn`]
    /// so the strategy picks the target; `Side::Computer` is accepted
    /// directly only to replay a scripted game.
    pub fn attack(&mut self, attacker: Side, index: usize) -> Result<TurnReport, GameError> {
        match (self.state, attacker) {
            (TurnState::GameOver { .. }, _) => return Err(GameError::ActionAfterGameOver),
            (TurnState::AwaitingHumanInput, Side::Player)
            | (TurnState::ComputerThinking, Side::Computer) => {}
            _ => return Err(GameError::NotYourTurn),
        }

        let (att, def) = self.pair_mut(attacker);
        let result = combat::resolve_attack(&mut att.hits, &mut def.board, index)?;
        if !result.is_resolved() {
            debug!("{} repeated attack on {}", attacker, index);
            return Ok(TurnReport {
                attacker,
                index,
                result,
                sunk: Vec::new(),
                winner: None,
            });
        }
        let sunk = match result {
            AttackResult::Hit(_) => combat::check_score(&att.hits, &mut def.sunk),
            _ => Vec::new(),
        };
        let fleet_lost = def.sunk.is_complete();

        let defender = attacker.opponent();
        info!("{} attacks {}: {:?}", attacker, index, result);
        for ship in &sunk {
            info!("{}'s {} sunk", defender, ship);
        }

        let winner = fleet_lost.then_some(attacker);
        self.state = match (winner, attacker) {
            (Some(winner), _) => {
                info!("game over, {} wins", winner);
                TurnState::GameOver { winner }
            }
            (None, Side::Player) => TurnState::ComputerThinking,
            (None, Side::Computer) => TurnState::AwaitingHumanInput,
        };

        if let Some(observer) = self.observer.as_mut() {
            observer.on_attack(attacker, index, result);
            for &ship in &sunk {
                observer.on_sunk(defender, ship);
            }
            if let Some(winner) = winner {
                observer.on_game_over(winner);
            }
        }

        Ok(TurnReport {
            attacker,
            index,
            result,
            sunk,
            winner,
        })
    }

    /// Let the computer strategy pick an unattacked cell on the human board
    /// and attack it. A repeat pick is redrawn.
    pub fn computer_turn(&mut self) -> Result<TurnReport, GameError> {
        match self.state {
            TurnState::GameOver { .. } => return Err(GameError::ActionAfterGameOver),
            TurnState::ComputerThinking => {}
            _ => return Err(GameError::NotYourTurn),
        }
        for _ in 0..MAX_ATTEMPTS {
            let index = self.ai.select_target(&mut self.rng, &self.player.board)?;
            let report = self.attack(Side::Computer, index)?;
            if report.result.is_resolved() {
                self.ai.handle_attack_result(index, report.result);
                return Ok(report);
            }
        }
        Err(GameError::NoValidTargetFound)
    }
}
