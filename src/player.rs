use alloc::vec::Vec;

use crate::{
    board::Board,
    common::{AttackResult, GameError},
    placement::Placement,
    ship::ShipId,
};
use rand::rngs::SmallRng;

/// Interface implemented by computer strategies.
///
/// A Player is responsible for:
/// - Placing ships on its own board
/// - Selecting targets on the opponent's board
/// - Handling feedback from its attacks
pub trait Player: Send {
    /// Place one ship somewhere legal on `board`.
    fn place_ship(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        ship: ShipId,
    ) -> Result<Placement, GameError>;

    /// Place every unplaced ship, in fleet order.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), GameError> {
        let pending: Vec<ShipId> = board.unplaced().collect();
        for ship in pending {
            self.place_ship(rng, board, ship)?;
        }
        Ok(())
    }

    /// Choose a cell on the opponent's board that has not been attacked.
    fn select_target(&mut self, rng: &mut SmallRng, target: &Board) -> Result<usize, GameError>;

    /// Inform the player of the result of its last attack.
    fn handle_attack_result(&mut self, _index: usize, _result: AttackResult) {}
}
