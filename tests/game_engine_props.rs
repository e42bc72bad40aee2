use broadside::{
    AttackResult, Game, Player, ShuffledAi, Side, TurnState, BOARD_SIZE, TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn started_game(seed: u64) -> Game {
    let mut game = Game::with_seed(seed);
    game.place_computer_fleet().unwrap();
    game.auto_place_player_fleet().unwrap();
    game.start().unwrap();
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A second attack on the same cell never changes hit logs or sunk sets.
    #[test]
    fn attack_idempotent(seed in any::<u64>(), index in 0..BOARD_SIZE) {
        let mut game = started_game(seed);
        let first = game.attack(Side::Player, index).unwrap();
        prop_assert!(first.result.is_resolved());
        game.computer_turn().unwrap();

        let hits = game.hit_log(Side::Player).clone();
        let sunk = *game.sunk(Side::Computer);
        let board = game.board(Side::Computer).clone();
        let again = game.attack(Side::Player, index).unwrap();
        prop_assert_eq!(again.result, AttackResult::AlreadyAttacked);
        prop_assert_eq!(game.hit_log(Side::Player), &hits);
        prop_assert_eq!(game.sunk(Side::Computer), &sunk);
        prop_assert_eq!(game.board(Side::Computer), &board);
        prop_assert_eq!(game.state(), TurnState::AwaitingHumanInput);
    }

    /// The game ends on the attack that completes a sunk set, never before.
    #[test]
    fn game_over_exactly_on_full_sink(seed in any::<u64>(), stand_in_seed in any::<u64>()) {
        let mut game = started_game(seed);
        let mut stand_in = ShuffledAi::new();
        let mut rng = SmallRng::seed_from_u64(stand_in_seed);

        let mut shots = 0;
        while !game.is_over() {
            prop_assert!(shots < 2 * BOARD_SIZE);
            shots += 1;
            let report = if game.state() == TurnState::AwaitingHumanInput {
                let index = stand_in.select_target(&mut rng, game.board(Side::Computer)).unwrap();
                game.attack(Side::Player, index).unwrap()
            } else {
                game.computer_turn().unwrap()
            };
            prop_assert!(report.result.is_resolved());
            let defender = report.attacker.opponent();
            prop_assert_eq!(report.winner.is_some(), game.sunk(defender).is_complete());
        }

        let winner = game.winner().unwrap();
        prop_assert_eq!(game.sunk(winner.opponent()).len(), 5);
        prop_assert!(game.sunk(winner).len() < 5);
        prop_assert_eq!(game.hit_log(winner).len(), TOTAL_SHIP_CELLS);
    }
}
