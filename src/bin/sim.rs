use broadside::{
    init_logging_with, run_computer_turn, Game, Pacing, Player, RandomAi, ShipId, ShuffledAi, Side,
};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play a whole game headless, with a scripted stand-in for the human, and
/// print the outcome as JSON.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed for the computer's RNG.
    seed: u64,
    /// Seed for the scripted human; defaults to `seed + 1`.
    player_seed: Option<u64>,
    /// Use shuffle-and-pop strategies instead of random redraws.
    #[arg(long)]
    shuffled: bool,
}

fn strategy(shuffled: bool) -> Box<dyn Player> {
    if shuffled {
        Box::new(ShuffledAi::new())
    } else {
        Box::new(RandomAi::new())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging_with(log::LevelFilter::Warn);
    let args = Args::parse();
    let player_seed = args.player_seed.unwrap_or(args.seed.wrapping_add(1));

    let mut game = Game::new(strategy(args.shuffled), SmallRng::seed_from_u64(args.seed));
    let mut stand_in = strategy(args.shuffled);
    let mut stand_in_rng = SmallRng::seed_from_u64(player_seed);

    game.place_computer_fleet()?;
    game.auto_place_player_fleet()?;
    game.start()?;

    let pacing = Pacing::instant();
    let mut turns = 0usize;
    while !game.is_over() {
        turns += 1;
        let index = stand_in.select_target(&mut stand_in_rng, game.board(Side::Computer))?;
        let report = game.attack(Side::Player, index)?;
        stand_in.handle_attack_result(index, report.result);
        if game.is_over() {
            break;
        }
        run_computer_turn(&mut game, &pacing).await?;
    }

    let sunk = |side: Side| -> Vec<&'static str> { game.sunk(side).iter().map(ShipId::name).collect() };
    let result = json!({
        "winner": game.winner(),
        "turns": turns,
        "player": {
            "shots": game.board(Side::Computer).attacked_count(),
            "hits": game.hit_log(Side::Player).len(),
            "ships_lost": sunk(Side::Player),
        },
        "computer": {
            "shots": game.board(Side::Player).attacked_count(),
            "hits": game.hit_log(Side::Computer).len(),
            "ships_lost": sunk(Side::Computer),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
