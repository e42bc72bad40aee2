use std::io::{self, Write};

use broadside::{
    coord_to_string, init_logging, parse_coord, print_board, run_computer_turn, ConsoleObserver, Game, GameError,
    Orientation, Pacing, RandomAi, ShipId, Side, TurnState,
};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 3000, help = "Pause before and after the computer's move")]
        pace_ms: u64,
        #[arg(long, help = "Place your fleet randomly instead of one ship at a time")]
        auto_place: bool,
    },
}

fn prompt(text: &str) -> anyhow::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Interactive placement: one ship per accepted command.
fn place_fleet(game: &mut Game) -> anyhow::Result<bool> {
    let mut orientation = Orientation::Horizontal;
    loop {
        let next = game.board(Side::Player).unplaced().next();
        let Some(ship) = next else {
            break;
        };
        print_board(game.board(Side::Player), true);
        let text = format!(
            "Place your {} (length {}, {:?}). Enter a cell, 'r' to rotate, '? <cell>' to preview, 'auto' to finish randomly: ",
            ship,
            ship.length(),
            orientation
        );
        let Some(line) = prompt(&text)? else {
            return Ok(false);
        };
        match line.as_str() {
            "r" | "R" => orientation = orientation.flipped(),
            "auto" => game.auto_place_player_fleet()?,
            cmd if cmd.starts_with('?') => match parse_coord(&cmd[1..]) {
                Ok(start) => {
                    let v = game.preview_placement(Side::Player, orientation, start, ship);
                    let cells: Vec<String> = v.cells.iter().map(|&i| coord_to_string(i)).collect();
                    println!(
                        "{} would cover {} ({})",
                        ship,
                        cells.join(" "),
                        if v.is_valid() { "ok" } else { "not allowed" }
                    );
                }
                Err(e) => println!("{}", e),
            },
            cmd => match parse_coord(cmd) {
                Ok(start) => match game.place_player_ship(ship, orientation, Some(start)) {
                    Ok(_) => {}
                    Err(e) => println!("Cannot place {} there: {}", ship, e),
                },
                Err(e) => println!("{}", e),
            },
        }
    }
    Ok(true)
}

async fn play(seed: Option<u64>, pacing: Pacing, auto_place: bool) -> anyhow::Result<()> {
    let rng = match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    let mut game = Game::new(Box::new(RandomAi::new()), rng);
    game.set_observer(Box::new(ConsoleObserver));

    game.place_computer_fleet()?;
    if auto_place {
        game.auto_place_player_fleet()?;
    } else if !place_fleet(&mut game)? {
        return Ok(());
    }
    game.start()?;

    while !game.is_over() {
        println!("\nComputer's waters:");
        print_board(game.board(Side::Computer), false);
        println!("Your fleet:");
        print_board(game.board(Side::Player), true);

        let Some(line) = prompt("Your go. Target (e.g. B7): ")? else {
            return Ok(());
        };
        let index = match parse_coord(&line) {
            Ok(index) => index,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        match game.attack(Side::Player, index) {
            Ok(report) if !report.result.is_resolved() => {
                println!("You already fired at that cell.");
                continue;
            }
            Ok(_) => {}
            Err(GameError::ActionAfterGameOver) => break,
            Err(e) => return Err(e.into()),
        }
        if game.state() == TurnState::ComputerThinking {
            println!("The computer is thinking...");
            run_computer_turn(&mut game, &pacing).await?;
        }
    }

    println!("\nComputer's fleet:");
    print_board(game.board(Side::Computer), true);
    println!("Your fleet:");
    print_board(game.board(Side::Player), true);
    for side in [Side::Player, Side::Computer] {
        let sunk: Vec<&str> = game.sunk(side).iter().map(ShipId::name).collect();
        println!("{} ships sunk: {}", side, sunk.join(", "));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            pace_ms,
            auto_place,
        } => play(seed, Pacing::uniform_millis(pace_ms), auto_place).await,
    }
}
