#![cfg(feature = "std")]

//! Terminal presentation: coordinates, board rendering and status text.

use std::fmt::Write as _;

use crate::{
    board::Board,
    common::{AttackResult, Side},
    config::WIDTH,
    game::GameObserver,
    ship::ShipId,
};

/// Render a cell index as `A1`..`J10` (column letter, 1-based row).
pub fn coord_to_string(index: usize) -> String {
    let col = (b'A' + (index % WIDTH) as u8) as char;
    format!("{}{}", col, index / WIDTH + 1)
}

/// Parse `A1`..`J10` (case-insensitive) into a cell index.
pub fn parse_coord(input: &str) -> Result<usize, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= WIDTH {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 {
        return Err("Row cannot be 0 - must be 1-10".to_string());
    }
    if row > WIDTH {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok((row - 1) * WIDTH + col)
}

/// Draw `board`. With `reveal` unset, unattacked ships are shown as water.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("    ");
    for c in 0..WIDTH {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for (r, row) in board.cells().chunks(WIDTH).enumerate() {
        let _ = write!(out, " {:2} ", r + 1);
        for cell in row {
            let ch = if cell.is_hit() {
                'X'
            } else if cell.is_miss() {
                'o'
            } else if reveal && cell.occupant().is_some() {
                'S'
            } else {
                '.'
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    if reveal {
        out.push_str("    Legend: S=Ship  X=Hit  o=Miss  .=Water\n");
    } else {
        out.push_str("    Legend: X=Hit  o=Miss  .=Unknown\n");
    }
    out
}

pub fn print_board(board: &Board, reveal: bool) {
    print!("{}", render_board(board, reveal));
}

/// Status line for a resolved attack.
pub fn attack_message(attacker: Side, result: AttackResult) -> &'static str {
    match (attacker, result) {
        (Side::Player, AttackResult::Hit(_)) => "You hit the computer's ship!",
        (Side::Computer, AttackResult::Hit(_)) => "The computer hit your ship.",
        (_, AttackResult::Miss) => "Nothing hit this time.",
        (_, AttackResult::AlreadyAttacked) => "That cell has already been attacked.",
    }
}

/// Status line for a sunk ship, from the human's point of view.
pub fn sunk_message(owner: Side, ship: ShipId) -> String {
    match owner {
        Side::Computer => format!("You sunk the computer's {}", ship),
        Side::Player => format!("The computer sunk your {}", ship),
    }
}

pub fn game_over_message(winner: Side) -> &'static str {
    match winner {
        Side::Player => "You have sunk all enemy ships! You win.",
        Side::Computer => "All your ships have been destroyed. The computer wins.",
    }
}

/// Prints status text as the game reports events.
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl GameObserver for ConsoleObserver {
    fn on_attack(&mut self, attacker: Side, index: usize, result: AttackResult) {
        println!("{} {}: {}", attacker, coord_to_string(index), attack_message(attacker, result));
    }

    fn on_sunk(&mut self, owner: Side, ship: ShipId) {
        println!("{}", sunk_message(owner, ship));
    }

    fn on_game_over(&mut self, winner: Side) {
        println!("{}", game_over_message(winner));
    }
}
