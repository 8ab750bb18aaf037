#![cfg(feature = "std")]

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::common::AttackResult;
use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::game::{Game, Side};
use crate::grid::Grid;
use crate::player::Player;

const WAVE: &str = "\u{1F30A}";
const SHIP: &str = "\u{1F6A2}";
const EXPLOSION: &str = "\u{1F4A5}";
const MISS: &str = "\u{1F6AB}";

const RULES: &str = "Welcome to Battleship!\n\n\
Instructions:\n\
- Gameplay:\n\
  - Players take turns calling out coordinates to target enemy ships.\n\
  - Pick a tile with a letter (A-J) and a number (1-10), like B7.\n\
  - If your shot lands on an enemy ship, it's a hit; otherwise, it's a miss.\n\
  - Sunk ships are announced by their type.\n\n\
- Winning:\n\
  - Sink all of your opponent's ships to win the game.\n\n\
- Strategy Tips:\n\
  - Deduce the locations of enemy ships based on hits and misses.\n\
  - Spread out shots to cover the entire grid efficiently.\n\n\
Have fun playing Battleship!\n";

/// Print a grid. The reveal view shows where ships sit and nothing else;
/// the normal view shows strikes and misses but hides unhit ships.
pub fn print_grid(grid: &Grid, reveal: bool) {
    print!("  ");
    for c in 0..BOARD_SIZE {
        print!("   {} ", (b'A' + c as u8) as char);
    }
    println!();
    for row in 0..BOARD_SIZE {
        print!("{:<2}", row + 1);
        for col in 0..BOARD_SIZE {
            let cell = match grid.cell(col, row) {
                Ok(cell) => cell,
                Err(_) => continue,
            };
            let emoji = if reveal {
                if cell.occupant().is_some() {
                    SHIP
                } else {
                    WAVE
                }
            } else if cell.is_hit() && cell.occupant().is_some() {
                EXPLOSION
            } else if cell.is_hit() {
                MISS
            } else {
                WAVE
            };
            print!("  {} ", emoji);
        }
        println!();
    }
}

/// Announce the outcome of one attack, in the attacker's voice.
pub fn report_attack(attacker: Side, target: Coord, result: AttackResult) {
    match (attacker, result) {
        (Side::Player, AttackResult::AlreadyHit) => {
            println!("Tile has already been hit, turn skipped")
        }
        (Side::Player, AttackResult::Miss) => println!("Missed!"),
        (Side::Player, AttackResult::Hit(_)) => println!("Enemy ship at {} was hit", target),
        (Side::Player, AttackResult::Sunk(name)) => {
            println!("Enemy ship at {} was hit", target);
            println!("Enemy {} was destroyed", name);
        }
        (Side::Enemy, AttackResult::AlreadyHit) => {
            println!("Enemy targeted tile that was already hit, turn skipped")
        }
        (Side::Enemy, AttackResult::Miss) => println!("Enemy missed at {}", target),
        (Side::Enemy, AttackResult::Hit(_)) => println!("Your ship at {} was hit", target),
        (Side::Enemy, AttackResult::Sunk(name)) => {
            println!("Your ship at {} was hit", target);
            println!("Your {} was destroyed", name);
        }
    }
}

/// Console-driven player. Each turn accepts a coordinate to attack, `1`
/// to display its own grid, or `2` to print the rules.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self) -> String {
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return String::new();
        }
        line.trim().to_string()
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for CliPlayer {
    fn select_target(&mut self, _rng: &mut SmallRng, game: &Game) -> Coord {
        println!("Please type a tile (format A3) to attack or select 1 to see your grid or 2 for the rules");
        loop {
            print!("> ");
            let _ = io::stdout().flush();
            let line = self.read_line();
            match line.as_str() {
                "1" => {
                    print_grid(game.grid(Side::Player), true);
                    println!("Please select a coordinate or an option");
                }
                "2" => {
                    println!("{}", RULES);
                    println!("Press Enter to continue");
                    let _ = self.read_line();
                    println!("Please select a coordinate or an option");
                }
                _ => match Coord::parse(&line) {
                    Ok(coord) => return coord,
                    Err(_) => {
                        println!("Incorrect selection, please select a coordinate or an option")
                    }
                },
            }
        }
    }
}
