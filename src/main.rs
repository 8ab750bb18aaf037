#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, print_grid, report_attack, AiPlayer, CliPlayer, Game, GameStatus, Player, Side,
    DEFAULT_SHIPS_TO_LOSE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Console battleship against a random-firing opponent.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_SHIPS_TO_LOSE)]
    ships_to_lose: usize,
    #[arg(long, help = "Reveal enemy ships in the target display")]
    admin: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        log::info!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut game = Game::new(&mut rng, cli.ships_to_lose)?;
    log::debug!("Fleets placed, ships-to-lose threshold {}", cli.ships_to_lose);

    let mut human = CliPlayer::new();
    let mut enemy = AiPlayer::new();

    println!("Welcome to BattleShips! As this is an early version the ships for both sides have been placed randomly");
    println!("When you attack, please type A3 or B4 to select a tile");
    println!("Or type in 1 to see your grid, or 2 to see the rules");
    println!("Press Enter to continue");
    let mut pause = String::new();
    std::io::stdin().read_line(&mut pause)?;

    loop {
        print_grid(game.grid(Side::Enemy), cli.admin);

        let target = human.select_target(&mut rng, &game);
        let result = game.attack_from(Side::Player, target);
        log::debug!("Player fired at {}: {:?}", target, result);
        report_attack(Side::Player, target, result);
        if game.status() != GameStatus::InProgress {
            break;
        }

        let target = enemy.select_target(&mut rng, &game);
        let result = game.attack_from(Side::Enemy, target);
        log::debug!("Enemy fired at {}: {:?}", target, result);
        report_attack(Side::Enemy, target, result);
        if game.status() != GameStatus::InProgress {
            break;
        }
    }

    match game.status() {
        GameStatus::Won => println!("Congratulations you won!"),
        GameStatus::Lost => println!("Defeated"),
        GameStatus::InProgress => {}
    }
    Ok(())
}
