#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use bboard::{init_logging, AttackResult, Board, Ship, BOARD_SIZE, STANDARD_FLEET};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};

/// Lay out the standard fleet on a board, optionally fire a few shots, and print it.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for a reproducible layout (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 0, help = "Number of random attacks to fire")]
    shots: usize,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {}", s);
            SmallRng::seed_from_u64(s)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let fleet = STANDARD_FLEET.map(|(name, length)| Ship::new(name, length));
    let mut board = Board::new();
    for ship in &fleet {
        let (r, c, orientation) = board
            .random_placement(&mut rng, ship.length())
            .map_err(|e| anyhow::anyhow!(e))?;
        board
            .place_ship(ship, r, c, orientation)
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    println!("Placed {} ships", board.ships_remaining());

    let size = BOARD_SIZE as usize;
    for _ in 0..cli.shots {
        let r = rng.random_range(0..size);
        let c = rng.random_range(0..size);
        match board.attack(r, c).map_err(|e| anyhow::anyhow!(e))? {
            AttackResult::Miss => println!("({}, {}) miss", r, c),
            AttackResult::Hit => println!("({}, {}) hit", r, c),
            AttackResult::Sunk(name) => println!("({}, {}) sunk {}", r, c, name),
        }
    }

    board.print_board();
    for ship in &fleet {
        println!("{:<10} damage {}/{}", ship.name(), ship.damage(), ship.length());
    }
    println!("Ships remaining: {}", board.ships_remaining());
    Ok(())
}
