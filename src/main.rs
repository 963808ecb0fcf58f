use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use battleships::console::ConsoleIo;
use battleships::factory::create_game;
use battleships::{init_logging, GameConfig, RandomShipPlacement, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
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
    /// Play the console game: hunt the computer's fleet, or whatever the config file sets up.
    Play {
        #[arg(long, help = "JSON game configuration; defaults to human vs computer fleet")]
        config: Option<PathBuf>,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Play against the computer with a fleet of your own to defend.
    Versus {
        #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
        width: u32,
        #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
        height: u32,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (config, seed, show_own_board) = match cli.command {
        Commands::Play { config, seed } => {
            let config = match config {
                Some(path) => GameConfig::load(path)?,
                None => GameConfig::default(),
            };
            (config, seed, false)
        }
        Commands::Versus {
            width,
            height,
            seed,
        } => (GameConfig::versus_computer(width, height), seed, true),
    };

    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    let mut placement = RandomShipPlacement::new(SmallRng::from_rng(&mut rng));

    let mut game = create_game(&config, &mut placement, &mut rng)?;
    let console = Rc::new(RefCell::new(
        ConsoleIo::stdio().show_own_board(show_own_board),
    ));
    game.set_turn_handler(Rc::clone(&console));
    game.add_observer(console);

    game.start()?;
    Ok(())
}
