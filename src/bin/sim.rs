use battleships::factory::create_game;
use battleships::{init_logging, GameConfig, RandomShipPlacement, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play one computer vs computer game and print the result as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    seed: u64,
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: u32,
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut placement = RandomShipPlacement::new(SmallRng::from_rng(&mut rng));
    let config = GameConfig::computer_vs_computer(args.width, args.height);

    let mut game = create_game(&config, &mut placement, &mut rng)?;
    game.start()?;

    let result = json!({
        "winner": game.winner().map(|p| p.to_string()),
        "turns": game.turns(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
