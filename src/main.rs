//! # Tombs Main Entry Point
//!
//! Parses the command line, sets up logging, generates the dungeon and runs
//! the macroquad scene loop.

use clap::Parser;
use log::{error, info};
use macroquad::prelude::*;
use std::path::PathBuf;
use tombs::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use tombs::scenes::SceneManager;
use tombs::{GameState, GenerationConfig, InputHandler, TombsResult};

/// Pixel size of one character cell at startup.
const CELL_PIXELS: (i32, i32) = (12, 16);

/// Command line arguments for Tombs.
#[derive(Parser, Debug)]
#[command(name = "tombs")]
#[command(about = "A turn-based dungeon crawl through the Tombs of the Ancient Kings")]
#[command(version)]
struct Args {
    /// Random seed for dungeon generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with generation settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Tombs of the Ancient Kings".to_owned(),
        window_width: SCREEN_WIDTH * CELL_PIXELS.0,
        window_height: SCREEN_HEIGHT * CELL_PIXELS.1,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    info!("Starting Tombs v{}", tombs::VERSION);
    if let Err(e) = run_game(&args).await {
        error!("Game aborted: {}", e);
        std::process::exit(1);
    }
}

/// Initializes env_logger; `RUST_LOG` style filters are accepted.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::new()
        .parse_filters(log_level)
        .format_target(false)
        .init();
}

/// Builds the generation settings from the command line.
fn load_config(args: &Args) -> TombsResult<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading generation settings from {}", path.display());
            GenerationConfig::from_json_file(path)?
        }
        None => GenerationConfig::new(clock_seed()),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}

async fn run_game(args: &Args) -> TombsResult<()> {
    let config = load_config(args)?;
    info!("Generating dungeon with seed {}", config.seed);

    let game_state = GameState::new(&config)?;
    let mut scenes = SceneManager::new(game_state, InputHandler::new());
    scenes.run().await
}
