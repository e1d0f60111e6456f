mod animator;
mod caster;
mod config;
mod dungeon;
mod game;
mod logging;
mod player;
mod render;
mod types;
mod utils;

use clap::Parser;
use log::{LevelFilter, error, info};
use macroquad::prelude::*;
use std::fs;
use std::process;

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text map file to load ('#' = wall, '.' = floor, one row per line).
    /// Defaults to the built-in 16x16 dungeon.
    #[arg(long)]
    map: Option<String>,

    /// Debug filter to specify log topics (e.g., "caster,motion,rotation,controller")
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Dungeon Walker".to_owned(),
        window_width: config::WINDOW_WIDTH,
        window_height: config::WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    let log_level = match args.log_level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    if let Err(e) = logging::init_logger(log_level, args.debug_filter) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    info!("Initializing Dungeon Walker...");

    let dungeon = match &args.map {
        Some(path) => {
            info!("Loading map from file: {}", path);
            let text = match fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) => {
                    error!("Error reading map file {}: {}", path, e);
                    process::exit(1);
                }
            };
            match dungeon::Dungeon::parse(&text) {
                Ok(dungeon) => dungeon,
                Err(e) => {
                    error!("Error parsing map file {}: {}", path, e);
                    process::exit(1);
                }
            }
        }
        None => dungeon::default_dungeon(),
    };

    let mut game = game::Game::new(dungeon);
    let mut renderer = render::Renderer::new(&game.dungeon);
    info!("Renderer initialized.");

    game.run(&mut renderer).await.expect("Game loop failed");
}
