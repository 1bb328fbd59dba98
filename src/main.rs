//! Skyjump main entry point.
//!
//! An endless vertical platformer built with:
//! - **bevy_ecs** for the entity-component-system simulation
//! - **crossterm** for the terminal front end
//! - **configparser** for `config.ini`
//!
//! # Main Loop
//!
//! 1. Parse the command line and load `config.ini` (defaults on failure)
//! 2. Build the ECS world, hooks and tick schedule, start the audio thread
//! 3. Enter `Playing`, which spawns the first level
//! 4. Tick at the configured rate until the player quits (terminal) or the
//!    tick budget runs out (headless)
//! 5. Shut down the audio thread
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! cargo run --release -- --headless --ticks 6000 --seed 7
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use skyjump::headless;
use skyjump::resources::gameconfig::GameConfig;
use skyjump::terminal;

/// Skyjump: jump up forever, dodge enemies, grab coins.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Configuration file to read (and write with --write-config).
    #[arg(long, value_name = "PATH", default_value = "config.ini")]
    config: PathBuf,

    /// Seed for level generation. Overrides the config file.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Run without a terminal UI, driven by the autopilot.
    #[arg(long)]
    headless: bool,

    /// Number of ticks to simulate in headless mode.
    #[arg(long, value_name = "N", default_value_t = 3600)]
    ticks: u64,

    /// In headless mode, print every frame snapshot as a JSON line.
    #[arg(long)]
    dump_frames: bool,

    /// Write the default configuration to --config and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    // the terminal UI owns the screen, keep log lines out of it
    let default_filter = if cli.headless { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut config = GameConfig::with_path(cli.config.clone());

    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Default config written to {}", cli.config.display());
        return Ok(());
    }

    if let Err(e) = config.load_from_file() {
        warn!("{e}; using defaults");
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    info!(
        "Screen {}x{} at {} fps, high score file {:?}",
        config.screen_width, config.screen_height, config.target_fps, config.highscore_path
    );

    if cli.headless {
        headless::run(&config, cli.ticks, cli.dump_frames)?;
        Ok(())
    } else {
        terminal::run(&config)
    }
}
