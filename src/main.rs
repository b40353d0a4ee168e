//! Skyburst main entry point.
//!
//! An animated greeting written in Rust using:
//! - **bevy_ecs** for the entity-component-system animation engine
//! - a software canvas for drawing, **image** for PNG snapshots
//! - **raylib** for the optional window (feature `window`)
//!
//! # Main Loop
//!
//! 1. Load `skyburst.ini` (missing file: defaults) and apply CLI overrides
//! 2. Build the [`Engine`] and the greeting [`Card`]
//! 3. Either step a fixed number of frames headless, or open a window and
//!    run until it is closed
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --headless --frames 240 --snapshot sky.png
//! cargo run --release --features window
//! ```

// Do not create console on Windows
#![cfg_attr(
    all(target_os = "windows", feature = "window"),
    windows_subsystem = "windows"
)]

use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use skyburst::engine::{Engine, EngineOptions};
use skyburst::greeting::Card;
use skyburst::headless::{self, HeadlessOptions};
use skyburst::resources::canvas::Color;
use skyburst::resources::engineconfig::{DEFAULT_CONFIG_PATH, EngineConfig};

/// Skyburst animated greeting
#[derive(Parser)]
#[command(
    version,
    about = "Fireworks, petals, butterflies, birds, fireflies and twinkling stars around a birthday card."
)]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Display name on the card.
    #[arg(long)]
    name: Option<String>,

    /// Greeting message typed on the card.
    #[arg(long)]
    message: Option<String>,

    /// Accent colors, comma separated (e.g. "#FF7AB6,#FFD36E").
    #[arg(long, value_delimiter = ',')]
    accent: Vec<String>,

    /// Surface width in logical pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Surface height in logical pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Device pixel ratio.
    #[arg(long)]
    dpr: Option<f32>,

    /// Random seed for a reproducible sky.
    #[arg(long)]
    seed: Option<u64>,

    /// Run without a window.
    #[arg(long)]
    headless: bool,

    /// Frames to run in headless mode.
    #[arg(long, default_value_t = 300)]
    frames: u32,

    /// Trigger a big burst on this frame (headless).
    #[arg(long, value_name = "FRAME")]
    burst_at: Option<u32>,

    /// Write the final frame as PNG (headless).
    #[arg(long, value_name = "PATH")]
    snapshot: Option<PathBuf>,

    /// Print JSON statistics every N frames (headless).
    #[arg(long, value_name = "N")]
    stats_every: Option<u32>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    save_config: bool,
}

fn load_config(cli: &Cli) -> EngineConfig {
    let mut config = EngineConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
        config = EngineConfig::with_path(&cli.config);
    }

    if let Some(name) = &cli.name {
        config.name = name.clone();
    }
    if let Some(message) = &cli.message {
        config.message = message.clone();
    }
    if !cli.accent.is_empty() {
        let parsed: Option<Vec<Color>> = cli.accent.iter().map(|s| Color::from_hex(s)).collect();
        match parsed {
            Some(accent) if !accent.is_empty() => config.accent = accent,
            _ => warn!("Ignoring invalid --accent {:?}", cli.accent),
        }
    }
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(dpr) = cli.dpr {
        config.dpr = dpr;
    }
    config
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(&cli);

    if cli.save_config {
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    info!(
        "Skyburst for {:?}: {}x{} @{}x",
        config.name, config.width, config.height, config.dpr
    );

    let mut card = Card::new(config.greeting());
    let mut options = EngineOptions::new(config.clone());
    if let Some(seed) = cli.seed {
        options = options.with_seed(seed);
    }
    let mut engine = Engine::new(options);

    let headless = cli.headless || !cfg!(feature = "window");
    if !cli.headless && headless {
        warn!("Built without the `window` feature; running headless");
    }

    if headless {
        let options = HeadlessOptions {
            frames: cli.frames,
            fps: config.target_fps,
            burst_at: cli.burst_at,
            snapshot: cli.snapshot.clone(),
            stats_every: cli.stats_every,
        };
        match headless::run(&mut engine, &mut card, &options) {
            Ok(stats) => {
                for sample in &stats {
                    match serde_json::to_string(sample) {
                        Ok(line) => println!("{}", line),
                        Err(e) => warn!("Failed to serialize stats: {}", e),
                    }
                }
            }
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    #[cfg(feature = "window")]
    skyburst::window::run(&mut engine, &mut card, &config);
}
