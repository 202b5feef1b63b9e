//! Aurora Engine main entry point.
//!
//! A 2D game engine written in Rust using:
//! - **raylib** for windowing and graphics
//! - a fixed-timestep clock with render interpolation
//! - a trait-based game-object model with an explicit service registry
//!
//! This executable runs a small demo scene: a WASD-pannable camera over a
//! field of sprites, a blinking animated beacon, and a trigger volume.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults apply when absent)
//! 2. Open the window backend (raylib, or the recording backend with
//!    `--headless`)
//! 3. Register services and build the demo scene
//! 4. Run: poll events, tick the clock, drain fixed updates, draw the
//!    interpolated frame
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;

use auroraengine::config::EngineConfig;
use auroraengine::demo;
use auroraengine::engine::Engine;
use auroraengine::services::audio::AudioService;
use auroraengine::services::storage::StorageService;
use auroraengine::window::Window;
use auroraengine::window::headless::HeadlessWindow;
#[cfg(any(target_os = "linux", target_os = "windows"))]
use auroraengine::window::raylib::RaylibWindow;

/// Aurora Engine 2D demo.
#[derive(Parser)]
#[command(version, about = "Aurora Engine 2D")]
struct Cli {
    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run without a window for the given number of frames, then exit.
    #[arg(long, value_name = "FRAMES")]
    headless: Option<u64>,

    /// Force busy-spin frame pacing regardless of the config file.
    #[arg(long)]
    stable: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => EngineConfig::with_path(path),
        None => EngineConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults
    if cli.stable {
        config.stable_framerate = true;
    }
    if config.background.is_none() {
        config.background = Some("night".to_string());
    }

    let dim = Vec2::new(config.window_width as f32, config.window_height as f32);
    let window: Box<dyn Window> = match cli.headless {
        Some(_) => Box::new(HeadlessWindow::new(dim)),
        None => {
            #[cfg(any(target_os = "linux", target_os = "windows"))]
            {
                Box::new(RaylibWindow::new(dim, &config.title))
            }
            #[cfg(not(any(target_os = "linux", target_os = "windows")))]
            {
                log::warn!("No windowed backend on this platform; running headless.");
                Box::new(HeadlessWindow::new(dim))
            }
        }
    };

    let mut engine = Engine::new(&config, window);
    engine.services_mut().register(AudioService::new());
    engine.services_mut().register(StorageService::new("./save.json"));

    if let Err(e) = demo::setup(&mut engine) {
        log::error!("Demo setup failed: {}", e);
        std::process::exit(1);
    }

    match cli.headless {
        Some(frames) => engine.run_frames(frames),
        None => engine.run(),
    }

    // Audio thread joins on drop; nothing else to tear down.
    engine.services_mut().clear();
}
