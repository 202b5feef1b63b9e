//! Engine configuration.
//!
//! Settings loaded from an INI file with safe defaults, so the engine
//! starts even when no `config.ini` exists.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! title = Aurora Engine
//! target_fps = 120
//! stable_framerate = false
//!
//! [simulation]
//! update_interval_ms = 20
//! max_catchup_steps = 5
//!
//! [render]
//! background = night
//! ```

use std::path::PathBuf;

use configparser::ini::Ini;
use log::info;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TITLE: &str = "Aurora Engine";
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_UPDATE_INTERVAL_MS: f64 = 20.0;
const DEFAULT_MAX_CATCHUP_STEPS: u32 = 5;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Engine configuration.
///
/// `target_fps = 0` disables frame pacing entirely. `stable_framerate`
/// selects the busy-spin clock pacing instead of sleeping.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Window title.
    pub title: String,
    /// Target frames per second (0 = uncapped).
    pub target_fps: u32,
    /// Busy-spin frame pacing for precise timing at higher CPU cost.
    pub stable_framerate: bool,
    /// Fixed simulation step in milliseconds.
    pub update_interval_ms: f64,
    /// Maximum fixed updates consumed per rendered frame.
    pub max_catchup_steps: u32,
    /// Background colour name resolved through the colour service.
    pub background: Option<String>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    /// Create a configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            stable_framerate: false,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            max_catchup_steps: DEFAULT_MAX_CATCHUP_STEPS,
            background: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a configuration reading from a custom file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Returns an
    /// error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(stable) = config.getbool("window", "stable_framerate").ok().flatten() {
            self.stable_framerate = stable;
        }

        // [simulation] section
        if let Some(interval) = config.getfloat("simulation", "update_interval_ms").ok().flatten() {
            if interval > 0.0 {
                self.update_interval_ms = interval;
            }
        }
        if let Some(steps) = config.getuint("simulation", "max_catchup_steps").ok().flatten() {
            self.max_catchup_steps = (steps as u32).max(1);
        }

        // [render] section
        if let Some(background) = config.get("render", "background") {
            self.background = Some(background);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, stable={}, update interval {} ms, background={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.stable_framerate,
            self.update_interval_ms,
            self.background
        );

        Ok(())
    }

    /// Save configuration to the INI file. Creates the file if it doesn't
    /// exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "title", Some(self.title.clone()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set(
            "window",
            "stable_framerate",
            Some(self.stable_framerate.to_string()),
        );

        config.set(
            "simulation",
            "update_interval_ms",
            Some(self.update_interval_ms.to_string()),
        );
        config.set(
            "simulation",
            "max_catchup_steps",
            Some(self.max_catchup_steps.to_string()),
        );

        if let Some(background) = &self.background {
            config.set("render", "background", Some(background.clone()));
        }

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Window size as a pair.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_safe() {
        let config = EngineConfig::new();
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.target_fps, 120);
        assert_eq!(config.update_interval_ms, 20.0);
        assert!(config.max_catchup_steps >= 1);
    }

    #[test]
    fn missing_file_is_an_error_and_keeps_defaults() {
        let mut config = EngineConfig::with_path("/nonexistent/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_size(), (1280, 720));
    }
}
