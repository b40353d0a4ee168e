//! Engine configuration resource.
//!
//! Manages sky settings loaded from an INI configuration file. Provides
//! defaults matching the stock greeting so a missing file is never fatal.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 960
//! height = 640
//! target_fps = 60
//! dpr = 1.0
//!
//! [greeting]
//! name = Loan
//! message = Chúc mừng sinh nhật!
//! blessing = Chúc Loan ngày mai sinh nhật thật vui vẻ và ngập tràn hạnh phúc nha.
//! accent = #FF7AB6, #FFD36E, #7AE7C7
//!
//! [fireworks]
//! rocket_interval = 0.7
//! rocket_chance = 0.9
//! initial_rockets = 3
//! auto_burst_interval = 1.8
//! big_burst_count = 56
//!
//! [nature]
//! interval = 0.9
//! petal_chance = 0.7
//! butterfly_chance = 0.25
//! bird_chance = 0.18
//! firefly_chance = 0.8
//!
//! [sparkles]
//! interval = 0.25
//! chance = 0.8
//!
//! [stars]
//! area_per_star = 18000
//! min_count = 80
//! ```
//!
//! Inline comments use `;` only, so `#RRGGBB` values survive parsing.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::greeting::{DEFAULT_BLESSING, DEFAULT_MESSAGE, DEFAULT_NAME, Greeting};
use crate::resources::canvas::Color;
use crate::resources::palette::DEFAULT_ACCENT;

/// Default safe values for startup
const DEFAULT_WIDTH: u32 = 960;
const DEFAULT_HEIGHT: u32 = 640;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_DPR: f32 = 1.0;
const DEFAULT_ROCKET_INTERVAL: f32 = 0.7;
const DEFAULT_ROCKET_CHANCE: f32 = 0.9;
const DEFAULT_INITIAL_ROCKETS: u32 = 3;
const DEFAULT_AUTO_BURST_INTERVAL: f32 = 1.8;
const DEFAULT_BIG_BURST_COUNT: u32 = 56;
const DEFAULT_NATURE_INTERVAL: f32 = 0.9;
const DEFAULT_PETAL_CHANCE: f32 = 0.7;
const DEFAULT_BUTTERFLY_CHANCE: f32 = 0.25;
const DEFAULT_BIRD_CHANCE: f32 = 0.18;
const DEFAULT_FIREFLY_CHANCE: f32 = 0.8;
const DEFAULT_SPARKLE_INTERVAL: f32 = 0.25;
const DEFAULT_SPARKLE_CHANCE: f32 = 0.8;
const DEFAULT_AREA_PER_STAR: f32 = 18000.0;
const DEFAULT_MIN_STARS: u32 = 80;
pub const DEFAULT_CONFIG_PATH: &str = "./skyburst.ini";

/// Engine configuration resource.
///
/// Timer intervals are in seconds; chances are probabilities in `0..=1`
/// rolled once per timer tick.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Surface width in logical pixels.
    pub width: u32,
    /// Surface height in logical pixels.
    pub height: u32,
    pub target_fps: u32,
    /// Device pixel ratio used to size the backing buffer.
    pub dpr: f32,

    pub name: String,
    pub message: String,
    pub blessing: String,
    pub accent: Vec<Color>,

    pub rocket_interval: f32,
    pub rocket_chance: f32,
    /// Rockets launched immediately on start.
    pub initial_rockets: u32,
    pub auto_burst_interval: f32,
    /// Fragments in the on-demand big burst.
    pub big_burst_count: u32,

    pub nature_interval: f32,
    pub petal_chance: f32,
    pub butterfly_chance: f32,
    pub bird_chance: f32,
    pub firefly_chance: f32,

    pub sparkle_interval: f32,
    pub sparkle_chance: f32,

    /// Logical px² per background star.
    pub area_per_star: f32,
    pub min_stars: u32,

    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_accent(value: &str) -> Result<Vec<Color>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| Color::from_hex(s).ok_or_else(|| ConfigError::InvalidColor(s.to_string())))
        .collect()
}

fn format_accent(accent: &[Color]) -> String {
    accent
        .iter()
        .map(Color::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl EngineConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            dpr: DEFAULT_DPR,
            name: DEFAULT_NAME.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            blessing: DEFAULT_BLESSING.to_string(),
            accent: DEFAULT_ACCENT.to_vec(),
            rocket_interval: DEFAULT_ROCKET_INTERVAL,
            rocket_chance: DEFAULT_ROCKET_CHANCE,
            initial_rockets: DEFAULT_INITIAL_ROCKETS,
            auto_burst_interval: DEFAULT_AUTO_BURST_INTERVAL,
            big_burst_count: DEFAULT_BIG_BURST_COUNT,
            nature_interval: DEFAULT_NATURE_INTERVAL,
            petal_chance: DEFAULT_PETAL_CHANCE,
            butterfly_chance: DEFAULT_BUTTERFLY_CHANCE,
            bird_chance: DEFAULT_BIRD_CHANCE,
            firefly_chance: DEFAULT_FIREFLY_CHANCE,
            sparkle_interval: DEFAULT_SPARKLE_INTERVAL,
            sparkle_chance: DEFAULT_SPARKLE_CHANCE,
            area_per_star: DEFAULT_AREA_PER_STAR,
            min_stars: DEFAULT_MIN_STARS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    fn ini() -> Ini {
        let mut config = Ini::new();
        config.set_inline_comment_symbols(Some(&[';']));
        config
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut config = Self::ini();
        config.load(&self.config_path).map_err(|reason| ConfigError::Load {
            path: self.config_path.clone(),
            reason,
        })?;
        self.apply(&config)?;

        info!(
            "Loaded config from {:?}: {}x{} @{}x, fps={}, greeting for {:?}",
            self.config_path, self.width, self.height, self.dpr, self.target_fps, self.name
        );
        Ok(())
    }

    /// Load configuration from INI text. Same rules as [`Self::load_from_file`].
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut config = Self::ini();
        config
            .read(text.to_string())
            .map_err(|reason| ConfigError::Load {
                path: self.config_path.clone(),
                reason,
            })?;
        self.apply(&config)
    }

    fn apply(&mut self, config: &Ini) -> Result<(), ConfigError> {
        let uint = |section: &str, key: &str| config.getuint(section, key).ok().flatten();
        let float = |section: &str, key: &str| {
            config
                .getfloat(section, key)
                .ok()
                .flatten()
                .map(|v| v as f32)
        };

        // [window] section
        if let Some(width) = uint("window", "width") {
            self.width = width as u32;
        }
        if let Some(height) = uint("window", "height") {
            self.height = height as u32;
        }
        if let Some(fps) = uint("window", "target_fps") {
            self.target_fps = fps as u32;
        }
        if let Some(dpr) = float("window", "dpr") {
            self.dpr = dpr;
        }

        // [greeting] section
        if let Some(name) = config.get("greeting", "name") {
            self.name = name;
        }
        if let Some(message) = config.get("greeting", "message") {
            self.message = message;
        }
        if let Some(blessing) = config.get("greeting", "blessing") {
            self.blessing = blessing;
        }
        if let Some(accent) = config.get("greeting", "accent") {
            let parsed = parse_accent(&accent)?;
            if parsed.is_empty() {
                warn!("Empty accent list in config, keeping {}", format_accent(&self.accent));
            } else {
                self.accent = parsed;
            }
        }

        // [fireworks] section
        if let Some(v) = float("fireworks", "rocket_interval") {
            self.rocket_interval = v;
        }
        if let Some(v) = float("fireworks", "rocket_chance") {
            self.rocket_chance = v;
        }
        if let Some(v) = uint("fireworks", "initial_rockets") {
            self.initial_rockets = v as u32;
        }
        if let Some(v) = float("fireworks", "auto_burst_interval") {
            self.auto_burst_interval = v;
        }
        if let Some(v) = uint("fireworks", "big_burst_count") {
            self.big_burst_count = v as u32;
        }

        // [nature] section
        if let Some(v) = float("nature", "interval") {
            self.nature_interval = v;
        }
        if let Some(v) = float("nature", "petal_chance") {
            self.petal_chance = v;
        }
        if let Some(v) = float("nature", "butterfly_chance") {
            self.butterfly_chance = v;
        }
        if let Some(v) = float("nature", "bird_chance") {
            self.bird_chance = v;
        }
        if let Some(v) = float("nature", "firefly_chance") {
            self.firefly_chance = v;
        }

        // [sparkles] section
        if let Some(v) = float("sparkles", "interval") {
            self.sparkle_interval = v;
        }
        if let Some(v) = float("sparkles", "chance") {
            self.sparkle_chance = v;
        }

        // [stars] section
        if let Some(v) = float("stars", "area_per_star") {
            self.area_per_star = v;
        }
        if let Some(v) = uint("stars", "min_count") {
            self.min_stars = v as u32;
        }

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut config = Self::ini();

        // [window] section
        config.set("window", "width", Some(self.width.to_string()));
        config.set("window", "height", Some(self.height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "dpr", Some(self.dpr.to_string()));

        // [greeting] section
        config.set("greeting", "name", Some(self.name.clone()));
        config.set("greeting", "message", Some(self.message.clone()));
        config.set("greeting", "blessing", Some(self.blessing.clone()));
        config.set("greeting", "accent", Some(format_accent(&self.accent)));

        // [fireworks] section
        config.set("fireworks", "rocket_interval", Some(self.rocket_interval.to_string()));
        config.set("fireworks", "rocket_chance", Some(self.rocket_chance.to_string()));
        config.set("fireworks", "initial_rockets", Some(self.initial_rockets.to_string()));
        config.set(
            "fireworks",
            "auto_burst_interval",
            Some(self.auto_burst_interval.to_string()),
        );
        config.set("fireworks", "big_burst_count", Some(self.big_burst_count.to_string()));

        // [nature] section
        config.set("nature", "interval", Some(self.nature_interval.to_string()));
        config.set("nature", "petal_chance", Some(self.petal_chance.to_string()));
        config.set("nature", "butterfly_chance", Some(self.butterfly_chance.to_string()));
        config.set("nature", "bird_chance", Some(self.bird_chance.to_string()));
        config.set("nature", "firefly_chance", Some(self.firefly_chance.to_string()));

        // [sparkles] section
        config.set("sparkles", "interval", Some(self.sparkle_interval.to_string()));
        config.set("sparkles", "chance", Some(self.sparkle_chance.to_string()));

        // [stars] section
        config.set("stars", "area_per_star", Some(self.area_per_star.to_string()));
        config.set("stars", "min_count", Some(self.min_stars.to_string()));

        config
            .write(&self.config_path)
            .map_err(|source| ConfigError::Save {
                path: self.config_path.clone(),
                source,
            })?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Greeting card content described by this configuration.
    pub fn greeting(&self) -> Greeting {
        Greeting {
            name: self.name.clone(),
            message: self.message.clone(),
            blessing: self.blessing.clone(),
            accent: self.accent.clone(),
        }
    }

    /// Set surface size.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Target star count for a surface of `width`×`height` logical pixels.
    pub fn star_count(&self, width: f32, height: f32) -> usize {
        let by_area = if self.area_per_star > 0.0 {
            (width * height / self.area_per_star).floor().max(0.0) as usize
        } else {
            0
        };
        by_area.max(self.min_stars as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = EngineConfig::new();
        assert_eq!(c.rocket_interval, 0.7);
        assert_eq!(c.nature_interval, 0.9);
        assert_eq!(c.sparkle_interval, 0.25);
        assert_eq!(c.auto_burst_interval, 1.8);
        assert_eq!(c.big_burst_count, 56);
        assert_eq!(c.accent, DEFAULT_ACCENT.to_vec());
        assert_eq!(c.config_path, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_star_count_floor() {
        let c = EngineConfig::new();
        assert_eq!(c.star_count(800.0, 600.0), 80);
        assert_eq!(c.star_count(2560.0, 1440.0), 204);
    }

    #[test]
    fn test_load_partial_keeps_defaults() {
        let mut c = EngineConfig::new();
        c.load_from_str("[window]\nwidth = 1024\n\n[nature]\nbird_chance = 1.0\n")
            .unwrap();
        assert_eq!(c.width, 1024);
        assert_eq!(c.height, DEFAULT_HEIGHT);
        assert_eq!(c.bird_chance, 1.0);
        assert_eq!(c.petal_chance, DEFAULT_PETAL_CHANCE);
    }

    #[test]
    fn test_hash_colors_are_not_comments() {
        let mut c = EngineConfig::new();
        c.load_from_str("[greeting]\naccent = #112233, #445566 ; two colors\n")
            .unwrap();
        assert_eq!(
            c.accent,
            vec![Color::rgb(0x11, 0x22, 0x33), Color::rgb(0x44, 0x55, 0x66)]
        );
    }

    #[test]
    fn test_invalid_color_is_an_error() {
        let mut c = EngineConfig::new();
        let err = c.load_from_str("[greeting]\naccent = #112233, nope\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor(ref s) if s == "nope"));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let mut c = EngineConfig::with_path("/definitely/not/here/skyburst.ini");
        assert!(matches!(c.load_from_file(), Err(ConfigError::Load { .. })));
        assert_eq!(c.width, DEFAULT_WIDTH);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let path = std::env::temp_dir().join(format!("skyburst-test-{}.ini", std::process::id()));
        let mut saved = EngineConfig::with_path(&path);
        saved.set_size(640, 480);
        saved.name = "Mai".into();
        saved.accent = vec![Color::rgb(1, 2, 3)];
        saved.sparkle_chance = 0.5;
        saved.min_stars = 10;
        saved.save_to_file().unwrap();

        let mut loaded = EngineConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, saved);
    }
}
