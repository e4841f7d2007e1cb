//! Demo configuration loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable config files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::rasterizer::{Color, HEIGHT, WIDTH};

/// Default location of the demo config
pub const CONFIG_PATH: &str = "assets/demo.ron";

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

/// Everything the demo needs at startup. Fields left out of the RON
/// file fall back to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Canvas dimensions in pixels
    pub width: usize,
    pub height: usize,
    /// Simulation ticks per second
    pub fps: u32,
    /// Shape counts
    pub boxes: usize,
    pub triangles: usize,
    pub lines: usize,
    /// Speed damping applied on every bounce, in (0, 1]; 1.0 disables it
    pub friction: f32,
    /// RNG seed; 0 seeds from the clock
    pub seed: u64,
    pub background: Color,
    pub palette: Vec<Color>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            fps: 30,
            boxes: 3,
            triangles: 2,
            lines: 2,
            friction: 1.0,
            seed: 0,
            background: Color::BLUE,
            palette: vec![Color::RED, Color::GREEN, Color::BLUE, Color::WHITE],
        }
    }
}

/// Load a config from a RON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DemoConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: DemoConfig = ron::from_str(&contents)?;
    Ok(config)
}

/// Save a config to a RON file
pub fn save_config<P: AsRef<Path>>(config: &DemoConfig, path: P) -> Result<(), ConfigError> {
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(3)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(config, pretty)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Load a config from a RON string (for embedded defaults or testing)
pub fn load_config_from_str(s: &str) -> Result<DemoConfig, ConfigError> {
    let config: DemoConfig = ron::from_str(s)?;
    Ok(config)
}
