use crate::difficulty::Difficulty;
use crate::error::{MazeError, MazeResult};
use crate::grid::MAX_GRID_SIZE;
use crate::pathfinding::Algorithm;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub visual: VisualConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_size")]
    pub size: i32,
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
}

#[derive(Debug, Default, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub algorithm: Algorithm,
    #[serde(default)]
    pub show_path: bool,
    /// Fixed RNG seed; entropy is used when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
    /// Space below the grid for the HUD and buttons
    #[serde(default = "default_hud_height")]
    pub hud_height: f32,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_enable_action_log")]
    pub enable_action_log: bool,
    #[serde(default = "default_action_log_path")]
    pub action_log_path: String,
    #[serde(default)]
    pub trace_generation: bool,
}

// Default values
fn default_size() -> i32 { 12 }
fn default_tile_size() -> f32 { 40.0 }
fn default_window_title() -> String { "Maze Runner".to_string() }
fn default_bg_r() -> u8 { 255 }
fn default_bg_g() -> u8 { 255 }
fn default_bg_b() -> u8 { 255 }
fn default_hud_height() -> f32 { 150.0 }
fn default_enable_action_log() -> bool { true }
fn default_action_log_path() -> String { "action_log.json".to_string() }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            tile_size: default_tile_size(),
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
            hud_height: default_hud_height(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_action_log: default_enable_action_log(),
            action_log_path: default_action_log_path(),
            trace_generation: false,
        }
    }
}

impl Config {
    /// Load configuration from config.toml, or use defaults if file doesn't exist
    pub fn load() -> Self {
        Self::load_from(CONFIG_FILE)
    }

    /// Load from `path`; a missing, unparsable or invalid file gives the defaults
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    println!("Loaded configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    eprintln!("Warning: Failed to load {}: {}", path.display(), e);
                    eprintln!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => {
                println!("No {} found, using default configuration", path.display());
                Config::default()
            }
        }
    }

    /// Parse and validate TOML text
    pub fn parse(contents: &str) -> MazeResult<Self> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| MazeError::InvalidParameter(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MazeResult<()> {
        if !(2..=MAX_GRID_SIZE).contains(&self.grid.size) {
            return Err(MazeError::InvalidGridSize {
                size: self.grid.size,
                min: 2,
                max: MAX_GRID_SIZE,
            });
        }
        if self.grid.tile_size <= 0.0 {
            return Err(MazeError::InvalidParameter(format!(
                "tile_size must be positive, got {}",
                self.grid.tile_size
            )));
        }
        if self.difficulty.min_steps == 0 {
            return Err(MazeError::InvalidParameter(
                "difficulty.min_steps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
