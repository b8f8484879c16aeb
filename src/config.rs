use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use macroquad::color::Color;
use serde::Deserialize;
use tracing::info;

use crate::domain::AreaPercent;
use crate::error::LifeError;
use crate::rendering::parse_hex_color;

/// Default config file, looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "life.toml";

/// Environment variable overriding [`DEFAULT_CONFIG_PATH`]
pub const CONFIG_PATH_ENV: &str = "LIFE_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub surface: SurfaceConfig,
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Drawing surface width in pixels
    pub width: u32,
    /// Drawing surface height in pixels
    pub height: u32,
    /// Side of one square cell in pixels
    pub cell_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub tick_interval_ms: u64,
    /// Initial random area size, in percent
    pub random_area_size: u32,
    /// Seed for randomize. Entropy from the OS when unset.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_grid_lines: bool,
    pub fill_color: String,
    pub grid_line_color: String,
    pub background_color: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            cell_size: 10,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            random_area_size: 100,
            seed: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_grid_lines: true,
            fill_color: "#000000".to_string(),
            grid_line_color: "#cccccc".to_string(),
            background_color: "#ffffff".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or use defaults if the file doesn't exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LifeError> {
        let path = path.as_ref();

        let config = match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(?path, "No config file found, using defaults");
                Self::default()
            }
            Err(source) => {
                return Err(LifeError::ReadConfig {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load from `$LIFE_CONFIG`, falling back to `life.toml`
    pub fn load_default() -> Result<Self, LifeError> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(path)
    }

    pub fn from_toml(contents: &str) -> Result<Self, LifeError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<(), LifeError> {
        let SurfaceConfig {
            width,
            height,
            cell_size,
        } = self.surface;

        if cell_size == 0 {
            return Err(LifeError::InvalidConfig("cell_size must be at least 1".into()));
        }
        if width < cell_size || height < cell_size {
            return Err(LifeError::InvalidConfig(format!(
                "surface {width}x{height} cannot fit a single {cell_size}px cell"
            )));
        }
        if self.simulation.tick_interval_ms == 0 {
            return Err(LifeError::InvalidConfig("tick_interval_ms must be at least 1".into()));
        }

        AreaPercent::new(self.simulation.random_area_size)?;
        self.fill_color()?;
        self.grid_line_color()?;
        self.background_color()?;

        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.simulation.tick_interval_ms)
    }

    pub fn fill_color(&self) -> Result<Color, LifeError> {
        parse_hex_color(&self.display.fill_color)
    }

    pub fn grid_line_color(&self) -> Result<Color, LifeError> {
        parse_hex_color(&self.display.grid_line_color)
    }

    pub fn background_color(&self) -> Result<Color, LifeError> {
        parse_hex_color(&self.display.background_color)
    }
}
