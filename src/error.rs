use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while configuring or driving the engine.
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("random area size must be between 1 and 100, got {0}")]
    InvalidAreaSize(u32),

    #[error("unknown shape \"{0}\"")]
    UnknownShape(String),

    #[error("invalid color \"{0}\", expected #rrggbb")]
    InvalidColor(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read config file {path:?}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    ParseConfig(#[from] toml::de::Error),
}
