// Domain layer - grid, automaton rule, shapes
pub mod domain;

// Application layer - engine commands, run loop, status reporting
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

pub mod config;
pub mod error;

// Re-exports for convenience
pub use domain::{AreaPercent, Cell, Grid, Shape};
pub use application::{Engine, RunState, StatusLine, StatusSink};
pub use config::Config;
pub use error::LifeError;
