mod engine;
mod run_state;
mod status;

pub use engine::Engine;
pub use run_state::{RunState, Ticker};
pub use status::{StatusLine, StatusSink};
