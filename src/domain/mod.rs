mod area;
mod cell;
mod grid;
mod shapes;

pub use area::AreaPercent;
pub use cell::Cell;
pub use grid::{ALIVE_PROBABILITY, Grid};
pub use shapes::Shape;
