use std::time::Duration;

use macroquad::color::Color;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, trace, warn};

use super::{RunState, StatusLine, StatusSink};
use crate::config::Config;
use crate::domain::{AreaPercent, Cell, Grid, Shape};
use crate::error::LifeError;
use crate::rendering::{self, ColorSource, RenderOptions, Surface};

/// Owns the board and every setting the user can change, and reports each
/// command to its status sink.
pub struct Engine<S: StatusSink = StatusLine> {
    grid: Grid,
    cell_size: u32,
    tick_interval: Duration,
    random_area: AreaPercent,
    show_grid_lines: bool,
    grid_line_color: Color,
    run_state: RunState,
    generation: u64,
    rng: StdRng,
    status: S,
}

impl<S: StatusSink> Engine<S> {
    pub fn new(config: &Config, status: S) -> Result<Self, LifeError> {
        config.validate()?;

        let surface = &config.surface;
        let grid = Grid::for_surface(surface.width, surface.height, surface.cell_size);
        let rng = match config.simulation.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            cell_size = surface.cell_size,
            "Created engine"
        );

        Ok(Self {
            grid,
            cell_size: surface.cell_size,
            tick_interval: config.tick_interval(),
            random_area: AreaPercent::new(config.simulation.random_area_size)?,
            show_grid_lines: config.display.show_grid_lines,
            grid_line_color: config.grid_line_color()?,
            run_state: RunState::Stopped,
            generation: 0,
            rng,
            status,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Generations computed since creation or the last clear
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.run_state.is_running()
    }

    pub fn show_grid_lines(&self) -> bool {
        self.show_grid_lines
    }

    pub fn random_area_size(&self) -> AreaPercent {
        self.random_area
    }

    pub fn status(&self) -> &S {
        &self.status
    }

    /// Begin ticking. No-op if already running.
    pub fn start(&mut self) {
        if self.run_state.start(self.tick_interval) {
            debug!(interval = ?self.tick_interval, "Simulation started");
            self.status.report("Started simulating");
        }
    }

    /// Stop ticking; no further step runs until the next start. No-op if stopped.
    pub fn stop(&mut self) {
        if self.run_state.stop() {
            debug!(generation = self.generation, "Simulation stopped");
            self.status.report("Stopped simulating");
        }
    }

    /// Compute the next generation
    pub fn step(&mut self) {
        self.grid.step();
        self.generation += 1;
        trace!(generation = self.generation, population = self.grid.population(), "Stepped");
    }

    /// Feed elapsed frame time to the run loop. Returns true if a generation was computed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.run_state.advance(dt) {
            return false;
        }

        self.step();
        true
    }

    /// Reset every cell to dead
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        debug!("Cleared grid");
        self.status.report("Cleared the grid");
    }

    /// Re-roll the centered region sized by the current random area size
    pub fn randomize(&mut self) {
        self.grid.randomize_region(self.random_area, &mut self.rng);
        debug!(area = %self.random_area, population = self.grid.population(), "Randomized grid");
        self.status
            .report(&format!("Randomized {}% of the grid", self.random_area.get()));
    }

    pub fn toggle_grid_lines(&mut self) {
        self.show_grid_lines = !self.show_grid_lines;
        debug!(show = self.show_grid_lines, "Toggled grid lines");
        self.status.report(if self.show_grid_lines {
            "Showed grid/cellboxes"
        } else {
            "Hid grid/cellboxes"
        });
    }

    /// Set the random area size in percent. Values outside `1..=100` are
    /// rejected and the previous size is kept.
    pub fn set_random_area_size(&mut self, percent: u32) -> Result<(), LifeError> {
        let area = AreaPercent::new(percent).inspect_err(|err| {
            warn!(%err, "Rejected random area size");
        })?;

        self.random_area = area;
        self.status
            .report(&format!("Set random area size to {}%", area.get()));
        Ok(())
    }

    /// Flip one cell. Out-of-range positions are rejected without touching the grid.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<Cell, LifeError> {
        let cell = self.grid.toggle(row, col).inspect_err(|err| {
            warn!(%err, "Rejected cell toggle");
        })?;

        debug!(row, col, alive = cell.is_alive(), "Toggled cell");
        self.status
            .report(&format!("Toggled cell at row {row}, column {col}"));
        Ok(cell)
    }

    /// Stamp `shape` onto the center of the grid
    pub fn stamp_shape(&mut self, shape: Shape) {
        shape.stamp(&mut self.grid);
        debug!(%shape, "Stamped shape");
        self.status.report(&format!("Drew shape: {shape}"));
    }

    /// Stamp a shape given by name. Unknown names are rejected.
    pub fn stamp_named(&mut self, name: &str) -> Result<(), LifeError> {
        let shape = name.parse::<Shape>().inspect_err(|err| {
            warn!(%err, "Rejected shape");
        })?;

        self.stamp_shape(shape);
        Ok(())
    }

    pub fn render_options(&self, fill_color: Color) -> RenderOptions {
        RenderOptions {
            cell_size: self.cell_size as f32,
            show_grid_lines: self.show_grid_lines,
            grid_line_color: self.grid_line_color,
            fill_color,
        }
    }

    /// Redraw the surface from the current grid
    pub fn draw<D, C>(&self, surface: &mut D, colors: &C)
    where
        D: Surface + ?Sized,
        C: ColorSource + ?Sized,
    {
        rendering::draw_grid(&self.grid, &self.render_options(colors.fill_color()), surface);
    }
}

#[cfg(test)]
mod tests {
    use macroquad::color::RED;

    use super::*;
    use crate::rendering::RecordingSurface;

    fn engine() -> Engine<Vec<String>> {
        let mut config = Config::default();
        config.surface.width = 100;
        config.surface.height = 100;
        config.simulation.seed = Some(1);

        Engine::new(&config, Vec::new()).unwrap()
    }

    #[test]
    fn test_grid_sized_from_surface() {
        let engine = engine();
        assert_eq!(engine.grid().dimensions(), (10, 10));
        assert!(!engine.is_running());
        assert!(engine.show_grid_lines());
        assert_eq!(engine.random_area_size(), AreaPercent::FULL);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = Config::default();
        config.surface.cell_size = 0;

        assert!(Engine::new(&config, Vec::new()).is_err());
    }

    #[test]
    fn test_start_stop_report_once() {
        let mut engine = engine();

        engine.start();
        engine.start();
        engine.stop();
        engine.stop();

        assert_eq!(engine.status(), &["Started simulating", "Stopped simulating"]);
    }

    #[test]
    fn test_advance_only_steps_while_running() {
        let mut engine = engine();
        let tick = engine.tick_interval();

        assert!(!engine.advance(tick));
        assert_eq!(engine.generation(), 0);

        engine.start();
        assert!(engine.advance(tick));
        assert!(!engine.advance(tick / 2));
        assert!(engine.advance(tick / 2));
        assert_eq!(engine.generation(), 2);

        engine.stop();
        assert!(!engine.advance(tick * 10));
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn test_toggle_cell() {
        let mut engine = engine();

        assert_eq!(engine.toggle_cell(3, 7).unwrap(), Cell::Alive);
        assert!(engine.grid().is_alive(3, 7));
        assert_eq!(engine.status().last().unwrap(), "Toggled cell at row 3, column 7");
    }

    #[test]
    fn test_toggle_out_of_range_reports_nothing() {
        let mut engine = engine();

        assert!(matches!(
            engine.toggle_cell(10, 0),
            Err(LifeError::OutOfBounds { .. })
        ));
        assert!(engine.status().is_empty());
        assert_eq!(engine.grid().population(), 0);
    }

    #[test]
    fn test_random_area_size() {
        let mut engine = engine();

        engine.set_random_area_size(45).unwrap();
        assert_eq!(engine.random_area_size().get(), 45);
        assert_eq!(engine.status().last().unwrap(), "Set random area size to 45%");

        assert!(matches!(
            engine.set_random_area_size(0),
            Err(LifeError::InvalidAreaSize(0))
        ));
        assert!(engine.set_random_area_size(101).is_err());
        assert_eq!(engine.random_area_size().get(), 45);
        assert_eq!(engine.status().len(), 1);
    }

    #[test]
    fn test_randomize_reports_area() {
        let mut engine = engine();
        engine.set_random_area_size(45).unwrap();

        engine.randomize();

        assert_eq!(engine.status().last().unwrap(), "Randomized 45% of the grid");
        // 45% of 10 is 4 cells, starting at row/col 2
        for (row, col) in engine.grid().live_cells() {
            assert!((2..6).contains(&row) && (2..6).contains(&col));
        }
    }

    #[test]
    fn test_seeded_randomize_is_reproducible() {
        let mut a = engine();
        let mut b = engine();

        a.randomize();
        b.randomize();

        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_clear_resets_generation() {
        let mut engine = engine();
        engine.randomize();
        engine.step();

        engine.clear();

        assert_eq!(engine.grid().population(), 0);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.status().last().unwrap(), "Cleared the grid");
    }

    #[test]
    fn test_toggle_grid_lines_messages() {
        let mut engine = engine();

        engine.toggle_grid_lines();
        assert!(!engine.show_grid_lines());
        engine.toggle_grid_lines();
        assert!(engine.show_grid_lines());

        assert_eq!(engine.status(), &["Hid grid/cellboxes", "Showed grid/cellboxes"]);
    }

    #[test]
    fn test_stamp() {
        let mut engine = engine();

        engine.stamp_shape(Shape::H);
        assert_eq!(engine.status().last().unwrap(), "Drew shape: H");

        assert!(matches!(engine.stamp_named("Z"), Err(LifeError::UnknownShape(_))));
        assert_eq!(engine.status().len(), 1);

        engine.stamp_named("i").unwrap();
        assert_eq!(engine.status().last().unwrap(), "Drew shape: I");
    }

    #[test]
    fn test_draw_uses_color_source() {
        let mut engine = engine();
        engine.toggle_cell(2, 4).unwrap();
        let mut surface = RecordingSurface::new(100.0, 100.0);

        engine.draw(&mut surface, &RED);

        assert_eq!(surface.filled_cells(10.0), vec![(2, 4)]);
        assert_eq!(surface.lines().count(), 22);
    }
}
