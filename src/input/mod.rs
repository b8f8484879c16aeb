use macroquad::prelude::*;
use tracing::debug;

use crate::application::{Engine, StatusSink};
use crate::domain::Shape;
use crate::error::LifeError;
use crate::rendering::MacroquadSurface;
use crate::ui::Controls;

/// Discrete commands issued by the panel buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Clear,
    /// Clear, then randomize the current random area
    Randomize,
    ToggleGridLines,
}

/// Everything the host can feed into the engine
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer click in surface-relative pixels
    Click { x: f32, y: f32 },
    Key(char),
    AreaSize(u32),
    Command(Command),
}

/// Pointer state sampled once per frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: (f32, f32),
    /// Left button went down this frame
    pub pressed: bool,
    /// Left button is held
    pub down: bool,
}

impl PointerState {
    pub fn poll() -> Self {
        Self {
            position: mouse_position(),
            pressed: is_mouse_button_pressed(MouseButton::Left),
            down: is_mouse_button_down(MouseButton::Left),
        }
    }
}

/// Cell under surface-relative `(x, y)`, as `(row, col)`. None for negative coordinates.
pub fn cell_at(x: f32, y: f32, cell_size: u32) -> Option<(usize, usize)> {
    if x < 0.0 || y < 0.0 || cell_size == 0 {
        return None;
    }

    let size = cell_size as f32;
    Some(((y / size).floor() as usize, (x / size).floor() as usize))
}

/// Run a single command against the engine
pub fn apply_command<S: StatusSink>(engine: &mut Engine<S>, command: Command) {
    match command {
        Command::Start => engine.start(),
        Command::Stop => engine.stop(),
        Command::Clear => engine.clear(),
        Command::Randomize => {
            engine.clear();
            engine.randomize();
        }
        Command::ToggleGridLines => engine.toggle_grid_lines(),
    }
}

/// Map one input event onto the engine.
///
/// Clicks outside the grid and keys without a shape are ignored. An out of
/// range area size is returned as an error.
pub fn apply<S: StatusSink>(engine: &mut Engine<S>, event: InputEvent) -> Result<(), LifeError> {
    match event {
        InputEvent::Click { x, y } => match cell_at(x, y, engine.cell_size()) {
            Some((row, col)) if engine.grid().contains(row, col) => {
                engine.toggle_cell(row, col)?;
            }
            _ => debug!(x, y, "Ignored click outside the grid"),
        },
        InputEvent::Key(key) => match Shape::from_key(key) {
            Some(shape) => engine.stamp_shape(shape),
            None => debug!(?key, "Ignored key"),
        },
        InputEvent::AreaSize(percent) => engine.set_random_area_size(percent)?,
        InputEvent::Command(command) => apply_command(engine, command),
    }

    Ok(())
}

/// Turn one frame of raw input into events, updating widget state on the way.
///
/// Palette clicks only change the selected color and produce no event.
pub fn collect_events(
    pointer: &PointerState,
    keys: impl IntoIterator<Item = char>,
    surface: &MacroquadSurface,
    controls: &mut Controls,
) -> Vec<InputEvent> {
    let mut events = Vec::new();
    let pos = pointer.position;

    if pointer.pressed {
        for button in &controls.buttons {
            if button.is_hovered(pos) {
                events.extend(button.commands().iter().copied().map(InputEvent::Command));
            }
        }

        if let Some((x, y)) = surface.to_local(pos.0, pos.1) {
            events.push(InputEvent::Click { x, y });
        }

        controls.palette.click(pos);
    }

    if let Some(value) = controls.slider.update(pos, pointer.pressed, pointer.down) {
        events.push(InputEvent::AreaSize(value));
    }

    events.extend(keys.into_iter().map(InputEvent::Key));
    events
}

/// Sample macroquad's input for this frame
pub fn poll_events(surface: &MacroquadSurface, controls: &mut Controls) -> Vec<InputEvent> {
    let pointer = PointerState::poll();
    let keys = std::iter::from_fn(get_char_pressed);

    collect_events(&pointer, keys, surface, controls)
}

#[cfg(test)]
mod tests {
    use macroquad::color::{BLACK, WHITE};

    use super::*;
    use crate::config::Config;
    use crate::domain::AreaPercent;
    use crate::ui::Layout;

    fn engine() -> Engine<Vec<String>> {
        let mut config = Config::default();
        config.surface.width = 100;
        config.surface.height = 60;
        config.simulation.seed = Some(3);
        Engine::new(&config, Vec::new()).unwrap()
    }

    fn controls() -> (MacroquadSurface, Controls, Layout) {
        let mut config = Config::default();
        config.surface.width = 100;
        config.surface.height = 60;
        let layout = Layout::new(&config);
        let surface = MacroquadSurface::new(0.0, 0.0, 100.0, 60.0, WHITE);
        let controls = Controls::new(&layout, AreaPercent::FULL, BLACK);
        (surface, controls, layout)
    }

    fn click(position: (f32, f32)) -> PointerState {
        PointerState {
            position,
            pressed: true,
            down: true,
        }
    }

    #[test]
    fn test_cell_at_floors() {
        assert_eq!(cell_at(0.0, 0.0, 10), Some((0, 0)));
        assert_eq!(cell_at(39.9, 10.0, 10), Some((1, 3)));
        assert_eq!(cell_at(-0.5, 10.0, 10), None);
        assert_eq!(cell_at(5.0, -1.0, 10), None);
    }

    #[test]
    fn test_click_toggles_cell() {
        let mut engine = engine();

        apply(&mut engine, InputEvent::Click { x: 75.0, y: 32.0 }).unwrap();

        assert!(engine.grid().is_alive(3, 7));
        assert_eq!(engine.status().last().unwrap(), "Toggled cell at row 3, column 7");
    }

    #[test]
    fn test_click_outside_grid_is_ignored() {
        let mut engine = engine();

        apply(&mut engine, InputEvent::Click { x: 150.0, y: 10.0 }).unwrap();
        apply(&mut engine, InputEvent::Click { x: -3.0, y: 10.0 }).unwrap();

        assert_eq!(engine.grid().population(), 0);
        assert!(engine.status().is_empty());
    }

    #[test]
    fn test_keys_stamp_shapes() {
        let mut engine = engine();

        apply(&mut engine, InputEvent::Key('o')).unwrap();
        apply(&mut engine, InputEvent::Key('x')).unwrap();
        apply(&mut engine, InputEvent::Key(' ')).unwrap();

        assert_eq!(engine.status(), &["Drew shape: O"]);
        assert!(engine.grid().is_alive(3, 5));
    }

    #[test]
    fn test_area_size_event() {
        let mut engine = engine();

        apply(&mut engine, InputEvent::AreaSize(30)).unwrap();
        assert_eq!(engine.random_area_size().get(), 30);

        assert!(apply(&mut engine, InputEvent::AreaSize(200)).is_err());
        assert_eq!(engine.random_area_size().get(), 30);
    }

    #[test]
    fn test_randomize_command_clears_first() {
        let mut engine = engine();
        engine.set_random_area_size(10).unwrap();
        engine.toggle_cell(0, 0).unwrap();

        apply(&mut engine, InputEvent::Command(Command::Randomize)).unwrap();

        assert!(!engine.grid().is_alive(0, 0));
        assert_eq!(
            &engine.status()[2..],
            &["Cleared the grid", "Randomized 10% of the grid"]
        );
    }

    #[test]
    fn test_commands_map_to_engine() {
        let mut engine = engine();

        for command in [Command::Start, Command::ToggleGridLines, Command::Stop, Command::Clear] {
            apply(&mut engine, InputEvent::Command(command)).unwrap();
        }

        assert!(!engine.is_running());
        assert!(!engine.show_grid_lines());
        assert_eq!(
            engine.status(),
            &[
                "Started simulating",
                "Hid grid/cellboxes",
                "Stopped simulating",
                "Cleared the grid"
            ]
        );
    }

    #[test]
    fn test_collect_click_on_surface() {
        let (surface, mut controls, _) = controls();

        let events = collect_events(&click((25.0, 15.0)), [], &surface, &mut controls);
        assert_eq!(events, vec![InputEvent::Click { x: 25.0, y: 15.0 }]);
    }

    #[test]
    fn test_collect_button_and_keys() {
        let (surface, mut controls, layout) = controls();
        let clear = controls.buttons.iter().find(|b| b.text() == "Clear").unwrap();
        let on_clear = (layout.panel_x() + 5.0, layout.buttons_y() + 2.0 * 50.0 + 5.0);
        assert!(clear.is_hovered(on_clear));

        let events = collect_events(&click(on_clear), ['h'], &surface, &mut controls);

        assert_eq!(
            events,
            vec![
                InputEvent::Command(Command::Stop),
                InputEvent::Command(Command::Clear),
                InputEvent::Key('h'),
            ]
        );
    }

    #[test]
    fn test_collect_ignores_hover_without_press() {
        let (surface, mut controls, _) = controls();
        let pointer = PointerState {
            position: (25.0, 15.0),
            pressed: false,
            down: false,
        };

        assert!(collect_events(&pointer, [], &surface, &mut controls).is_empty());
    }
}
