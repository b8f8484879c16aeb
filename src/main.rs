use std::time::Duration;

use macroquad::prelude::*;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use life_canvas::{
    Config, Engine, StatusLine,
    config::LoggingConfig,
    input, rendering,
    rendering::MacroquadSurface,
    ui::{Controls, Layout},
};

fn window_conf() -> Conf {
    // Runs before tracing is installed and cannot fail. An invalid config
    // falls back to the default size here; main then logs the error and exits.
    let layout = Layout::new(&Config::load_default().unwrap_or_default());

    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: layout.window_width() as i32,
        window_height: layout.window_height() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = match Config::load_default() {
        Ok(config) => config,
        Err(err) => {
            init_tracing(&LoggingConfig::default());
            error!(%err, "Invalid configuration");
            return;
        }
    };
    init_tracing(&config.logging);

    let mut engine = match Engine::new(&config, StatusLine::new()) {
        Ok(engine) => engine,
        Err(err) => {
            error!(%err, "Failed to create engine");
            return;
        }
    };

    // Both were checked by Config::validate
    let fill_color = config.fill_color().unwrap_or(BLACK);
    let background = config.background_color().unwrap_or(WHITE);

    let layout = Layout::new(&config);
    let mut controls = Controls::new(&layout, engine.random_area_size(), fill_color);
    let mut surface = MacroquadSurface::new(
        0.0,
        0.0,
        layout.surface_width,
        layout.surface_height,
        background,
    );

    let (rows, cols) = engine.grid().dimensions();
    info!(rows, cols, "Game of Life ready");

    loop {
        for event in input::poll_events(&surface, &mut controls) {
            if let Err(err) = input::apply(&mut engine, event) {
                debug!(%err, ?event, "Ignored input");
            }
        }

        engine.advance(Duration::from_secs_f32(get_frame_time()));

        clear_background(Color::from_rgba(20, 20, 20, 255));
        engine.draw(&mut surface, &controls.palette);
        rendering::draw_controls(&engine, &controls, &layout, mouse_position());

        next_frame().await;
    }
}
