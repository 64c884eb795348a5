use macroquad::prelude::*;
use sparse_life::{
    Camera, Generation, WorkerHandle,
    application::DEFAULT_INTERVAL,
    domain::presets,
    input::{self, InputState},
    rendering,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Sparse Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // The simulation runs on its own thread at its own cadence; this loop
    // only renders the latest published generation and forwards input.
    let seed = presets::default_seed().as_generation();
    let worker = WorkerHandle::spawn(seed, DEFAULT_INTERVAL);

    let mut cells = Generation::new();
    let mut camera = Camera::new();
    camera.pan(screen_width() / 2.0, screen_height() / 2.0);
    let mut input_state = InputState::default();
    let mut running = false;
    let mut interval_ms = DEFAULT_INTERVAL.as_millis() as u64;

    loop {
        let mouse_pos = mouse_position();

        // Every published generation is a full replacement; stale frames
        // are dropped by draining down to the most recent.
        if let Some(latest) = worker.latest_generation() {
            cells = latest;
        }

        input::handle_zoom(&mut camera);
        input::handle_pan(&mut camera, &mut input_state, mouse_pos);
        input::handle_toggle(&worker, &camera, &mut input_state, mouse_pos);
        input::handle_keyboard(&worker, &mut camera, &mut running, &mut interval_ms);

        clear_background(BLACK);
        rendering::draw_grid_lines(&camera);
        rendering::draw_cells(&cells, &camera);
        rendering::draw_status(running, interval_ms, cells.len());

        next_frame().await;
    }
}
