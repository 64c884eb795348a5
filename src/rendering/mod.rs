use macroquad::prelude::*;

use crate::application::Camera;
use crate::domain::Generation;

/// Base size of one grid cell in pixels at zoom 1.0
pub const CELL_SIZE: f32 = 12.0;

/// Draw every live cell visible through the camera
pub fn draw_cells(generation: &Generation, camera: &Camera) {
    let cell_size = CELL_SIZE * camera.zoom;
    let alive_color = Color::from_rgba(0, 255, 150, 255); // Bright green

    for cell in generation.iter() {
        let (screen_x, screen_y) = camera.grid_to_screen(cell.x, cell.y, CELL_SIZE);

        // Skip if outside viewport
        if screen_x + cell_size < 0.0
            || screen_x > screen_width()
            || screen_y + cell_size < 0.0
            || screen_y > screen_height()
        {
            continue;
        }

        draw_rectangle(screen_x, screen_y, cell_size, cell_size, alive_color);
    }
}

/// Draw faint grid lines when zoomed in enough for them to be legible
pub fn draw_grid_lines(camera: &Camera) {
    let cell_size = CELL_SIZE * camera.zoom;
    if cell_size < 4.0 {
        return;
    }
    let line_color = Color::from_rgba(40, 40, 40, 255); // Dark gray

    // Lines are phase-locked to the camera offset so they track panning.
    let mut x = camera.offset_x.rem_euclid(cell_size);
    while x < screen_width() {
        draw_line(x, 0.0, x, screen_height(), 1.0, line_color);
        x += cell_size;
    }
    let mut y = camera.offset_y.rem_euclid(cell_size);
    while y < screen_height() {
        draw_line(0.0, y, screen_width(), y, 1.0, line_color);
        y += cell_size;
    }
}

/// Status line: clock state, cadence and live population
pub fn draw_status(running: bool, interval_ms: u64, population: usize) {
    let state = if running { "running" } else { "stopped" };
    let status = format!("{state} | {interval_ms} ms/gen | {population} cells");
    draw_text(&status, 10.0, 24.0, 24.0, WHITE);
    draw_text(
        "space: run/stop   click: toggle   up/down: speed   c: clear   r: random   h: home",
        10.0,
        46.0,
        17.0,
        GRAY,
    );
}
