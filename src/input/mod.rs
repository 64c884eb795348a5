use std::time::Duration;

use macroquad::prelude::*;

use crate::application::Camera;
use crate::domain::Cell;
use crate::rendering::CELL_SIZE;
use crate::worker::WorkerHandle;

const MIN_INTERVAL_MS: u64 = 50;
const MAX_INTERVAL_MS: u64 = 2000;
const INTERVAL_STEP_MS: u64 = 50;

/// Region covered by the 'R' random reseed, in cells around the origin
const RANDOM_WIDTH: i64 = 100;
const RANDOM_HEIGHT: i64 = 70;

/// Cross-frame pointer state: pan anchor and the cell under the last press
#[derive(Default)]
pub struct InputState {
    pan_anchor: Option<(f32, f32)>,
    pressed_cell: Option<Cell>,
}

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(1.1);
    } else if wheel < 0.0 {
        camera.zoom_out(1.1);
    }
}

/// Handle pan with middle mouse button drag
pub fn handle_pan(camera: &mut Camera, input: &mut InputState, mouse_pos: (f32, f32)) {
    if is_mouse_button_down(MouseButton::Middle) {
        if let Some((last_x, last_y)) = input.pan_anchor {
            camera.pan(mouse_pos.0 - last_x, mouse_pos.1 - last_y);
        }
        input.pan_anchor = Some(mouse_pos);
    } else {
        input.pan_anchor = None;
    }
}

/// Request a toggle on release over the same cell the press started on, so
/// a drag does not flip cells along the way.
pub fn handle_toggle(
    handle: &WorkerHandle,
    camera: &Camera,
    input: &mut InputState,
    mouse_pos: (f32, f32),
) {
    let (grid_x, grid_y) = camera.screen_to_grid(mouse_pos.0, mouse_pos.1, CELL_SIZE);
    let cell = Cell::new(grid_x, grid_y);

    if is_mouse_button_pressed(MouseButton::Left) {
        input.pressed_cell = Some(cell);
    }
    if is_mouse_button_released(MouseButton::Left) && input.pressed_cell.take() == Some(cell) {
        handle.toggle(cell);
    }
}

/// Keyboard: clock control, reseeds and camera home
pub fn handle_keyboard(
    handle: &WorkerHandle,
    camera: &mut Camera,
    running: &mut bool,
    interval_ms: &mut u64,
) {
    if is_key_pressed(KeyCode::Space) {
        if *running {
            handle.stop();
        } else {
            handle.start();
        }
        *running = !*running;
    }
    if is_key_pressed(KeyCode::Up) {
        *interval_ms = interval_ms.saturating_sub(INTERVAL_STEP_MS).max(MIN_INTERVAL_MS);
        handle.set_interval(Duration::from_millis(*interval_ms));
    }
    if is_key_pressed(KeyCode::Down) {
        *interval_ms = (*interval_ms + INTERVAL_STEP_MS).min(MAX_INTERVAL_MS);
        handle.set_interval(Duration::from_millis(*interval_ms));
    }
    if is_key_pressed(KeyCode::C) {
        handle.clear();
    }
    if is_key_pressed(KeyCode::R) {
        handle.randomize(RANDOM_WIDTH, RANDOM_HEIGHT);
    }
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }
}
