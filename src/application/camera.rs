/// Camera manages viewport and zoom for navigating the unbounded grid
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32, // 1.0 = normal, 2.0 = 2x zoomed in
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
        }
    }

    /// Zoom in by factor
    pub fn zoom_in(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(0.1, 10.0);
    }

    /// Zoom out by factor
    pub fn zoom_out(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).clamp(0.1, 10.0);
    }

    /// Pan camera
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Convert screen coordinates to signed grid coordinates.
    /// Floor keeps cells left/above the origin mapping to the right cell.
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32, cell_size: f32) -> (i64, i64) {
        let grid_x = ((screen_x - self.offset_x) / (cell_size * self.zoom)).floor() as i64;
        let grid_y = ((screen_y - self.offset_y) / (cell_size * self.zoom)).floor() as i64;
        (grid_x, grid_y)
    }

    /// Convert grid coordinates to screen coordinates
    pub fn grid_to_screen(&self, grid_x: i64, grid_y: i64, cell_size: f32) -> (f32, f32) {
        let screen_x = grid_x as f32 * cell_size * self.zoom + self.offset_x;
        let screen_y = grid_y as f32 * cell_size * self.zoom + self.offset_y;
        (screen_x, screen_y)
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.zoom = 1.0;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_grid_floors_negative_coordinates() {
        let camera = Camera::new();
        // Just left of the origin is cell -1, not cell 0.
        assert_eq!(camera.screen_to_grid(-0.5, -0.5, 10.0), (-1, -1));
        assert_eq!(camera.screen_to_grid(0.5, 0.5, 10.0), (0, 0));
    }

    #[test]
    fn test_round_trip_through_pan_and_zoom() {
        let mut camera = Camera::new();
        camera.pan(123.0, -40.0);
        camera.zoom_in(2.0);

        let (sx, sy) = camera.grid_to_screen(-17, 32, 10.0);
        assert_eq!(camera.screen_to_grid(sx, sy, 10.0), (-17, 32));
    }
}
