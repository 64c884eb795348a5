mod camera;
mod controller;
mod engine;

pub use camera::Camera;
pub use controller::{ControlError, DEFAULT_INTERVAL, SimulationController};
pub use engine::SimulationEngine;
