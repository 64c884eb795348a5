// Domain layer - cells, generations, rules, patterns
pub mod domain;

// Application layer - engine, clock and camera
pub mod application;

// Worker layer - simulation thread and message protocol
pub mod worker;

// Infrastructure layer - rendering, input
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use application::{Camera, ControlError, SimulationController, SimulationEngine};
pub use domain::{Cell, Generation, Rule, presets};
pub use worker::{Event, Request, WorkerHandle};
