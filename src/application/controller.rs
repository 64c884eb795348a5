use std::time::Duration;

use crate::domain::{Cell, Generation};

use super::engine::SimulationEngine;

/// Clock interval the engine boots with
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// Rejected clock requests. Rejection leaves the clock and the live set
/// exactly as they were.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ControlError {
    /// The inter-generation interval must be strictly positive.
    #[error("clock interval must be positive, got {requested:?}")]
    NonPositiveInterval { requested: Duration },
}

/// SimulationController owns the periodic clock driving the engine and the
/// bridge between interactive edits and the live set.
///
/// The controller is deliberately passive: `tick` is fed elapsed wall time
/// by whoever owns the schedule (the worker loop, or a test), which keeps
/// the clock logic deterministic and independent of any render cadence.
pub struct SimulationController {
    engine: SimulationEngine,
    interval: Duration,
    elapsed: Duration,
    running: bool,
}

impl SimulationController {
    pub fn new(engine: SimulationEngine, interval: Duration) -> Self {
        Self {
            engine,
            interval,
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    /// Arm the clock. No-op when already running.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.elapsed = Duration::ZERO;
        }
    }

    /// Disarm the clock. No further step fires until `start`; no-op when
    /// already stopped.
    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed = Duration::ZERO;
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the clock cadence, effective on the next scheduled tick.
    /// While running the accumulator is re-armed, so the next step fires one
    /// full new interval from the change (cancel-then-reschedule: no double
    /// tick, no torn interval).
    pub fn set_interval(&mut self, interval: Duration) -> Result<(), ControlError> {
        if interval.is_zero() {
            return Err(ControlError::NonPositiveInterval {
                requested: interval,
            });
        }
        self.interval = interval;
        if self.running {
            self.elapsed = Duration::ZERO;
        }
        Ok(())
    }

    /// Advance the clock by the time elapsed since the previous call and
    /// fire at most one step once a full interval has accumulated.
    ///
    /// The remainder past the interval is dropped: a tick that would land
    /// while the previous step is still being processed is skipped, and the
    /// clock re-fires a full interval later.
    pub fn tick(&mut self, delta: Duration) -> Option<&Generation> {
        if !self.running {
            return None;
        }

        self.elapsed += delta;
        if self.elapsed >= self.interval {
            self.elapsed = Duration::ZERO;
            Some(self.engine.step())
        } else {
            None
        }
    }

    /// Interactive edits bypass the clock entirely
    pub fn request_toggle(&mut self, cell: Cell) -> &Generation {
        self.engine.toggle(cell)
    }

    /// Wholesale reseed (clear, randomize), also not gated by the clock
    pub fn request_reseed(&mut self, seed: Generation) -> &Generation {
        self.engine.reseed(seed)
    }

    pub fn snapshot(&self) -> Generation {
        self.engine.snapshot()
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }
}
