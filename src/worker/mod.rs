//! Simulation worker thread, decoupled from the render loop.
//!
//! The worker owns the controller and engine outright; the rest of the
//! process talks to it only through typed request/event channels, so the
//! simulation cadence is never blocked or throttled by rendering frame
//! rate. Running every mutation on the one worker thread is also what
//! serializes `step` and `toggle` against the same live set.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::application::{SimulationController, SimulationEngine};
use crate::domain::{Cell, Generation};

/// Poll granularity of the worker loop while the clock is armed
const RUNNING_POLL: Duration = Duration::from_millis(1);
/// Poll granularity while stopped; only edits need to be noticed
const STOPPED_POLL: Duration = Duration::from_millis(15);

/// Requests the presentation layer may send to the worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Start,
    Stop,
    Toggle(Cell),
    SetInterval(Duration),
    Clear,
    Randomize { width: i64, height: i64 },
    Shutdown,
}

/// Events the worker publishes back.
/// Each `Updated` corresponds to exactly one committed mutation (a step or
/// an edit) and carries the full replacement live set, never a diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Emitted once, after the engine has been constructed and seeded
    Ready(Generation),
    Updated(Generation),
}

/// Handle for controlling the simulation worker thread
pub struct WorkerHandle {
    thread: Option<JoinHandle<()>>,
    request_tx: Sender<Request>,
    event_rx: Receiver<Event>,
}

impl WorkerHandle {
    /// Spawn a worker with a seeded engine and the given clock interval.
    /// The clock starts disarmed; send `Request::Start` to arm it.
    pub fn spawn(seed: Generation, interval: Duration) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let thread = thread::spawn(move || {
            let controller = SimulationController::new(SimulationEngine::new(seed), interval);
            run_worker(controller, request_rx, event_tx);
        });
        log::info!("simulation worker spawned, interval {interval:?}");

        Self {
            thread: Some(thread),
            request_tx,
            event_rx,
        }
    }

    /// Send a request; silently dropped if the worker has already exited
    pub fn send(&self, request: Request) {
        let _ = self.request_tx.send(request);
    }

    pub fn start(&self) {
        self.send(Request::Start);
    }

    pub fn stop(&self) {
        self.send(Request::Stop);
    }

    pub fn toggle(&self, cell: Cell) {
        self.send(Request::Toggle(cell));
    }

    pub fn set_interval(&self, interval: Duration) {
        self.send(Request::SetInterval(interval));
    }

    pub fn clear(&self) {
        self.send(Request::Clear);
    }

    pub fn randomize(&self, width: i64, height: i64) {
        self.send(Request::Randomize { width, height });
    }

    /// Next pending event, if any (non-blocking)
    pub fn try_recv(&self) -> Option<Event> {
        self.event_rx.try_recv().ok()
    }

    /// Block up to `timeout` for the next event
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Event> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    /// Drain pending events and return the most recent live set, if any
    /// events arrived since the last call.
    pub fn latest_generation(&self) -> Option<Generation> {
        let mut latest = None;
        while let Some(event) = self.try_recv() {
            latest = Some(match event {
                Event::Ready(generation) | Event::Updated(generation) => generation,
            });
        }
        latest
    }

    /// Stop the loop and join the thread
    pub fn shutdown(&mut self) {
        self.send(Request::Shutdown);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Worker loop: drain requests in arrival order, then let the clock fire at
/// most one step, then publish. This gives the deterministic serial order
/// "pending edits first, then one step" for requests racing a tick.
fn run_worker(
    mut controller: SimulationController,
    request_rx: Receiver<Request>,
    event_tx: Sender<Event>,
) {
    let _ = event_tx.send(Event::Ready(controller.snapshot()));
    let mut last_poll = Instant::now();

    loop {
        loop {
            match request_rx.try_recv() {
                Ok(Request::Start) => controller.start(),
                Ok(Request::Stop) => controller.stop(),
                Ok(Request::Toggle(cell)) => {
                    let updated = controller.request_toggle(cell).clone();
                    let _ = event_tx.send(Event::Updated(updated));
                }
                Ok(Request::SetInterval(interval)) => {
                    if let Err(err) = controller.set_interval(interval) {
                        log::warn!("rejected clock request: {err}");
                    }
                }
                Ok(Request::Clear) => {
                    let updated = controller.request_reseed(Generation::new()).clone();
                    let _ = event_tx.send(Event::Updated(updated));
                }
                Ok(Request::Randomize { width, height }) => {
                    log::debug!("reseeding with random {width}x{height} region");
                    let seed = Generation::randomized(width, height);
                    let updated = controller.request_reseed(seed).clone();
                    let _ = event_tx.send(Event::Updated(updated));
                }
                Ok(Request::Shutdown) => {
                    log::info!("simulation worker shutting down");
                    return;
                }
                Err(TryRecvError::Empty) => break,
                // All handles are gone; nobody is left to observe events.
                Err(TryRecvError::Disconnected) => return,
            }
        }

        let now = Instant::now();
        let delta = now.duration_since(last_poll);
        last_poll = now;
        if let Some(generation) = controller.tick(delta) {
            let _ = event_tx.send(Event::Updated(generation.clone()));
        }

        thread::sleep(if controller.is_running() {
            RUNNING_POLL
        } else {
            STOPPED_POLL
        });
    }
}
