//! Platform abstraction layer
//!
//! The state machine never schedules frames itself. It tells a `TickSource`
//! when to start and stop, and whoever owns the source calls
//! `GameStateMachine::frame` once per delivered tick:
//! - web: `requestAnimationFrame` / `cancelAnimationFrame` (see `main.rs`)
//! - native and tests: `ManualTicker`, driven synchronously

/// Something that delivers one tick per rendered frame while running
pub trait TickSource {
    /// Begin delivering ticks. Must not start a second loop if already running.
    fn start(&mut self);
    /// Stop delivering ticks; a pending tick must not fire afterwards.
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}

/// Tick source for tests and headless runs
///
/// Ticks are delivered by calling `frame()` in a loop while `is_running()`.
#[derive(Debug, Clone, Default)]
pub struct ManualTicker {
    running: bool,
    /// How many times a loop was actually started
    pub loops_started: u32,
    /// How many times a running loop was stopped
    pub loops_stopped: u32,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TickSource for ManualTicker {
    fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.loops_started += 1;
        }
    }

    fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.loops_stopped += 1;
        }
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
