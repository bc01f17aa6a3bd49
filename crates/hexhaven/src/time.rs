//! # Time — Clock Injection and the Fixed-Step Driver
//!
//! The simulation advances at a fixed logical rate (30 ticks per second)
//! no matter how often the host calls back per rendered frame. The
//! [`FixedStep`] driver is a small state machine that decides, per check,
//! whether one tick is due.
//!
//! The driver never reads the wall clock itself — callers pass timestamps
//! from a [`Clock`], so tests drive it with a [`ManualClock`] and assert
//! tick counts for synthetic elapsed-time sequences.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Base interval between ticks at speed 1.0: 1000/30 ms.
pub const TICK_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / 30);

/// Simulated seconds each tick advances the world by.
pub const TICK_SECONDS: f32 = 1.0 / 30.0;

const MIN_SPEED: f32 = 0.1;
const MAX_SPEED: f32 = 10.0;

/// A monotonically increasing time source.
pub trait Clock {
    /// Time elapsed since some fixed origin (e.g. clock creation).
    fn now(&self) -> Duration;
}

/// Wall-clock time since construction.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A hand-advanced clock for tests and headless runs.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Run state of the driver. `Paused` means running-paused: the host
/// callback keeps checking (and the timestamp keeps advancing) so the
/// simulation resumes instantly when unpaused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Stopped,
    Running,
    Paused,
}

/// Fixed-rate tick scheduler.
///
/// Call [`FixedStep::check`] from the host's per-frame callback with the
/// current clock reading; it fires at most one tick per check, once
/// `tick_interval / speed` has elapsed since the last tick boundary.
pub struct FixedStep {
    state: DriverState,
    speed: f32,
    last_tick: Duration,
}

impl FixedStep {
    pub fn new() -> Self {
        Self {
            state: DriverState::Stopped,
            speed: 1.0,
            last_tick: Duration::ZERO,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_paused(&self) -> bool {
        self.state == DriverState::Paused
    }

    pub fn is_running(&self) -> bool {
        self.state != DriverState::Stopped
    }

    /// Stopped → running, recording `now` as the baseline for the first
    /// tick. No effect in any other state.
    pub fn start(&mut self, now: Duration) {
        if self.state == DriverState::Stopped {
            self.state = DriverState::Running;
            self.last_tick = now;
        }
    }

    /// Any state → stopped. Pending re-arm is discarded.
    pub fn stop(&mut self) {
        self.state = DriverState::Stopped;
    }

    /// Simulation speed multiplier, clamped to [0.1, 10].
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    /// Pause or resume. Pausing only suppresses tick firing; checks keep
    /// advancing the timestamp. No effect while stopped.
    pub fn set_paused(&mut self, paused: bool) {
        self.state = match (self.state, paused) {
            (DriverState::Stopped, _) => DriverState::Stopped,
            (_, true) => DriverState::Paused,
            (_, false) => DriverState::Running,
        };
    }

    pub fn toggle_pause(&mut self) {
        self.set_paused(self.state == DriverState::Running);
    }

    /// One scheduling check. Returns `true` when the caller should run
    /// exactly one tick now.
    pub fn check(&mut self, now: Duration) -> bool {
        if self.state == DriverState::Stopped {
            return false;
        }
        let interval = TICK_INTERVAL.div_f32(self.speed);
        if now.saturating_sub(self.last_tick) < interval {
            return false;
        }
        // Re-arm from the check time, whether or not the tick fires.
        self.last_tick = now;
        self.state == DriverState::Running
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new()
    }
}
