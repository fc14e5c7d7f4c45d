//! Fixed-step animation driver.
//!
//! Simulated time advances by [`TIME_STEP_S`] on every tick of a periodic
//! timer. The timer exists only while the driver is [`RunState::Running`]:
//! it is armed on start and dropped on every path out of `Running`, including
//! dropping the driver itself, so a stopped driver can never receive a tick.
//!
//! The host owns the wall clock and feeds elapsed time through
//! [`AnimationDriver::advance`].
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use parabolic_rust::core::animation::{AnimationDriver, AnimationSettings, RunState};
//!
//! let mut driver = AnimationDriver::new(AnimationSettings::default());
//! driver.start();
//! driver.advance(Duration::from_millis(120), 7.2);
//! assert_eq!(driver.state(), RunState::Running);
//! assert!((driver.time_s() - 0.10).abs() < 1e-12);
//! ```

use std::time::Duration;

use tracing::{debug, trace};

use crate::core::error::{Result, SimError};

pub const TICK_PERIOD: Duration = Duration::from_millis(50);
pub const TIME_STEP_S: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

impl RunState {
    /// Label for the control that toggles out of this state.
    pub fn control_label(self) -> &'static str {
        match self {
            RunState::Stopped => "Start",
            RunState::Running => "Stop",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSettings {
    pub tick_period: Duration,
    pub time_step_s: f64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            tick_period: TICK_PERIOD,
            time_step_s: TIME_STEP_S,
        }
    }
}

impl AnimationSettings {
    pub fn new(tick_period: Duration, time_step_s: f64) -> Result<Self> {
        if tick_period.is_zero() {
            return Err(SimError::InvalidSetting {
                name: "tick_period",
                reason: "must be greater than zero".to_string(),
            });
        }
        if !time_step_s.is_finite() || time_step_s <= 0.0 {
            return Err(SimError::InvalidSetting {
                name: "time_step_s",
                reason: format!("must be a positive finite number, got {time_step_s}"),
            });
        }
        Ok(Self {
            tick_period,
            time_step_s,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Driver is stopped; nothing happened.
    Idle,
    Advanced,
    /// Flight finished: time reset to zero and the driver stopped.
    Completed,
}

/// Armed tick schedule. Owning one is the only way ticks get delivered.
#[derive(Debug)]
struct TickTimer {
    id: u64,
    period: Duration,
    pending: Duration,
}

impl TickTimer {
    fn arm(id: u64, period: Duration) -> Self {
        trace!(timer = id, ?period, "tick timer armed");
        Self {
            id,
            period,
            pending: Duration::ZERO,
        }
    }

    fn feed(&mut self, elapsed: Duration) {
        self.pending = self.pending.saturating_add(elapsed);
    }

    fn take_due(&mut self) -> bool {
        if self.pending >= self.period {
            self.pending -= self.period;
            true
        } else {
            false
        }
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        trace!(timer = self.id, "tick timer released");
    }
}

#[derive(Debug)]
pub struct AnimationDriver {
    settings: AnimationSettings,
    state: RunState,
    ticks: u64,
    timer: Option<TickTimer>,
    timers_armed: u64,
}

impl AnimationDriver {
    pub fn new(settings: AnimationSettings) -> Self {
        Self {
            settings,
            state: RunState::Stopped,
            ticks: 0,
            timer: None,
            timers_armed: 0,
        }
    }

    pub fn settings(&self) -> AnimationSettings {
        self.settings
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Current simulated time in seconds.
    pub fn time_s(&self) -> f64 {
        self.ticks as f64 * self.settings.time_step_s
    }

    pub fn timer_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Flips the run state. Time always goes back to zero, in both directions.
    pub fn toggle(&mut self) -> RunState {
        match self.state {
            RunState::Stopped => self.start(),
            RunState::Running => self.stop(),
        }
        self.state
    }

    pub fn start(&mut self) {
        self.ticks = 0;
        self.state = RunState::Running;
        self.arm_timer();
        debug!("animation started");
    }

    pub fn stop(&mut self) {
        self.ticks = 0;
        self.enter_stopped();
        debug!("animation stopped");
    }

    /// Restarts the tick schedule without touching simulated time.
    pub fn rearm(&mut self) {
        if self.is_running() {
            self.arm_timer();
        }
    }

    /// Ends the run if `flight_time_s` has already been reached, e.g. after the
    /// inputs changed mid-flight.
    pub fn clamp_to_flight(&mut self, flight_time_s: f64) -> bool {
        if self.is_running() && self.time_s() >= flight_time_s {
            self.complete();
            return true;
        }
        false
    }

    pub fn tick(&mut self, flight_time_s: f64) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }

        let next = (self.ticks + 1) as f64 * self.settings.time_step_s;
        if next >= flight_time_s {
            self.complete();
            return TickOutcome::Completed;
        }

        self.ticks += 1;
        trace!(tick = self.ticks, time_s = next, "animation tick");
        TickOutcome::Advanced
    }

    /// Feeds wall-clock time to the armed timer and fires every due tick.
    /// Returns the number of ticks fired.
    pub fn advance(&mut self, elapsed: Duration, flight_time_s: f64) -> usize {
        match self.timer.as_mut() {
            Some(timer) => timer.feed(elapsed),
            None => return 0,
        }

        let mut fired = 0;
        while self.timer.as_mut().is_some_and(TickTimer::take_due) {
            fired += 1;
            if self.tick(flight_time_s) != TickOutcome::Advanced {
                break;
            }
        }
        fired
    }

    fn complete(&mut self) {
        self.ticks = 0;
        self.enter_stopped();
        debug!("animation completed");
    }

    fn enter_stopped(&mut self) {
        self.state = RunState::Stopped;
        self.timer = None;
    }

    fn arm_timer(&mut self) {
        // Release the previous schedule before arming, never two at once.
        self.timer = None;
        self.timers_armed += 1;
        self.timer = Some(TickTimer::arm(self.timers_armed, self.settings.tick_period));
    }
}
