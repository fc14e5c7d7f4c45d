use std::time::Duration;

use tracing::debug;

use crate::core::animation::{AnimationDriver, AnimationSettings, RunState, TickOutcome};
use crate::core::ballistics::{
    DerivedConstants, Position, SimulationInputs, derive_constants, position_at_time,
};
use crate::core::readout::Readouts;
use crate::core::trajectory::{TrajectorySample, sample_trajectory};
use crate::core::window::{DisplayProjection, ScreenPoint};

/// Everything a host needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<'a> {
    pub time_s: f64,
    pub run_state: RunState,
    pub position: Position,
    pub projectile: ScreenPoint,
    pub velocity_tip: ScreenPoint,
    pub trajectory: &'a TrajectorySample,
    pub readouts: Readouts,
    pub control_label: &'static str,
}

/// Inputs, cached derived values and the animation driver for one widget.
#[derive(Debug)]
pub struct Simulation {
    inputs: SimulationInputs,
    derived: DerivedConstants,
    trajectory: TrajectorySample,
    driver: AnimationDriver,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationInputs::default(), AnimationSettings::default())
    }
}

impl Simulation {
    pub fn new(inputs: SimulationInputs, settings: AnimationSettings) -> Self {
        let derived = derive_constants(inputs);
        Self {
            inputs,
            derived,
            trajectory: sample_trajectory(&derived),
            driver: AnimationDriver::new(settings),
        }
    }

    pub fn inputs(&self) -> SimulationInputs {
        self.inputs
    }

    pub fn derived(&self) -> &DerivedConstants {
        &self.derived
    }

    pub fn trajectory(&self) -> &TrajectorySample {
        &self.trajectory
    }

    pub fn settings(&self) -> AnimationSettings {
        self.driver.settings()
    }

    pub fn run_state(&self) -> RunState {
        self.driver.state()
    }

    pub fn time_s(&self) -> f64 {
        self.driver.time_s()
    }

    pub fn timer_armed(&self) -> bool {
        self.driver.timer_armed()
    }

    pub fn set_inputs(&mut self, inputs: SimulationInputs) {
        if inputs == self.inputs {
            return;
        }

        let previous_flight_s = self.derived.flight_time_s;
        self.inputs = inputs;
        self.derived = derive_constants(inputs);
        self.trajectory = sample_trajectory(&self.derived);
        debug!(
            speed_mps = inputs.speed_mps(),
            angle_deg = inputs.angle_deg(),
            flight_time_s = self.derived.flight_time_s,
            "inputs changed"
        );

        if self.derived.flight_time_s != previous_flight_s {
            self.driver.rearm();
            self.driver.clamp_to_flight(self.derived.flight_time_s);
        }
    }

    pub fn set_speed(&mut self, speed_mps: f64) {
        self.set_inputs(SimulationInputs::clamped(speed_mps, self.inputs.angle_deg()));
    }

    pub fn set_angle(&mut self, angle_deg: f64) {
        self.set_inputs(SimulationInputs::clamped(self.inputs.speed_mps(), angle_deg));
    }

    pub fn toggle(&mut self) -> RunState {
        self.driver.toggle()
    }

    pub fn start(&mut self) {
        self.driver.start();
    }

    pub fn stop(&mut self) {
        self.driver.stop();
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.driver.tick(self.derived.flight_time_s)
    }

    pub fn advance(&mut self, elapsed: Duration) -> usize {
        self.driver.advance(elapsed, self.derived.flight_time_s)
    }

    pub fn frame(&self) -> Frame<'_> {
        let time_s = self.driver.time_s();
        let projection = DisplayProjection::for_flight(&self.derived);
        let position = position_at_time(&self.derived, time_s);
        let projectile = projection.project(position);
        let run_state = self.driver.state();

        Frame {
            time_s,
            run_state,
            position,
            projectile,
            velocity_tip: projection.velocity_indicator(projectile, &self.derived, time_s),
            trajectory: &self.trajectory,
            readouts: Readouts::from_derived(&self.derived),
            control_label: run_state.control_label(),
        }
    }
}
