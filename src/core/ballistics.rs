use tracing::warn;

use crate::core::error::{Result, SimError};

pub const EARTH_GRAVITY_MPS2: f64 = 9.81;

pub const MIN_SPEED_MPS: f64 = 10.0;
pub const MAX_SPEED_MPS: f64 = 100.0;
pub const MIN_ANGLE_DEG: f64 = 0.0;
pub const MAX_ANGLE_DEG: f64 = 90.0;
/// Resolution of both input controls.
pub const INPUT_STEP: f64 = 1.0;

pub const DEFAULT_SPEED_MPS: f64 = 50.0;
pub const DEFAULT_ANGLE_DEG: f64 = 45.0;

/// Launch speed and elevation. Always within the control bounds once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationInputs {
    speed_mps: f64,
    angle_deg: f64,
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self {
            speed_mps: DEFAULT_SPEED_MPS,
            angle_deg: DEFAULT_ANGLE_DEG,
        }
    }
}

impl SimulationInputs {
    pub fn new(speed_mps: f64, angle_deg: f64) -> Result<Self> {
        check_range("initial speed", speed_mps, MIN_SPEED_MPS, MAX_SPEED_MPS)?;
        check_range("angle", angle_deg, MIN_ANGLE_DEG, MAX_ANGLE_DEG)?;
        Ok(Self {
            speed_mps,
            angle_deg,
        })
    }

    /// Slider path: snaps to the control step and clamps into range.
    pub fn clamped(speed_mps: f64, angle_deg: f64) -> Self {
        Self {
            speed_mps: snap("initial speed", speed_mps, MIN_SPEED_MPS, MAX_SPEED_MPS),
            angle_deg: snap("angle", angle_deg, MIN_ANGLE_DEG, MAX_ANGLE_DEG),
        }
    }

    pub fn speed_mps(&self) -> f64 {
        self.speed_mps
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }
}

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(SimError::NonFinite { name });
    }
    if !(min..=max).contains(&value) {
        return Err(SimError::InputOutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn snap(name: &'static str, value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        warn!(input = name, "non-finite input replaced by {min}");
        return min;
    }
    let snapped = ((value / INPUT_STEP).round() * INPUT_STEP).clamp(min, max);
    if (snapped - value).abs() > INPUT_STEP * 0.5 {
        warn!(input = name, requested = value, applied = snapped, "input clamped");
    }
    snapped
}

/// Values that depend only on the inputs. Recomputed whenever they change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedConstants {
    pub velocity_x_mps: f64,
    pub velocity_y_mps: f64,
    pub flight_time_s: f64,
    pub max_range_m: f64,
    pub max_height_m: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

pub fn velocity_components(inputs: SimulationInputs) -> (f64, f64) {
    let theta = inputs.angle_deg.to_radians();
    let vx = inputs.speed_mps * theta.cos();
    let vy = inputs.speed_mps * theta.sin();
    (vx, vy)
}

pub fn derive_constants(inputs: SimulationInputs) -> DerivedConstants {
    let (vx, vy) = velocity_components(inputs);
    let g = EARTH_GRAVITY_MPS2;
    let two_theta = (2.0 * inputs.angle_deg).to_radians();

    DerivedConstants {
        velocity_x_mps: vx,
        velocity_y_mps: vy,
        flight_time_s: (2.0 * vy) / g,
        max_range_m: (inputs.speed_mps * inputs.speed_mps * two_theta.sin()) / g,
        max_height_m: (vy * vy) / (2.0 * g),
    }
}

pub fn position_at_time(derived: &DerivedConstants, time_s: f64) -> Position {
    Position {
        x: derived.velocity_x_mps * time_s,
        y: (derived.velocity_y_mps * time_s) - (0.5 * EARTH_GRAVITY_MPS2 * time_s * time_s),
    }
}
