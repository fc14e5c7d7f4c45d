use crate::core::ballistics::{DerivedConstants, Position, position_at_time};
use crate::core::window::{DisplayProjection, ScreenPoint};

pub const TRAJECTORY_SAMPLES: usize = 51;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    pub time_s: f64,
    pub position: Position,
    pub screen: ScreenPoint,
}

/// Full-flight polyline, rebuilt from scratch whenever the inputs change.
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectorySample {
    points: Vec<SamplePoint>,
}

impl TrajectorySample {
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn screen_points(&self) -> impl Iterator<Item = ScreenPoint> + '_ {
        self.points.iter().map(|p| p.screen)
    }
}

pub fn sample_trajectory(derived: &DerivedConstants) -> TrajectorySample {
    let projection = DisplayProjection::for_flight(derived);
    let intervals = (TRAJECTORY_SAMPLES - 1) as f64;
    let points = (0..TRAJECTORY_SAMPLES)
        .map(|i| {
            let time_s = (i as f64 * derived.flight_time_s) / intervals;
            let position = position_at_time(derived, time_s);
            SamplePoint {
                time_s,
                position,
                screen: projection.project(position),
            }
        })
        .collect();

    TrajectorySample { points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ballistics::{SimulationInputs, derive_constants};
    use crate::core::window::{ORIGIN_X, ORIGIN_Y};

    fn sample(speed: f64, angle: f64) -> (DerivedConstants, TrajectorySample) {
        let derived =
            derive_constants(SimulationInputs::new(speed, angle).expect("inputs should be valid"));
        (derived, sample_trajectory(&derived))
    }

    #[test]
    fn spans_the_whole_flight() {
        let (derived, trajectory) = sample(50.0, 45.0);
        assert_eq!(trajectory.len(), TRAJECTORY_SAMPLES);

        let first = trajectory.points()[0];
        assert_eq!(first.time_s, 0.0);
        assert_eq!(first.screen, ScreenPoint { x: ORIGIN_X, y: ORIGIN_Y });

        let last = trajectory.points()[TRAJECTORY_SAMPLES - 1];
        assert!((last.time_s - derived.flight_time_s).abs() < 1e-12);
        assert!(last.position.y.abs() < 1e-9);
    }

    #[test]
    fn samples_are_evenly_spaced_in_time() {
        let (derived, trajectory) = sample(80.0, 30.0);
        let step = derived.flight_time_s / 50.0;
        for pair in trajectory.points().windows(2) {
            assert!((pair[1].time_s - pair[0].time_s - step).abs() < 1e-9);
        }
    }

    #[test]
    fn flat_launch_still_yields_every_sample() {
        let (_, trajectory) = sample(20.0, 0.0);
        assert_eq!(trajectory.len(), TRAJECTORY_SAMPLES);
        assert!(
            trajectory
                .screen_points()
                .all(|p| p == ScreenPoint { x: ORIGIN_X, y: ORIGIN_Y })
        );
    }
}
