use crate::core::ballistics::{DerivedConstants, EARTH_GRAVITY_MPS2, Position};

pub const VIEW_WIDTH: f64 = 400.0;
pub const VIEW_HEIGHT: f64 = 300.0;

/// Screen location of the launch point; axes start here.
pub const ORIGIN_X: f64 = 50.0;
pub const ORIGIN_Y: f64 = 250.0;
pub const PLOT_WIDTH: f64 = 300.0;
pub const PLOT_HEIGHT: f64 = 200.0;

/// Pixels per m/s for the velocity indicator.
pub const VELOCITY_SCALE: f64 = 2.0;

/// Extents at or below this are treated as zero and contribute no offset.
const DEGENERATE_EXTENT_M: f64 = 1e-9;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// Maps flight-space metres onto the fixed 400x300 view so that the full
/// range spans the plot width and the apex touches the plot top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayProjection {
    range_m: f64,
    height_m: f64,
}

impl DisplayProjection {
    pub fn for_flight(derived: &DerivedConstants) -> Self {
        Self {
            range_m: derived.max_range_m,
            height_m: derived.max_height_m,
        }
    }

    pub fn project(&self, position: Position) -> ScreenPoint {
        ScreenPoint {
            x: ORIGIN_X + scaled_offset(position.x, self.range_m, PLOT_WIDTH),
            y: ORIGIN_Y - scaled_offset(position.y, self.height_m, PLOT_HEIGHT),
        }
    }

    /// End point of the velocity arrow drawn from the projectile at `time_s`.
    pub fn velocity_indicator(
        &self,
        anchor: ScreenPoint,
        derived: &DerivedConstants,
        time_s: f64,
    ) -> ScreenPoint {
        ScreenPoint {
            x: anchor.x + derived.velocity_x_mps * VELOCITY_SCALE,
            y: anchor.y - derived.velocity_y_mps * VELOCITY_SCALE
                + EARTH_GRAVITY_MPS2 * time_s * VELOCITY_SCALE,
        }
    }
}

fn scaled_offset(value: f64, extent: f64, span: f64) -> f64 {
    if extent.abs() <= DEGENERATE_EXTENT_M {
        return 0.0;
    }
    (value / extent) * span
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ballistics::{SimulationInputs, derive_constants, position_at_time};

    fn derived(speed: f64, angle: f64) -> DerivedConstants {
        derive_constants(SimulationInputs::new(speed, angle).expect("inputs should be valid"))
    }

    #[test]
    fn launch_point_maps_to_axis_origin() {
        let d = derived(50.0, 45.0);
        let p = DisplayProjection::for_flight(&d).project(Position::default());
        assert_eq!(p, ScreenPoint { x: 50.0, y: 250.0 });
    }

    #[test]
    fn landing_and_apex_fill_the_plot() {
        let d = derived(50.0, 45.0);
        let projection = DisplayProjection::for_flight(&d);

        let landing = projection.project(position_at_time(&d, d.flight_time_s));
        assert!((landing.x - 350.0).abs() < 1e-9);
        assert!((landing.y - 250.0).abs() < 1e-9);

        let apex = projection.project(position_at_time(&d, d.flight_time_s / 2.0));
        assert!((apex.x - 200.0).abs() < 1e-9);
        assert!((apex.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn zero_extents_give_finite_coordinates() {
        let flat = derived(30.0, 0.0);
        let p = DisplayProjection::for_flight(&flat).project(Position { x: 3.0, y: 0.0 });
        assert!(p.x.is_finite() && p.y.is_finite());
        assert_eq!(p.y, ORIGIN_Y);

        let vertical = derived(10.0, 90.0);
        let projection = DisplayProjection::for_flight(&vertical);
        let apex = projection.project(position_at_time(&vertical, vertical.flight_time_s / 2.0));
        assert_eq!(apex.x, ORIGIN_X);
        assert!((apex.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn velocity_indicator_tracks_gravity() {
        let d = derived(50.0, 45.0);
        let projection = DisplayProjection::for_flight(&d);
        let anchor = ScreenPoint { x: 100.0, y: 100.0 };

        let at_launch = projection.velocity_indicator(anchor, &d, 0.0);
        assert!((at_launch.x - (100.0 + d.velocity_x_mps * 2.0)).abs() < 1e-9);
        assert!((at_launch.y - (100.0 - d.velocity_y_mps * 2.0)).abs() < 1e-9);

        // Vertical component vanishes at the apex.
        let at_apex = projection.velocity_indicator(anchor, &d, d.flight_time_s / 2.0);
        assert!((at_apex.y - 100.0).abs() < 1e-9);
    }
}
