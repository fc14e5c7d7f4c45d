use std::fmt;

use crate::core::ballistics::DerivedConstants;

/// Derived outputs as shown next to the scene, one decimal place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Readouts {
    pub max_range_m: f64,
    pub max_height_m: f64,
    pub flight_time_s: f64,
}

impl Readouts {
    pub fn from_derived(derived: &DerivedConstants) -> Self {
        Self {
            max_range_m: derived.max_range_m,
            max_height_m: derived.max_height_m,
            flight_time_s: derived.flight_time_s,
        }
    }

    pub fn lines(&self) -> [String; 3] {
        [
            format!("Max range: {:.1} m", self.max_range_m),
            format!("Max height: {:.1} m", self.max_height_m),
            format!("Flight time: {:.1} s", self.flight_time_s),
        ]
    }
}

impl fmt::Display for Readouts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [range, height, time] = self.lines();
        write!(f, "{range} | {height} | {time}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ballistics::{SimulationInputs, derive_constants};

    #[test]
    fn formats_with_one_decimal() {
        let derived = derive_constants(SimulationInputs::default());
        let readouts = Readouts::from_derived(&derived);

        assert_eq!(
            readouts.lines(),
            [
                "Max range: 254.8 m".to_string(),
                "Max height: 63.7 m".to_string(),
                "Flight time: 7.2 s".to_string(),
            ]
        );
        assert_eq!(
            readouts.to_string(),
            "Max range: 254.8 m | Max height: 63.7 m | Flight time: 7.2 s"
        );
    }

    #[test]
    fn near_zero_range_prints_as_zero() {
        let derived =
            derive_constants(SimulationInputs::new(10.0, 90.0).expect("inputs should be valid"));
        assert_eq!(Readouts::from_derived(&derived).lines()[0], "Max range: 0.0 m");
    }
}
