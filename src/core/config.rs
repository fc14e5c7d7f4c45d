use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::animation::{AnimationSettings, TICK_PERIOD, TIME_STEP_S};
use crate::core::ballistics::{DEFAULT_ANGLE_DEG, DEFAULT_SPEED_MPS, SimulationInputs};
use crate::core::error::{Result, SimError};

/// Picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "parabolic.toml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    pub initial_speed_mps: f64,
    pub angle_deg: f64,
    pub tick_period_ms: u64,
    pub time_step_s: f64,
    pub log_filter: String,
    pub output_dir: PathBuf,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            initial_speed_mps: DEFAULT_SPEED_MPS,
            angle_deg: DEFAULT_ANGLE_DEG,
            tick_period_ms: TICK_PERIOD.as_millis() as u64,
            time_step_s: TIME_STEP_S,
            log_filter: "warn".to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl SimulatorConfig {
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|source| SimError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text, path)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Explicit path must exist; otherwise the default file is optional.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.inputs()?;
        self.animation()?;
        Ok(())
    }

    pub fn inputs(&self) -> Result<SimulationInputs> {
        SimulationInputs::new(self.initial_speed_mps, self.angle_deg)
    }

    pub fn animation(&self) -> Result<AnimationSettings> {
        AnimationSettings::new(Duration::from_millis(self.tick_period_ms), self.time_step_s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = SimulatorConfig::from_toml_str("", Path::new("inline.toml"))
            .expect("empty config should parse");
        assert_eq!(config, SimulatorConfig::default());
        assert_eq!(
            config.animation().expect("defaults are valid"),
            AnimationSettings::default()
        );
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let config = SimulatorConfig::from_toml_str(
            "angle_deg = 30.0\ntick_period_ms = 20\n",
            Path::new("inline.toml"),
        )
        .expect("config should parse");

        assert_eq!(config.angle_deg, 30.0);
        assert_eq!(config.initial_speed_mps, DEFAULT_SPEED_MPS);
        assert_eq!(
            config.animation().expect("valid").tick_period,
            Duration::from_millis(20)
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = SimulatorConfig::from_toml_str("gravity = 1.62\n", Path::new("moon.toml"))
            .expect_err("unknown key should fail");
        assert!(matches!(err, SimError::ConfigParse { .. }));
        assert!(err.to_string().contains("moon.toml"));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = SimulatorConfig::from_toml_str("initial_speed_mps = 150.0\n", Path::new("c.toml"))
            .expect_err("speed above range");
        assert!(matches!(err, SimError::InputOutOfRange { .. }));

        let err = SimulatorConfig::from_toml_str("tick_period_ms = 0\n", Path::new("c.toml"))
            .expect_err("zero period");
        assert!(matches!(
            err,
            SimError::InvalidSetting {
                name: "tick_period",
                ..
            }
        ));
    }
}
