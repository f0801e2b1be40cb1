//! Engine-wide constants supplied by the surrounding simulation.

#[cfg(feature = "serde")]
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{BrainConfig, ConfigError, TelemetryConfig};

pub const DEFAULT_TICK_INTERVAL_HOURS: f64 = 0.25;
pub const DEFAULT_TELEMETRY_WINDOW_HOURS: f64 = 24.0;

/// Engine configuration, typically loaded from the simulation's YAML config.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Minimum simulation time between two walks of the same actor's tree.
    pub tick_interval_hours: f64,

    /// Trailing window of execution history kept per node.
    pub telemetry_window_hours: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_hours: DEFAULT_TICK_INTERVAL_HOURS,
            telemetry_window_hours: DEFAULT_TELEMETRY_WINDOW_HOURS,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("tick_interval_hours", self.tick_interval_hours),
            ("telemetry_window_hours", self.telemetry_window_hours),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{field} must be a positive number of hours, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn telemetry(&self) -> TelemetryConfig {
        TelemetryConfig {
            tick_interval: self.tick_interval_hours,
            retention_window: self.telemetry_window_hours,
        }
    }

    pub fn brain_config(&self) -> BrainConfig {
        BrainConfig {
            tick_interval: self.tick_interval_hours,
        }
    }

    /// Parse and validate a YAML document. Missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "serde")]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }
}
