//! Simulation parameters
//!
//! Every tunable lives here rather than as a hidden constant, so that a UI or a
//! JSON file can override it. Changing anything means the population has to be
//! regenerated; `Driver` takes care of that.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be within [0, 1], got {value}")]
    OutOfRange { field: &'static str, value: f32 },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
}

/// Parameters consumed by the generator, the step and the driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of agents
    pub count: usize,
    /// Fraction of agents sick at generation (0.0 - 1.0)
    pub sick_percentage: f32,
    /// Fraction of agents frozen in place (0.0 - 1.0)
    pub freeze_percentage: f32,
    /// Agent radius
    pub radius: f32,
    /// Time units a newly sick agent stays sick
    pub sick_time: f32,
    /// Upper speed bound as a multiple of the base speed
    pub minimal_speed: f32,
    /// Arena side divided by this is the base speed
    pub speed_scale: f32,
    /// Simulated time per tick
    pub delta_t: f32,
    /// Wall-clock interval between ticks for a live driver
    pub tick_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: AGENT_COUNT,
            sick_percentage: SICK_PERCENTAGE,
            freeze_percentage: FREEZE_PERCENTAGE,
            radius: AGENT_RADIUS,
            sick_time: SICK_TIME,
            minimal_speed: MINIMAL_SPEED,
            speed_scale: SPEED_SCALE,
            delta_t: DELTA_T,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl Config {
    /// Number of agents seeded sick: `floor(sick_percentage * count)`
    pub fn sick_count(&self) -> usize {
        (self.sick_percentage * self.count as f32) as usize
    }

    /// Number of agents frozen after the shuffle: `floor(freeze_percentage * count)`
    pub fn frozen_count(&self) -> usize {
        (self.freeze_percentage * self.count as f32) as usize
    }

    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("sick_percentage", self.sick_percentage),
            ("freeze_percentage", self.freeze_percentage),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        for (field, value) in [
            ("radius", self.radius),
            ("minimal_speed", self.minimal_speed),
            ("speed_scale", self.speed_scale),
            ("delta_t", self.delta_t),
            ("tick_interval_ms", self.tick_interval_ms as f32),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        // Zero is allowed: agents recover on the first tick after infection
        if !(self.sick_time >= 0.0) {
            return Err(ConfigError::NonPositive {
                field: "sick_time",
                value: self.sick_time,
            });
        }
        Ok(())
    }

    /// Panic on an invalid configuration
    ///
    /// Out-of-range values reaching the generator are programming errors.
    pub fn assert_valid(&self) {
        if let Err(e) = self.validate() {
            panic!("invalid configuration: {}", e);
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load a config file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; using default config", e);
                Self::default()
            }
        }
    }
}
