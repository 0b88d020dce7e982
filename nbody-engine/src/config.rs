// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Simulation parameters
//!
//! All constants the physics path needs are carried in an explicit
//! [`SimulationConfig`] value and handed to the gravity model and the
//! integrator at construction time. Nothing in the engine reads globals,
//! so runs with different constants can coexist.
//!
//! # YAML format
//!
//! ```yaml
//! steps: 525600              # number of integration steps (required)
//! timestep: 600.0            # seconds per step
//! gravitational_constant: 6.674e-11
//! sample_target: 1000        # approximate samples recorded per body
//! progress_divisions: 10     # progress events per run
//! ```

use crate::error::{ConfigurationError, InputError};
use serde::Deserialize;
use std::path::Path;

/// Gravitational constant in SI units (m³/(kg⋅s²))
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;

/// Astronomical unit in meters, used to scale input coordinates
pub const ASTRONOMICAL_UNIT: f64 = 149_597_870_691.0;

/// Default fixed timestep in seconds (10 minutes)
pub const DEFAULT_TIMESTEP: f64 = 600.0;

/// Default number of samples recorded per body
pub const DEFAULT_SAMPLE_TARGET: u64 = 1000;

/// Default number of progress events per run
pub const DEFAULT_PROGRESS_DIVISIONS: u64 = 10;

/// Immutable parameters of one simulation run
///
/// # Example
///
/// ```
/// use nbody_engine::config::SimulationConfig;
///
/// let config = SimulationConfig::new(10_000).with_timestep(3600.0);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.sample_target, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    /// Number of integration steps
    pub steps: u64,
    /// Fixed timestep in seconds
    #[serde(default = "default_timestep")]
    pub timestep: f64,
    /// Gravitational constant in m³/(kg⋅s²)
    #[serde(default = "default_gravitational_constant")]
    pub gravitational_constant: f64,
    /// Approximate number of trajectory samples per body
    #[serde(default = "default_sample_target")]
    pub sample_target: u64,
    /// Number of progress events emitted over the run
    #[serde(default = "default_progress_divisions")]
    pub progress_divisions: u64,
}

fn default_timestep() -> f64 {
    DEFAULT_TIMESTEP
}

fn default_gravitational_constant() -> f64 {
    GRAVITATIONAL_CONSTANT
}

fn default_sample_target() -> u64 {
    DEFAULT_SAMPLE_TARGET
}

fn default_progress_divisions() -> u64 {
    DEFAULT_PROGRESS_DIVISIONS
}

impl SimulationConfig {
    /// Create a configuration with the given step count and default constants
    pub fn new(steps: u64) -> Self {
        SimulationConfig {
            steps,
            timestep: DEFAULT_TIMESTEP,
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            sample_target: DEFAULT_SAMPLE_TARGET,
            progress_divisions: DEFAULT_PROGRESS_DIVISIONS,
        }
    }

    /// Set the timestep in seconds
    pub fn with_timestep(mut self, timestep: f64) -> Self {
        self.timestep = timestep;
        self
    }

    /// Set the gravitational constant
    pub fn with_gravitational_constant(mut self, g: f64) -> Self {
        self.gravitational_constant = g;
        self
    }

    /// Set the approximate number of samples per body
    pub fn with_sample_target(mut self, target: u64) -> Self {
        self.sample_target = target;
        self
    }

    /// Set the number of progress events per run
    pub fn with_progress_divisions(mut self, divisions: u64) -> Self {
        self.progress_divisions = divisions;
        self
    }

    /// Check that all parameters are usable
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.steps == 0 {
            return Err(ConfigurationError::InvalidStepCount);
        }
        if !(self.timestep > 0.0 && self.timestep.is_finite()) {
            return Err(ConfigurationError::InvalidTimestep(self.timestep));
        }
        if !(self.gravitational_constant >= 0.0 && self.gravitational_constant.is_finite()) {
            return Err(ConfigurationError::InvalidGravitationalConstant(
                self.gravitational_constant,
            ));
        }
        if self.sample_target == 0 {
            return Err(ConfigurationError::InvalidCadence("sample_target"));
        }
        if self.progress_divisions == 0 {
            return Err(ConfigurationError::InvalidCadence("progress_divisions"));
        }
        Ok(())
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self, InputError> {
        let config: SimulationConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}
