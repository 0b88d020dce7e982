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
//! Error types for configuration, integration and input handling

use thiserror::Error;

/// Invalid simulation setup, detected before the integration loop starts
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// The body set has no bodies
    #[error("body set is empty")]
    EmptySystem,

    /// Sum of all masses is zero or negative
    #[error("total mass must be positive, got {0}")]
    NonPositiveTotalMass(f64),

    /// A body has a zero, negative or non-finite mass
    #[error("body '{name}' has invalid mass {mass}; mass must be positive and finite")]
    InvalidMass {
        /// Name of the offending body
        name: String,
        /// The rejected mass value
        mass: f64,
    },

    /// Two bodies share a name
    #[error("duplicate body name '{0}'")]
    DuplicateName(String),

    /// A body starts with a NaN or infinite position or velocity
    #[error("body '{name}' has a non-finite position or velocity")]
    NonFiniteState {
        /// Name of the offending body
        name: String,
    },

    /// Step count is zero
    #[error("step count must be positive")]
    InvalidStepCount,

    /// Timestep is zero, negative or non-finite
    #[error("invalid timestep {0}; must be positive and finite")]
    InvalidTimestep(f64),

    /// Gravitational constant is negative or non-finite
    #[error("invalid gravitational constant {0}; must be non-negative and finite")]
    InvalidGravitationalConstant(f64),

    /// Sample target or progress divisions is zero
    #[error("{0} must be positive")]
    InvalidCadence(&'static str),
}

/// Failure of a simulation run
///
/// A run that returns an error produces no trajectory at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// The run was rejected before integration started
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Two bodies reached zero separation
    ///
    /// `step` is 0 when the singularity is found while computing the initial
    /// accelerations and `k` when it is found during the k-th step.
    #[error("collision singularity at step {step}: '{first}' and '{second}' coincide")]
    CollisionSingularity {
        /// Step at which the singularity was detected
        step: u64,
        /// Body whose acceleration was being evaluated
        first: String,
        /// Body found at the same position
        second: String,
    },
}

/// Failure while reading initial conditions or configuration files
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be read
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be parsed
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number in the input
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// A YAML document could not be deserialized
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The parsed values were rejected
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
