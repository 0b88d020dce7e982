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
//! # N-Body Engine
//!
//! A deterministic two-dimensional gravitational N-body engine. Given initial
//! masses, positions and velocities it computes the time evolution of the
//! system with a velocity Verlet integrator and records a sparse, uniformly
//! spaced trajectory for every body.
//!
//! ## Features
//!
//! - **Direct summation**: O(n²) Newtonian gravity with exact pairwise antisymmetry
//! - **Barycentric frame**: net system drift removed before integration
//! - **Velocity Verlet**: symplectic, second order, barrier-ordered phases
//! - **Singularity detection**: zero separation aborts with the offending pair
//! - **Parallelization**: optional Rayon force phase (`parallel` feature)
//!
//! ## Example
//!
//! ```rust
//! use nbody_engine::bodies::BodySet;
//! use nbody_engine::config::SimulationConfig;
//! use nbody_engine::presets;
//! use nbody_engine::simulation::Simulation;
//!
//! let mut bodies = BodySet::new(presets::solar_system()).unwrap();
//! let simulation = Simulation::new(SimulationConfig::new(1000)).unwrap();
//! let output = simulation.run(&mut bodies).unwrap();
//! assert_eq!(output.trajectory.tracks().len(), 9);
//! ```

#![warn(missing_docs)]

/// Vector primitive, bodies and body sets
pub mod bodies;

/// Simulation parameters and physical constants
pub mod config;

/// Error types
pub mod error;

/// Force calculators
pub mod forces;

/// Barycentric frame normalization
pub mod frame;

/// Numerical integration methods
pub mod integration;

/// File readers and writers
pub mod io;

/// Built-in initial conditions
pub mod presets;

/// Trajectory sampling and progress reporting
pub mod recording;

/// Run orchestration
pub mod simulation;

pub use bodies::{Body, BodyId, BodySet, InitialCondition, Vector2};
pub use config::SimulationConfig;
pub use error::{ConfigurationError, InputError, SimulationError};
pub use simulation::{Simulation, SimulationOutput};
