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
//! Run orchestration
//!
//! A run normalizes the body set into its barycentric frame, computes the
//! initial accelerations, then advances the configured number of velocity
//! Verlet steps. After each step every body is offered to the trajectory
//! sampler and the progress reporter gets a chance to fire.
//!
//! Runs are synchronous and deterministic: identical inputs give
//! bit-identical trajectories. The only wall-clock reading is the elapsed
//! time reported alongside the result.

use crate::bodies::{BodyId, BodySet};
use crate::config::SimulationConfig;
use crate::error::{ConfigurationError, SimulationError};
use crate::forces::{Coincidence, GravityModel};
use crate::frame;
use crate::integration::{Integrator, VelocityVerletIntegrator};
use crate::recording::{ProgressReporter, Trajectory, TrajectorySampler};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct SimulationOutput {
    /// Sampled positions of every body
    pub trajectory: Trajectory,
    /// Wall-clock compute time, informational only
    pub elapsed: Duration,
    /// Number of steps that were integrated
    pub steps: u64,
}

/// A configured simulation, reusable across body sets
///
/// # Example
///
/// ```
/// use nbody_engine::bodies::{BodySet, InitialCondition, Vector2};
/// use nbody_engine::config::SimulationConfig;
/// use nbody_engine::simulation::Simulation;
///
/// let mut bodies = BodySet::new(vec![
///     InitialCondition::new("Sun", 1.989e30, Vector2::zero(), Vector2::zero()),
///     InitialCondition::new(
///         "Earth",
///         5.972e24,
///         Vector2::new(1.496e11, 0.0),
///         Vector2::new(0.0, 29780.0),
///     ),
/// ]).unwrap();
///
/// let simulation = Simulation::new(SimulationConfig::new(2000)).unwrap();
/// let output = simulation.run(&mut bodies).unwrap();
/// assert_eq!(output.trajectory.find("Earth").unwrap().len(), 1000);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    gravity: GravityModel,
}

impl Simulation {
    /// Create a simulation from a validated configuration
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let gravity = GravityModel::new(config.gravitational_constant)?;
        Ok(Simulation { config, gravity })
    }

    /// Parameters of this simulation
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run the simulation on `bodies`, mutating them in place
    ///
    /// On success `bodies` holds the final state and the returned output
    /// holds the sampled trajectory.
    ///
    /// # Errors
    ///
    /// - [`SimulationError::Configuration`] if the set has no positive total
    ///   mass; nothing has been modified in that case.
    /// - [`SimulationError::CollisionSingularity`] if two bodies reach zero
    ///   separation. The run stops at that step; `bodies` is left in the
    ///   partially advanced state and no trajectory is returned.
    pub fn run(&self, bodies: &mut BodySet) -> Result<SimulationOutput, SimulationError> {
        let steps = self.config.steps;
        let started = Instant::now();
        info!(
            bodies = bodies.len(),
            steps,
            timestep = self.config.timestep,
            "starting simulation"
        );

        frame::normalize(bodies)?;

        let mut integrator = VelocityVerletIntegrator::new(self.config.timestep, self.gravity)?;
        if let Err(warning) =
            integrator.validate_timestep(bodies.as_slice(), self.gravity.g_constant())
        {
            warn!("{}", warning);
        }

        if let Err(coincidence) = integrator.initialize(bodies) {
            return Err(singularity(bodies, 0, coincidence));
        }

        let mut sampler = TrajectorySampler::new(bodies, steps, self.config.sample_target);
        let progress = ProgressReporter::new(steps, self.config.progress_divisions);

        for step in 0..steps {
            if let Err(coincidence) = integrator.step(bodies) {
                return Err(singularity(bodies, step + 1, coincidence));
            }
            sampler.record(step, bodies);
            progress.maybe_report(step);
        }

        let elapsed = started.elapsed();
        info!(
            elapsed_ms = elapsed.as_millis() as u64,
            steps,
            "simulation finished"
        );

        Ok(SimulationOutput {
            trajectory: sampler.finish(),
            elapsed,
            steps,
        })
    }
}

fn singularity(bodies: &BodySet, step: u64, coincidence: Coincidence) -> SimulationError {
    let name = |id: BodyId| {
        bodies
            .get(id)
            .map(|body| body.name().to_string())
            .unwrap_or_else(|| id.to_string())
    };
    SimulationError::CollisionSingularity {
        step,
        first: name(coincidence.body),
        second: name(coincidence.other),
    }
}
