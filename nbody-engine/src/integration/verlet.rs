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
//! Velocity Verlet integrator implementation
//!
//! The velocity Verlet algorithm is a symplectic integrator that provides
//! excellent energy conservation for Hamiltonian systems. It is particularly
//! well-suited for orbital mechanics.
//!
//! # Algorithm
//!
//! ```text
//! x(t + dt) = x(t) + v(t)*dt + 0.5*a(t)*dt²
//! a(t + dt) = F(x(t + dt)) / m
//! v(t + dt) = v(t) + 0.5*(a(t) + a(t + dt))*dt
//! ```
//!
//! # Ordering
//!
//! Each step runs in three phases with a barrier between the first two:
//!
//! 1. advance every position
//! 2. recompute every acceleration from the fully updated configuration
//! 3. commit every velocity and acceleration
//!
//! New accelerations are written to a scratch buffer during phase 2, so no
//! force evaluation ever observes a partially committed step. Interleaving
//! the phases per body would degrade the scheme to first order and make the
//! result depend on body order.
//!
//! # References
//!
//! - Hairer, E., Lubich, C., & Wanner, G. (2006). Geometric Numerical Integration:
//!   Structure-Preserving Algorithms for Ordinary Differential Equations (2nd ed.).
//!   Springer. Section II.3.
//! - Swope, W. C., Andersen, H. C., Berens, P. H., & Wilson, K. R. (1982).
//!   A computer simulation method for the calculation of equilibrium constants for the
//!   formation of physical clusters of molecules: Application to small water clusters.
//!   The Journal of Chemical Physics, 76(1), 637-649.

use super::Integrator;
use crate::bodies::{Body, BodySet, Vector2};
use crate::error::ConfigurationError;
use crate::forces::{Coincidence, GravityModel};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Velocity Verlet integrator for gravitating bodies
///
/// # Example
///
/// ```
/// use nbody_engine::forces::GravityModel;
/// use nbody_engine::integration::{Integrator, VelocityVerletIntegrator};
///
/// let gravity = GravityModel::new(6.674e-11).unwrap();
/// let integrator = VelocityVerletIntegrator::new(600.0, gravity).unwrap();
/// assert_eq!(integrator.timestep(), 600.0);
/// ```
#[derive(Debug, Clone)]
pub struct VelocityVerletIntegrator {
    timestep: f64,
    gravity: GravityModel,
    next_accelerations: Vec<Vector2>,
}

impl VelocityVerletIntegrator {
    /// Create a new velocity Verlet integrator
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidTimestep`] if the timestep is
    /// non-positive, NaN, or infinite.
    pub fn new(timestep: f64, gravity: GravityModel) -> Result<Self, ConfigurationError> {
        if !(timestep > 0.0 && timestep.is_finite()) {
            return Err(ConfigurationError::InvalidTimestep(timestep));
        }
        Ok(VelocityVerletIntegrator {
            timestep,
            gravity,
            next_accelerations: Vec::new(),
        })
    }

    /// Force model used for acceleration updates
    pub fn gravity(&self) -> &GravityModel {
        &self.gravity
    }

    fn recompute_accelerations(&mut self, bodies: &BodySet) -> Result<(), Coincidence> {
        self.next_accelerations.resize(bodies.len(), Vector2::zero());
        self.gravity
            .accelerations_into(bodies.as_slice(), &mut self.next_accelerations)
    }
}

impl Integrator for VelocityVerletIntegrator {
    fn name(&self) -> &str {
        "Velocity Verlet"
    }

    fn timestep(&self) -> f64 {
        self.timestep
    }

    fn initialize(&mut self, bodies: &mut BodySet) -> Result<(), Coincidence> {
        self.recompute_accelerations(bodies)?;
        for (body, acc) in bodies.as_mut_slice().iter_mut().zip(&self.next_accelerations) {
            body.acceleration = *acc;
        }
        Ok(())
    }

    fn step(&mut self, bodies: &mut BodySet) -> Result<(), Coincidence> {
        let dt = self.timestep;
        let half_dt_sq = 0.5 * dt * dt;

        // Step 1: x(t + dt) = x(t) + v(t)*dt + 0.5*a(t)*dt²
        for body in bodies.as_mut_slice() {
            body.position += body.velocity * dt + body.acceleration * half_dt_sq;
        }

        // Step 2: a(t + dt) from the complete set of new positions
        self.recompute_accelerations(bodies)?;

        // Step 3: v(t + dt) = v(t) + 0.5*(a(t) + a(t + dt))*dt
        let commit = |(body, next): (&mut Body, &Vector2)| {
            body.velocity += 0.5 * (body.acceleration + *next) * dt;
            body.acceleration = *next;
        };

        #[cfg(feature = "parallel")]
        bodies
            .as_mut_slice()
            .par_iter_mut()
            .zip(self.next_accelerations.par_iter())
            .for_each(commit);

        #[cfg(not(feature = "parallel"))]
        bodies
            .as_mut_slice()
            .iter_mut()
            .zip(&self.next_accelerations)
            .for_each(commit);

        Ok(())
    }
}
