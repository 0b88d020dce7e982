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
//! Numerical integration and conservation diagnostics
//!
//! This module provides the time integrator that advances a body set and
//! helpers for measuring the quantities an isolated gravitating system must
//! conserve.
//!
//! # Integrators
//!
//! - **Velocity Verlet**: Symplectic, time-reversible, second order. Good
//!   long-term energy behavior for orbital mechanics at a fixed timestep.
//!
//! # Timestep Guidelines
//!
//! - Too large: orbits of the innermost bodies precess or blow up
//! - Rule of thumb: keep `dt` below 1/100 of the shortest pairwise
//!   dynamical time `sqrt(d³ / (G (m₁ + m₂)))`; see [`shortest_dynamical_time`]

use crate::bodies::{Body, BodySet, Vector2};
use crate::forces::Coincidence;

mod verlet;

pub use verlet::VelocityVerletIntegrator;

/// Total linear momentum `Σ mᵢ vᵢ`
pub fn total_momentum(bodies: &[Body]) -> Vector2 {
    bodies.iter().map(Body::momentum).sum()
}

/// Total kinetic energy `Σ ½ mᵢ |vᵢ|²`
pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(|b| 0.5 * b.mass() * b.velocity.magnitude_squared())
        .sum()
}

/// Total gravitational potential energy `-Σᵢ<ⱼ G mᵢ mⱼ / dᵢⱼ`
///
/// Coincident bodies yield negative infinity.
pub fn potential_energy(bodies: &[Body], g: f64) -> f64 {
    let mut total = 0.0;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            let distance = (b.position - a.position).magnitude();
            total -= g * a.mass() * b.mass() / distance;
        }
    }
    total
}

/// Kinetic plus potential energy
pub fn total_energy(bodies: &[Body], g: f64) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies, g)
}

/// Shortest pairwise dynamical time `min sqrt(d³ / (G (m₁ + m₂)))` in seconds
///
/// Returns `None` for fewer than two bodies, zero gravity, or coincident bodies.
pub fn shortest_dynamical_time(bodies: &[Body], g: f64) -> Option<f64> {
    if g <= 0.0 {
        return None;
    }
    let mut shortest: Option<f64> = None;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            let distance = (b.position - a.position).magnitude();
            if distance == 0.0 {
                return None;
            }
            let time = (distance.powi(3) / (g * (a.mass() + b.mass()))).sqrt();
            shortest = Some(shortest.map_or(time, |s| s.min(time)));
        }
    }
    shortest
}

/// Trait for fixed-step time integrators
///
/// An integrator owns its timestep and force model. It is initialized once
/// per run, then stepped; any zero-separation encounter aborts with the
/// offending pair.
pub trait Integrator: Send + Sync {
    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Get the timestep used by this integrator
    fn timestep(&self) -> f64;

    /// Check the timestep against the dynamics of `bodies`
    ///
    /// Returns a warning message if the timestep is likely too coarse to
    /// resolve the tightest orbit. Advisory only.
    fn validate_timestep(&self, bodies: &[Body], g: f64) -> Result<(), String> {
        let dt = self.timestep();
        match shortest_dynamical_time(bodies, g) {
            Some(t_dyn) if dt > t_dyn / 100.0 => Err(format!(
                "Timestep {dt} s exceeds 1/100 of the shortest dynamical time {t_dyn:.3e} s; \
                 consider a smaller timestep for better accuracy."
            )),
            _ => Ok(()),
        }
    }

    /// Compute the starting acceleration of every body
    ///
    /// Positions and velocities are left untouched.
    fn initialize(&mut self, bodies: &mut BodySet) -> Result<(), Coincidence>;

    /// Advance every body by one timestep
    fn step(&mut self, bodies: &mut BodySet) -> Result<(), Coincidence>;
}
