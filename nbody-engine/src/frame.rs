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
//! Barycentric frame normalization
//!
//! Shifts a body set into its center-of-mass frame so that the barycenter
//! sits at the origin with zero velocity. Done once before any acceleration
//! is computed; afterwards an isolated system keeps its barycenter fixed up
//! to rounding error.

use crate::bodies::{Body, BodySet, Vector2};
use crate::error::ConfigurationError;
use tracing::debug;

/// Mass-weighted mean position and velocity of a body set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barycenter {
    /// Center-of-mass position in meters
    pub position: Vector2,
    /// Center-of-mass velocity in meters per second
    pub velocity: Vector2,
}

/// Compute the barycenter of `bodies`
///
/// # Errors
///
/// Returns [`ConfigurationError::NonPositiveTotalMass`] if the masses do not
/// sum to a positive, finite value.
pub fn barycenter(bodies: &[Body]) -> Result<Barycenter, ConfigurationError> {
    let total_mass: f64 = bodies.iter().map(Body::mass).sum();
    if !(total_mass > 0.0 && total_mass.is_finite()) {
        return Err(ConfigurationError::NonPositiveTotalMass(total_mass));
    }

    let weighted_position: Vector2 = bodies.iter().map(|b| b.mass() * b.position).sum();
    let weighted_velocity: Vector2 = bodies.iter().map(|b| b.mass() * b.velocity).sum();

    Ok(Barycenter {
        position: weighted_position / total_mass,
        velocity: weighted_velocity / total_mass,
    })
}

/// Move `bodies` into the center-of-mass frame
///
/// Returns the barycenter that was removed.
pub fn normalize(bodies: &mut BodySet) -> Result<Barycenter, ConfigurationError> {
    let center = barycenter(bodies.as_slice())?;
    for body in bodies.as_mut_slice() {
        body.position -= center.position;
        body.velocity -= center.velocity;
    }
    debug!(
        x = center.position.x,
        y = center.position.y,
        vx = center.velocity.x,
        vy = center.velocity.y,
        "removed barycenter drift"
    );
    Ok(center)
}
