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
//! Body state and identity
//!
//! A [`Body`] holds only the instantaneous physical state of one point mass.
//! Sampled history lives in the trajectory recorder, keyed by [`BodyId`].

use super::components::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle identifying a body within one body set
///
/// Ids are assigned in insertion order when the set is built and double as
/// the body's index, so the force loop can exclude self-interaction without
/// comparing names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(usize);

impl BodyId {
    pub(crate) fn new(index: usize) -> Self {
        BodyId(index)
    }

    /// Position of the body in its set
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Body({})", self.0)
    }
}

/// Initial-condition record for one body, in SI units
///
/// This is the interface between an input source (file reader, preset,
/// test fixture) and the engine. Values are validated when the record is
/// turned into a [`Body`] by `BodySet::new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InitialCondition {
    /// Unique name within the run
    pub name: String,
    /// Opaque display tag passed through to renderers
    #[serde(default)]
    pub color: String,
    /// Mass in kilograms
    pub mass: f64,
    /// Position in meters
    pub position: Vector2,
    /// Velocity in meters per second
    pub velocity: Vector2,
}

impl InitialCondition {
    /// Create a record with an empty display tag
    pub fn new(name: impl Into<String>, mass: f64, position: Vector2, velocity: Vector2) -> Self {
        InitialCondition {
            name: name.into(),
            color: String::new(),
            mass,
            position,
            velocity,
        }
    }

    /// Set the display tag
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// Mutable physical state of one point mass
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    id: BodyId,
    name: String,
    color: String,
    mass: f64,
    /// Position in meters
    pub position: Vector2,
    /// Velocity in meters per second
    pub velocity: Vector2,
    /// Acceleration in meters per second squared
    pub acceleration: Vector2,
}

impl Body {
    pub(crate) fn from_initial(id: BodyId, initial: InitialCondition) -> Self {
        Body {
            id,
            name: initial.name,
            color: initial.color,
            mass: initial.mass,
            position: initial.position,
            velocity: initial.velocity,
            acceleration: Vector2::zero(),
        }
    }

    /// Handle assigned when the body set was built
    pub fn id(&self) -> BodyId {
        self.id
    }

    /// Name of the body
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display tag of the body
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Mass in kilograms
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Linear momentum `m * v`
    pub fn momentum(&self) -> Vector2 {
        self.mass * self.velocity
    }

    /// Check if position, velocity and acceleration are all finite
    pub fn is_valid(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite() && self.acceleration.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_from_initial() {
        let initial = InitialCondition::new(
            "Earth",
            5.972e24,
            Vector2::new(1.496e11, 0.0),
            Vector2::new(0.0, 29780.0),
        )
        .with_color("deepskyblue");

        let body = Body::from_initial(BodyId::new(3), initial);
        assert_eq!(body.id().index(), 3);
        assert_eq!(body.name(), "Earth");
        assert_eq!(body.color(), "deepskyblue");
        assert_eq!(body.mass(), 5.972e24);
        assert_eq!(body.acceleration, Vector2::zero());
        assert!(body.is_valid());
    }

    #[test]
    fn test_body_momentum() {
        let body = Body::from_initial(
            BodyId::new(0),
            InitialCondition::new("probe", 2.0, Vector2::zero(), Vector2::new(3.0, -1.0)),
        );
        assert_eq!(body.momentum(), Vector2::new(6.0, -2.0));
    }

    #[test]
    fn test_body_id_display() {
        assert_eq!(BodyId::new(7).to_string(), "Body(7)");
    }
}
