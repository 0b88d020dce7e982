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
//! Ordered, validated collection of bodies
//!
//! The body set is the only shared mutable resource of a run. It is built
//! once from initial conditions, keeps its order for the whole simulation,
//! and hands out [`BodyId`]s that the force loop and the trajectory recorder
//! use as identity.

use super::body::{Body, BodyId, InitialCondition};
use crate::error::ConfigurationError;
use std::collections::HashSet;

/// Validated, order-stable set of bodies
#[derive(Debug, Clone, PartialEq)]
pub struct BodySet {
    bodies: Vec<Body>,
}

impl BodySet {
    /// Build a body set from initial conditions
    ///
    /// Ids are assigned in the order the records are given.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the set is empty, any mass is not
    /// positive and finite, any position or velocity is not finite, two
    /// records share a name, or the total mass is not positive.
    pub fn new(initial: Vec<InitialCondition>) -> Result<Self, ConfigurationError> {
        if initial.is_empty() {
            return Err(ConfigurationError::EmptySystem);
        }

        let mut names = HashSet::with_capacity(initial.len());
        for record in &initial {
            if !(record.mass > 0.0 && record.mass.is_finite()) {
                return Err(ConfigurationError::InvalidMass {
                    name: record.name.clone(),
                    mass: record.mass,
                });
            }
            if !record.position.is_finite() || !record.velocity.is_finite() {
                return Err(ConfigurationError::NonFiniteState {
                    name: record.name.clone(),
                });
            }
            if !names.insert(record.name.as_str()) {
                return Err(ConfigurationError::DuplicateName(record.name.clone()));
            }
        }

        let bodies: Vec<Body> = initial
            .into_iter()
            .enumerate()
            .map(|(index, record)| Body::from_initial(BodyId::new(index), record))
            .collect();

        // Individually positive masses can still overflow to infinity
        let total_mass: f64 = bodies.iter().map(Body::mass).sum();
        if !(total_mass > 0.0 && total_mass.is_finite()) {
            return Err(ConfigurationError::NonPositiveTotalMass(total_mass));
        }

        Ok(BodySet { bodies })
    }

    /// Number of bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Always false for a constructed set; provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterate over bodies in set order
    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    /// Borrow the bodies as a slice
    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Look up a body by id
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    /// Look up a body by name
    pub fn find(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|body| body.name() == name)
    }

    /// Sum of all masses in kilograms
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(Body::mass).sum()
    }

    /// Current state as initial-condition records, in set order
    ///
    /// Accelerations are dropped; they are recomputed when a new run starts.
    pub fn to_initial_conditions(&self) -> Vec<InitialCondition> {
        self.bodies
            .iter()
            .map(|body| {
                InitialCondition::new(body.name(), body.mass(), body.position, body.velocity)
                    .with_color(body.color())
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a BodySet {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}
