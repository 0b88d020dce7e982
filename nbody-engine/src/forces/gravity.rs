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
//! Newtonian point-mass gravity
//!
//! Every body attracts every other body with a force proportional to the
//! product of their masses and inversely proportional to the square of the
//! distance between them:
//!
//! **F = G * (m₁ * m₂) / r²**
//!
//! directed along the line joining the two centers. In vector form, with
//! `r = p₂ - p₁` the displacement from body 1 to body 2:
//!
//! **F₁₂ = G * m₁ * m₂ * r / |r|³**
//!
//! # Singularities
//!
//! No softening is applied. Two bodies at zero separation make the force law
//! undefined; this is reported as a [`Coincidence`] instead of letting
//! infinities or NaN leak into the state. The same applies when the
//! separation is so small that `|r|³` underflows or the force overflows.
//!
//! # Cost
//!
//! One acceleration is O(n); a full sweep over the set is O(n²) and is the
//! dominant cost of a run. With the `parallel` feature the sweep is split
//! across bodies with Rayon. Each body's sum is still accumulated in set
//! order, so both builds produce bit-identical results.

use crate::bodies::{Body, BodyId, Vector2};
use crate::error::ConfigurationError;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Zero or numerically degenerate separation between two bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coincidence {
    /// Body whose acceleration was being evaluated
    pub body: BodyId,
    /// Body found at the same position
    pub other: BodyId,
}

/// Force calculator for Newtonian gravity
///
/// # Example
///
/// ```
/// use nbody_engine::bodies::{BodySet, InitialCondition, Vector2};
/// use nbody_engine::forces::GravityModel;
///
/// let set = BodySet::new(vec![
///     InitialCondition::new("a", 1.0e3, Vector2::zero(), Vector2::zero()),
///     InitialCondition::new("b", 1.0e3, Vector2::new(1.0e3, 0.0), Vector2::zero()),
/// ]).unwrap();
///
/// let gravity = GravityModel::new(6.674e-11).unwrap();
/// let acc = gravity.acceleration(&set.as_slice()[0], set.as_slice()).unwrap();
/// assert!(acc.x > 0.0); // pulled toward b
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityModel {
    g_constant: f64,
}

impl GravityModel {
    /// Create a gravity model with the given gravitational constant
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidGravitationalConstant`] if `g` is
    /// negative or not finite.
    pub fn new(g: f64) -> Result<Self, ConfigurationError> {
        if !(g >= 0.0 && g.is_finite()) {
            return Err(ConfigurationError::InvalidGravitationalConstant(g));
        }
        Ok(GravityModel { g_constant: g })
    }

    /// Gravitational constant used by this model
    pub fn g_constant(&self) -> f64 {
        self.g_constant
    }

    /// Gravitational force exerted on `body` by `other`, in Newtons
    ///
    /// The result is antisymmetric bit for bit:
    /// `pairwise_force(a, b) == -pairwise_force(b, a)`.
    pub fn pairwise_force(&self, body: &Body, other: &Body) -> Result<Vector2, Coincidence> {
        let coincidence = Coincidence {
            body: body.id(),
            other: other.id(),
        };

        let r = other.position - body.position;
        let distance_sq = r.dot(r);
        let distance = distance_sq.sqrt();
        let denominator = distance_sq * distance;
        if denominator == 0.0 {
            return Err(coincidence);
        }

        // The mass product is grouped so the scale is symmetric in (body, other)
        let scale = self.g_constant * (body.mass() * other.mass()) / denominator;
        let force = scale * r;
        if !force.is_finite() {
            return Err(coincidence);
        }
        Ok(force)
    }

    /// Net gravitational acceleration on `body` from every other body in `bodies`
    ///
    /// Self-interaction is excluded by id.
    pub fn acceleration(&self, body: &Body, bodies: &[Body]) -> Result<Vector2, Coincidence> {
        let mut net_force = Vector2::zero();
        for other in bodies {
            if other.id() == body.id() {
                continue;
            }
            net_force += self.pairwise_force(body, other)?;
        }
        Ok(net_force / body.mass())
    }

    /// Compute the acceleration of every body into `out`
    ///
    /// `out[i]` receives the acceleration of `bodies[i]`. Only positions are
    /// read, so callers must finish updating every position before the sweep.
    ///
    /// # Panics
    ///
    /// Panics if `out` and `bodies` differ in length.
    pub fn accelerations_into(
        &self,
        bodies: &[Body],
        out: &mut [Vector2],
    ) -> Result<(), Coincidence> {
        assert_eq!(bodies.len(), out.len(), "acceleration buffer length mismatch");

        #[cfg(feature = "parallel")]
        {
            out.par_iter_mut()
                .zip(bodies.par_iter())
                .try_for_each(|(slot, body)| {
                    *slot = self.acceleration(body, bodies)?;
                    Ok(())
                })
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (slot, body) in out.iter_mut().zip(bodies) {
                *slot = self.acceleration(body, bodies)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{BodySet, InitialCondition};
    use crate::config::GRAVITATIONAL_CONSTANT;

    fn pair(pos_a: Vector2, mass_a: f64, pos_b: Vector2, mass_b: f64) -> BodySet {
        BodySet::new(vec![
            InitialCondition::new("a", mass_a, pos_a, Vector2::zero()),
            InitialCondition::new("b", mass_b, pos_b, Vector2::zero()),
        ])
        .unwrap()
    }

    #[test]
    fn test_gravitational_constant() {
        assert!(GRAVITATIONAL_CONSTANT > 6.6e-11);
        assert!(GRAVITATIONAL_CONSTANT < 6.7e-11);
    }

    #[test]
    fn test_invalid_constant_rejected() {
        assert!(GravityModel::new(-1.0).is_err());
        assert!(GravityModel::new(f64::NAN).is_err());
        assert!(GravityModel::new(f64::INFINITY).is_err());
        assert!(GravityModel::new(0.0).is_ok());
    }

    #[test]
    fn test_pairwise_force_magnitude_and_direction() {
        let gravity = GravityModel::new(GRAVITATIONAL_CONSTANT).unwrap();
        // Two 1000 kg masses 1 km apart along x
        let set = pair(Vector2::zero(), 1000.0, Vector2::new(1000.0, 0.0), 1000.0);
        let [a, b] = [&set.as_slice()[0], &set.as_slice()[1]];

        let force = gravity.pairwise_force(a, b).unwrap();
        let expected = GRAVITATIONAL_CONSTANT * 1000.0 * 1000.0 / (1000.0 * 1000.0);
        assert!(force.x > 0.0, "force on a must point toward b");
        assert_eq!(force.y, 0.0);
        assert!((force.x - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn test_pairwise_force_is_antisymmetric() {
        let gravity = GravityModel::new(GRAVITATIONAL_CONSTANT).unwrap();
        let set = pair(
            Vector2::new(1.3e11, -2.7e10),
            5.972e24,
            Vector2::new(-4.1e11, 9.9e11),
            1.898e27,
        );
        let [a, b] = [&set.as_slice()[0], &set.as_slice()[1]];
        assert_eq!(
            gravity.pairwise_force(a, b).unwrap(),
            -gravity.pairwise_force(b, a).unwrap()
        );
    }

    #[test]
    fn test_acceleration_independent_of_own_mass() {
        let gravity = GravityModel::new(GRAVITATIONAL_CONSTANT).unwrap();
        let light = pair(Vector2::zero(), 1.0, Vector2::new(1.0e7, 0.0), 6.0e24);
        let heavy = pair(Vector2::zero(), 1.0e6, Vector2::new(1.0e7, 0.0), 6.0e24);

        let a_light = gravity.acceleration(&light.as_slice()[0], light.as_slice()).unwrap();
        let a_heavy = gravity.acceleration(&heavy.as_slice()[0], heavy.as_slice()).unwrap();
        let expected = GRAVITATIONAL_CONSTANT * 6.0e24 / 1.0e14;
        assert!((a_light.x - expected).abs() / expected < 1e-12);
        assert!((a_heavy.x - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn test_zero_distance_is_reported() {
        let gravity = GravityModel::new(GRAVITATIONAL_CONSTANT).unwrap();
        let set = pair(Vector2::new(5.0, 5.0), 1000.0, Vector2::new(5.0, 5.0), 1000.0);
        let [a, b] = [&set.as_slice()[0], &set.as_slice()[1]];

        let err = gravity.pairwise_force(a, b).unwrap_err();
        assert_eq!(err, Coincidence { body: a.id(), other: b.id() });

        let err = gravity.acceleration(b, set.as_slice()).unwrap_err();
        assert_eq!(err, Coincidence { body: b.id(), other: a.id() });
    }

    #[test]
    fn test_underflowing_distance_is_reported() {
        let gravity = GravityModel::new(GRAVITATIONAL_CONSTANT).unwrap();
        let set = pair(Vector2::zero(), 1.0e30, Vector2::new(1.0e-120, 0.0), 1.0e30);
        let [a, b] = [&set.as_slice()[0], &set.as_slice()[1]];
        assert!(gravity.pairwise_force(a, b).is_err());
    }

    #[test]
    fn test_single_body_feels_nothing() {
        let gravity = GravityModel::new(GRAVITATIONAL_CONSTANT).unwrap();
        let set = BodySet::new(vec![InitialCondition::new(
            "alone",
            1.0,
            Vector2::new(3.0, 4.0),
            Vector2::zero(),
        )])
        .unwrap();
        let acc = gravity.acceleration(&set.as_slice()[0], set.as_slice()).unwrap();
        assert_eq!(acc, Vector2::zero());
    }

    #[test]
    fn test_sweep_matches_single_evaluations() {
        let gravity = GravityModel::new(GRAVITATIONAL_CONSTANT).unwrap();
        let set = BodySet::new(
            (0..6)
                .map(|i| {
                    let angle = i as f64;
                    InitialCondition::new(
                        format!("b{i}"),
                        1.0e24 * (i + 1) as f64,
                        Vector2::new(angle.cos() * 1.0e11 * (i + 1) as f64, angle.sin() * 1.0e11),
                        Vector2::zero(),
                    )
                })
                .collect(),
        )
        .unwrap();

        let mut out = vec![Vector2::zero(); set.len()];
        gravity.accelerations_into(set.as_slice(), &mut out).unwrap();
        for (body, acc) in set.iter().zip(&out) {
            assert_eq!(*acc, gravity.acceleration(body, set.as_slice()).unwrap());
        }
    }
}
