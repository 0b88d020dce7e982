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
//! Orbital accuracy, pairwise symmetry and determinism

use nbody_engine::bodies::{BodySet, InitialCondition, Vector2};
use nbody_engine::config::{SimulationConfig, ASTRONOMICAL_UNIT, GRAVITATIONAL_CONSTANT};
use nbody_engine::forces::GravityModel;
use nbody_engine::presets;
use nbody_engine::simulation::Simulation;
use std::f64::consts::PI;

const SUN_MASS: f64 = 1.989e30;
const TIMESTEP: f64 = 600.0;

/// Sun at the origin and a 1 kg test body on a circular orbit at 1 AU
fn circular_orbit() -> BodySet {
    let speed = (GRAVITATIONAL_CONSTANT * SUN_MASS / ASTRONOMICAL_UNIT).sqrt();
    BodySet::new(vec![
        InitialCondition::new("Sun", SUN_MASS, Vector2::zero(), Vector2::zero()),
        InitialCondition::new(
            "probe",
            1.0,
            Vector2::new(ASTRONOMICAL_UNIT, 0.0),
            Vector2::new(0.0, speed),
        ),
    ])
    .unwrap()
}

fn orbital_period() -> f64 {
    2.0 * PI * (ASTRONOMICAL_UNIT.powi(3) / (GRAVITATIONAL_CONSTANT * SUN_MASS)).sqrt()
}

fn run_for(bodies: &mut BodySet, duration: f64) {
    let steps = (duration / TIMESTEP).round() as u64;
    let config = SimulationConfig::new(steps).with_timestep(TIMESTEP);
    Simulation::new(config).unwrap().run(bodies).unwrap();
}

#[test]
fn test_circular_orbit_closes_after_one_period() {
    let period = orbital_period();
    assert!((period - 3.156e7).abs() / 3.156e7 < 0.01, "period {period}");

    let mut bodies = circular_orbit();
    let start = bodies.find("probe").unwrap().position;
    run_for(&mut bodies, period);

    let end = bodies.find("probe").unwrap().position;
    let error = (end - start).magnitude() / ASTRONOMICAL_UNIT;
    assert!(error < 0.01, "orbit did not close: relative error {error}");
}

#[test]
fn test_circular_orbit_is_attractive() {
    // Half a period later the probe must be on the far side of the Sun
    let mut bodies = circular_orbit();
    run_for(&mut bodies, orbital_period() / 2.0);

    let probe = bodies.find("probe").unwrap();
    assert!(
        (probe.position.x + ASTRONOMICAL_UNIT).abs() / ASTRONOMICAL_UNIT < 0.01,
        "probe at {:?}",
        probe.position
    );
    let radius = probe.position.magnitude();
    assert!((radius - ASTRONOMICAL_UNIT).abs() / ASTRONOMICAL_UNIT < 1e-3);
}

fn random_body(name: &str, rng: &mut fastrand::Rng) -> InitialCondition {
    let mass = 1.0e20 + rng.f64() * 1.0e30;
    let position = Vector2::new((rng.f64() - 0.5) * 1.0e13, (rng.f64() - 0.5) * 1.0e13);
    InitialCondition::new(name, mass, position, Vector2::zero())
}

#[test]
fn test_newtons_third_law() {
    let gravity = GravityModel::new(GRAVITATIONAL_CONSTANT).unwrap();
    let mut rng = fastrand::Rng::with_seed(7);

    for _ in 0..200 {
        let initial = vec![random_body("a", &mut rng), random_body("b", &mut rng)];
        let set = BodySet::new(initial).unwrap();
        let [a, b] = [&set.as_slice()[0], &set.as_slice()[1]];

        let on_a = gravity.pairwise_force(a, b).unwrap();
        let on_b = gravity.pairwise_force(b, a).unwrap();
        assert_eq!(on_a, -on_b);

        // Attraction: the force on a points from a toward b
        assert!(on_a.dot(b.position - a.position) > 0.0);
    }
}

#[test]
fn test_runs_are_deterministic() {
    let config = SimulationConfig::new(3000).with_sample_target(300);
    let simulation = Simulation::new(config).unwrap();

    let mut first = BodySet::new(presets::solar_system()).unwrap();
    let mut second = BodySet::new(presets::solar_system()).unwrap();
    let a = simulation.run(&mut first).unwrap();
    let b = simulation.run(&mut second).unwrap();

    assert_eq!(a.trajectory, b.trajectory);
    assert_eq!(first, second);
}
