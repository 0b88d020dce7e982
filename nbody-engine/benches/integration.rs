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
//! Benchmarks for the force sweep and the Verlet step
//!
//! These benchmarks measure:
//! - Raw throughput of the O(n²) acceleration sweep for different body counts
//! - Cost of a full velocity Verlet step including the barrier phases
//! - End-to-end cost of a sampled solar system run

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nbody_engine::bodies::{BodySet, InitialCondition, Vector2};
use nbody_engine::config::{SimulationConfig, GRAVITATIONAL_CONSTANT};
use nbody_engine::forces::GravityModel;
use nbody_engine::frame;
use nbody_engine::integration::{Integrator, VelocityVerletIntegrator};
use nbody_engine::presets;
use nbody_engine::simulation::Simulation;

// Scatter bodies over a disk with small random velocities
fn setup_disk(body_count: usize) -> BodySet {
    let mut rng = fastrand::Rng::with_seed(42);
    let initial = (0..body_count)
        .map(|i| {
            let radius = 1.0e11 * (0.1 + rng.f64());
            let angle = rng.f64() * std::f64::consts::TAU;
            InitialCondition::new(
                format!("body-{i}"),
                1.0e24 * (0.5 + rng.f64()),
                Vector2::new(radius * angle.cos(), radius * angle.sin()),
                Vector2::new(1.0e3 * (rng.f64() - 0.5), 1.0e3 * (rng.f64() - 0.5)),
            )
        })
        .collect();
    BodySet::new(initial).unwrap()
}

fn bench_force_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_sweep");
    let gravity = GravityModel::new(GRAVITATIONAL_CONSTANT).unwrap();

    for body_count in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements((*body_count * *body_count) as u64));

        group.bench_with_input(
            BenchmarkId::new("accelerations", body_count),
            body_count,
            |b, &body_count| {
                let bodies = setup_disk(body_count);
                let mut out = vec![Vector2::zero(); body_count];

                b.iter(|| {
                    gravity
                        .accelerations_into(black_box(bodies.as_slice()), black_box(&mut out))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_verlet_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("verlet_step");
    let gravity = GravityModel::new(GRAVITATIONAL_CONSTANT).unwrap();

    for body_count in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*body_count as u64));

        group.bench_with_input(
            BenchmarkId::new("step", body_count),
            body_count,
            |b, &body_count| {
                let mut bodies = setup_disk(body_count);
                frame::normalize(&mut bodies).unwrap();
                let mut integrator = VelocityVerletIntegrator::new(60.0, gravity).unwrap();
                integrator.initialize(&mut bodies).unwrap();

                b.iter(|| integrator.step(black_box(&mut bodies)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_solar_system_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("solar_system");
    group.sample_size(20); // Whole runs are slow

    let simulation = Simulation::new(SimulationConfig::new(10_000)).unwrap();
    group.bench_function("run_10000_steps", |b| {
        b.iter(|| {
            let mut bodies = BodySet::new(presets::solar_system()).unwrap();
            black_box(simulation.run(&mut bodies).unwrap().trajectory.tracks().len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_force_sweep, bench_verlet_step, bench_solar_system_run);
criterion_main!(benches);
