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
//! Solar system demo
//!
//! Runs the built-in eight-planet system for one simulated year and reports
//! energy drift and the number of samples recorded per body.
//!
//! ```sh
//! RUST_LOG=info cargo run --example solar_system
//! ```

use nbody_engine::config::SimulationConfig;
use nbody_engine::integration::total_energy;
use nbody_engine::{frame, presets, BodySet, Simulation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_target(false).init();

    // One year at ten minute steps
    let config = SimulationConfig::new(52_560);
    let g = config.gravitational_constant;
    let simulation = Simulation::new(config)?;

    let mut bodies = BodySet::new(presets::solar_system())?;
    let mut reference = bodies.clone();
    frame::normalize(&mut reference)?;
    let initial_energy = total_energy(reference.as_slice(), g);

    let output = simulation.run(&mut bodies)?;
    let final_energy = total_energy(bodies.as_slice(), g);

    println!(
        "Simulated {} steps in {:.2} seconds",
        output.steps,
        output.elapsed.as_secs_f64()
    );
    println!(
        "Relative energy drift: {:.3e}",
        ((final_energy - initial_energy) / initial_energy).abs()
    );
    for track in output.trajectory.tracks() {
        let last = track.samples().last().copied().unwrap_or_default();
        println!(
            "{:<8} {:>5} samples, final position ({:.3e}, {:.3e}) m",
            track.name(),
            track.len(),
            last.x,
            last.y
        );
    }

    Ok(())
}
