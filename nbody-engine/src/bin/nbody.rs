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
//! Command-line driver for the N-body engine
//!
//! ```bash
//! # Built-in solar system, one year at 10 minute steps
//! nbody --steps 52560
//!
//! # Bodies from a file, trajectory written for a renderer
//! nbody planets.txt --steps 100000 --output trajectory.csv
//!
//! # Parameters and bodies from YAML
//! nbody bodies.yaml --config run.yaml
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use nbody_engine::config::SimulationConfig;
use nbody_engine::integration::total_energy;
use nbody_engine::io::{load_body_list, load_initial_conditions, save_csv};
use nbody_engine::{presets, BodySet, Simulation};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "nbody", about = "Simulate a gravitational N-body system")]
struct Args {
    /// Initial-condition file: `name;color;mass;x;y;vx;vy` records with
    /// positions in AU, or a `.yaml`/`.yml` body list in SI units.
    /// Uses the built-in solar system when omitted.
    input: Option<PathBuf>,

    /// Number of integration steps
    #[arg(short = 'n', long)]
    steps: Option<u64>,

    /// Timestep in seconds
    #[arg(short, long)]
    timestep: Option<f64>,

    /// YAML file with simulation parameters; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the sampled trajectory as `name,color,x,y` CSV
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    )
}

fn load_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_yaml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => match args.steps {
            Some(steps) => SimulationConfig::new(steps),
            None => bail!("either --steps or --config is required"),
        },
    };
    if let Some(steps) = args.steps {
        config.steps = steps;
    }
    if let Some(timestep) = args.timestep {
        config.timestep = timestep;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = load_config(&args)?;

    let initial = match &args.input {
        Some(path) if is_yaml(path) => load_body_list(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        Some(path) => {
            let parsed = load_initial_conditions(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            info!(display_limit_au = parsed.display_limit, "loaded initial conditions");
            parsed.bodies
        }
        None => presets::solar_system(),
    };
    let mut bodies = BodySet::new(initial).context("invalid initial conditions")?;

    let simulation = Simulation::new(config)?;
    let g = simulation.config().gravitational_constant;
    let steps = simulation.config().steps;

    // Energy is compared in the barycentric frame the run works in
    let mut reference = bodies.clone();
    nbody_engine::frame::normalize(&mut reference)?;
    let initial_energy = total_energy(reference.as_slice(), g);

    let output = simulation.run(&mut bodies)?;

    println!(
        "Took {:.2} seconds to simulate using N = {}",
        output.elapsed.as_secs_f64(),
        steps
    );

    let final_energy = total_energy(bodies.as_slice(), g);
    if initial_energy != 0.0 {
        info!(
            relative_drift = (final_energy - initial_energy).abs() / initial_energy.abs(),
            "energy drift"
        );
    }

    if let Some(path) = &args.output {
        save_csv(&output.trajectory, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Simulation data saved to {}", path.display());
    }

    Ok(())
}
