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
//! Initial-condition file reader
//!
//! The format is plain text with one header line followed by one record per
//! line:
//!
//! ```text
//! name;color;mass;x;y;vx;vy
//! Sun;yellow;1.989e30;0;0;0;0
//! Earth;deepskyblue;5.972e24;1.0;0;0;29780
//! ```
//!
//! Mass is in kilograms, positions in astronomical units and velocities in
//! meters per second. Positions are converted to meters on read.

use crate::bodies::{InitialCondition, Vector2};
use crate::config::ASTRONOMICAL_UNIT;
use crate::error::InputError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

const FIELD_COUNT: usize = 7;

/// Parsed initial conditions plus a display hint
#[derive(Debug, Clone, PartialEq)]
pub struct InitialConditions {
    /// Records in file order, in SI units
    pub bodies: Vec<InitialCondition>,
    /// 1.5 times the largest coordinate magnitude in the file, in AU
    ///
    /// Only meaningful to renderers; the engine never reads it.
    pub display_limit: f64,
}

/// Parse initial conditions from a reader
pub fn parse_initial_conditions<R: BufRead>(reader: R) -> Result<InitialConditions, InputError> {
    let mut bodies = Vec::new();
    let mut max_coordinate: f64 = 0.0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        // First line is the column header
        if line_number == 1 || line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(';').map(str::trim).collect();
        if fields.len() != FIELD_COUNT {
            return Err(InputError::Parse {
                line: line_number,
                message: format!("expected {FIELD_COUNT} fields, found {}", fields.len()),
            });
        }

        let number = |position: usize, label: &str| -> Result<f64, InputError> {
            fields[position].parse::<f64>().map_err(|_| InputError::Parse {
                line: line_number,
                message: format!("invalid {label} '{}'", fields[position]),
            })
        };

        let mass = number(2, "mass")?;
        let x = number(3, "x")?;
        let y = number(4, "y")?;
        let vx = number(5, "vx")?;
        let vy = number(6, "vy")?;

        max_coordinate = max_coordinate.max(x.abs()).max(y.abs());

        bodies.push(
            InitialCondition::new(
                fields[0],
                mass,
                Vector2::new(x * ASTRONOMICAL_UNIT, y * ASTRONOMICAL_UNIT),
                Vector2::new(vx, vy),
            )
            .with_color(fields[1]),
        );
    }

    debug!(records = bodies.len(), "parsed initial conditions");
    Ok(InitialConditions {
        bodies,
        display_limit: 1.5 * max_coordinate,
    })
}

/// Read initial conditions from a file
pub fn load_initial_conditions(path: impl AsRef<Path>) -> Result<InitialConditions, InputError> {
    let file = File::open(path)?;
    parse_initial_conditions(BufReader::new(file))
}
