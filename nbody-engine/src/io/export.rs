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
//! Tabular trajectory transport
//!
//! Writes a trajectory as CSV with the columns `name,color,x,y`, one row per
//! (body, sample) pair, ordered by body and then by sample index. Positions
//! are in meters. The file carries no physics semantics; it only hands the
//! samples to an external renderer.

use crate::recording::Trajectory;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Column header of the transport format
pub const CSV_HEADER: &str = "name,color,x,y";

/// Write `trajectory` as CSV to `writer`
pub fn write_csv<W: Write>(trajectory: &Trajectory, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for row in trajectory.rows() {
        writeln!(writer, "{},{},{},{}", row.name, row.color, row.x, row.y)?;
    }
    writer.flush()
}

/// Write `trajectory` as CSV to the file at `path`, replacing it
pub fn save_csv(trajectory: &Trajectory, path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(trajectory, BufWriter::new(file))?;
    info!(path = %path.display(), "Simulation data saved");
    Ok(())
}
