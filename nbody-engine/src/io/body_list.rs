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
//! YAML body lists
//!
//! An alternative to the semicolon record format, in SI units throughout:
//!
//! ```yaml
//! bodies:
//!   - name: Sun
//!     color: yellow
//!     mass: 1.989e30
//!     position: { x: 0.0, y: 0.0 }
//!     velocity: { x: 0.0, y: 0.0 }
//!   - name: Earth
//!     mass: 5.972e24
//!     position: { x: 1.496e11, y: 0.0 }
//!     velocity: { x: 0.0, y: 29780.0 }
//! ```
//!
//! `color` may be omitted. Values are validated later by `BodySet::new`.

use crate::bodies::InitialCondition;
use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Top-level document of a YAML body list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyList {
    /// Records in document order
    pub bodies: Vec<InitialCondition>,
}

/// Parse a YAML body list
pub fn parse_body_list(yaml: &str) -> Result<Vec<InitialCondition>, InputError> {
    let list: BodyList = serde_yaml::from_str(yaml)?;
    debug!(records = list.bodies.len(), "parsed YAML body list");
    Ok(list.bodies)
}

/// Read a YAML body list from a file
pub fn load_body_list(path: impl AsRef<Path>) -> Result<Vec<InitialCondition>, InputError> {
    let text = fs::read_to_string(path)?;
    parse_body_list(&text)
}

/// Render `bodies` as a YAML body list
pub fn body_list_to_yaml(bodies: &[InitialCondition]) -> Result<String, InputError> {
    let list = BodyList {
        bodies: bodies.to_vec(),
    };
    Ok(serde_yaml::to_string(&list)?)
}
