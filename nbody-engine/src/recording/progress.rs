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
//! Coarse progress signals

use super::cadence::Cadence;
use tracing::info;

/// A progress event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Step index at which the event fired
    pub step: u64,
    /// Completed share of the run, rounded down
    pub percent: u64,
}

/// Emits a progress event about `divisions` times per run
///
/// Events are `tracing` info events; they are also returned so callers can
/// forward them. Reporting never influences simulation state.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    cadence: Cadence,
    steps: u64,
}

impl ProgressReporter {
    /// Create a reporter for a run of `steps` steps
    pub fn new(steps: u64, divisions: u64) -> Self {
        ProgressReporter {
            cadence: Cadence::new(steps, divisions),
            steps,
        }
    }

    /// Emit a progress event if `step_index` is on the reporting cadence
    pub fn maybe_report(&self, step_index: u64) -> Option<Progress> {
        if self.steps == 0 || !self.cadence.is_due(step_index) {
            return None;
        }
        let percent = (u128::from(step_index) * 100 / u128::from(self.steps)) as u64;
        info!(step = step_index, percent, "Simulation progress: {} %", percent);
        Some(Progress {
            step: step_index,
            percent,
        })
    }
}
