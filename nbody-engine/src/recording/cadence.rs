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
//! Step cadence shared by the trajectory sampler and progress reporter

use tracing::debug;

/// Fixed step interval at which an event fires
///
/// The interval is `floor(steps / divisions)` clamped to at least 1, and
/// the event fires on every step index `i` (0-based) with
/// `i % interval == 0`. For `steps >= divisions` with `divisions` dividing
/// `steps` this fires exactly `divisions` times; when `steps < divisions`
/// it fires on every step, `steps` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    interval: u64,
}

impl Cadence {
    /// Cadence that fires about `divisions` times over `steps` steps
    ///
    /// A zero `divisions` is treated like `divisions > steps`: the event
    /// fires every step.
    pub fn new(steps: u64, divisions: u64) -> Self {
        let raw = steps.checked_div(divisions).unwrap_or(0);
        if raw == 0 {
            debug!(steps, divisions, "cadence interval clamped to 1 step");
        }
        Cadence {
            interval: raw.max(1),
        }
    }

    /// Steps between two events
    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Whether the event fires at `step_index`
    pub fn is_due(&self, step_index: u64) -> bool {
        step_index % self.interval == 0
    }

    /// Number of events over step indices `0..steps`
    pub fn count(&self, steps: u64) -> u64 {
        if steps == 0 {
            0
        } else {
            (steps - 1) / self.interval + 1
        }
    }
}
