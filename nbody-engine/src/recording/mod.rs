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
//! Side outputs of a run: sampled trajectories and progress events
//!
//! Both the [`TrajectorySampler`] and the [`ProgressReporter`] fire on a
//! [`Cadence`] derived from the total step count. A cadence that would
//! compute to zero steps is clamped to one, so short runs never fault.

mod cadence;
mod progress;
mod trajectory;

pub use cadence::Cadence;
pub use progress::{Progress, ProgressReporter};
pub use trajectory::{Track, Trajectory, TrajectoryRow, TrajectorySampler};
