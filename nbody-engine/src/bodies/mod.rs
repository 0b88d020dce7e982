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
//! Bodies and the data types they are built from
//!
//! - [`Vector2`]: fixed-size 2D value type used for all vector quantities
//! - [`Body`] / [`BodyId`]: instantaneous state and identity of one mass point
//! - [`BodySet`]: the validated, order-stable collection a run operates on
//! - [`InitialCondition`]: input record from which bodies are built

pub mod components;
mod body;
mod set;

pub use body::{Body, BodyId, InitialCondition};
pub use components::Vector2;
pub use set::BodySet;
