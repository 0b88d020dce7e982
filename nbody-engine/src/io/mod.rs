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
//! Thin file wrappers around the engine
//!
//! - [`initial_conditions`]: read body records from a text file
//! - [`body_list`]: read and write body records as YAML
//! - [`export`]: write a trajectory in the `name,color,x,y` transport format

pub mod body_list;
pub mod export;
pub mod initial_conditions;

pub use body_list::{body_list_to_yaml, load_body_list, parse_body_list, BodyList};
pub use export::{save_csv, write_csv};
pub use initial_conditions::{load_initial_conditions, parse_initial_conditions, InitialConditions};
