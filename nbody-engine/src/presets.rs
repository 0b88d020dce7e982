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
//! Built-in initial conditions
//!
//! Planet data from the NASA Planetary Fact Sheet:
//! https://nssdc.gsfc.nasa.gov/planetary/factsheet/
//!
//! Every planet starts on the positive x-axis at its mean orbital distance
//! with its mean orbital speed along +y, giving near-circular prograde
//! orbits in a common plane.

use crate::bodies::{InitialCondition, Vector2};

struct Planet {
    name: &'static str,
    color: &'static str,
    mass: f64,          // kg
    distance: f64,      // m
    orbital_speed: f64, // m/s
}

#[rustfmt::skip]
const SOLAR_SYSTEM: &[Planet] = &[
    Planet { name: "Sun", color: "yellow", mass: 1.989e30, distance: 0.0, orbital_speed: 0.0 },
    Planet { name: "Mercury", color: "grey", mass: 3.301e23, distance: 5.791e10, orbital_speed: 47870.0 },
    Planet { name: "Venus", color: "orange", mass: 4.867e24, distance: 1.082e11, orbital_speed: 35020.0 },
    Planet { name: "Earth", color: "deepskyblue", mass: 5.972e24, distance: 1.496e11, orbital_speed: 29780.0 },
    Planet { name: "Mars", color: "red", mass: 6.419e23, distance: 2.279e11, orbital_speed: 24077.0 },
    Planet { name: "Jupiter", color: "brown", mass: 1.898e27, distance: 7.785e11, orbital_speed: 13060.0 },
    Planet { name: "Saturn", color: "beige", mass: 5.684e26, distance: 1.433e12, orbital_speed: 9680.0 },
    Planet { name: "Uranus", color: "aqua", mass: 8.681e25, distance: 2.871e12, orbital_speed: 6800.0 },
    Planet { name: "Neptune", color: "royalblue", mass: 1.024e26, distance: 4.5e12, orbital_speed: 5430.0 },
];

/// The Sun and the eight planets
pub fn solar_system() -> Vec<InitialCondition> {
    SOLAR_SYSTEM
        .iter()
        .map(|planet| {
            InitialCondition::new(
                planet.name,
                planet.mass,
                Vector2::new(planet.distance, 0.0),
                Vector2::new(0.0, planet.orbital_speed),
            )
            .with_color(planet.color)
        })
        .collect()
}
