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
//! Two-dimensional vector primitive
//!
//! `Vector2` is the value type behind every position, velocity, acceleration
//! and force in the engine. It is `Copy` and all arithmetic produces new
//! values, so the physics code reads like the formulas it implements.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// 2D vector with double-precision components
///
/// # Examples
///
/// ```
/// use nbody_engine::bodies::Vector2;
///
/// let v = Vector2::new(3.0, 4.0);
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(v + Vector2::new(1.0, 1.0), Vector2::new(4.0, 5.0));
/// assert_eq!(2.0 * v, Vector2::new(6.0, 8.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
}

impl Vector2 {
    /// Create a new vector with the given components
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    /// The zero vector
    pub const fn zero() -> Self {
        Vector2::new(0.0, 0.0)
    }

    /// Dot product
    pub fn dot(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Squared Euclidean length
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Check if both components are finite (not NaN or infinite)
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Get the vector as an array
    pub fn as_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(arr: [f64; 2]) -> Self {
        Vector2::new(arr[0], arr[1])
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs * self
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;

    fn div(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}

impl Sum for Vector2 {
    fn sum<I: Iterator<Item = Vector2>>(iter: I) -> Vector2 {
        iter.fold(Vector2::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_creation() {
        let v = Vector2::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(Vector2::default(), Vector2::zero());
    }

    #[test]
    fn test_vector_arithmetic() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -4.0);
        assert_eq!(a + b, Vector2::new(4.0, -2.0));
        assert_eq!(a - b, Vector2::new(-2.0, 6.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
        assert_eq!(a * 3.0, Vector2::new(3.0, 6.0));
        assert_eq!(0.5 * b, Vector2::new(1.5, -2.0));
        assert_eq!(b / 2.0, Vector2::new(1.5, -2.0));
    }

    #[test]
    fn test_vector_assign_ops() {
        let mut v = Vector2::new(1.0, 1.0);
        v += Vector2::new(2.0, 3.0);
        assert_eq!(v, Vector2::new(3.0, 4.0));
        v -= Vector2::new(1.0, 1.0);
        assert_eq!(v, Vector2::new(2.0, 3.0));
    }

    #[test]
    fn test_vector_dot_and_magnitude() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.dot(Vector2::new(1.0, 0.0)), 3.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(v.magnitude(), 5.0); // 3-4-5 triangle
    }

    #[test]
    fn test_vector_sum() {
        let total: Vector2 = [Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0)]
            .into_iter()
            .sum();
        assert_eq!(total, Vector2::new(4.0, 6.0));

        let empty: Vector2 = std::iter::empty().sum();
        assert_eq!(empty, Vector2::zero());
    }

    #[test]
    fn test_vector_validation() {
        assert!(Vector2::new(1.0, 2.0).is_finite());
        assert!(!Vector2::new(f64::NAN, 2.0).is_finite());
        assert!(!Vector2::new(1.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_negation_is_exact() {
        let a = Vector2::new(1.234_567_89e11, -9.876_543_21e10);
        let b = Vector2::new(-3.3e9, 7.7e12);
        assert_eq!(a - b, -(b - a));
    }
}
