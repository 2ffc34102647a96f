//! 2D vector and pose math for track geometry.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Wrap an angle to the interval `(-pi, pi]`.
pub fn wrap_angle(angle: f64) -> f64 {
    let mut a = angle % std::f64::consts::TAU;
    if a <= -std::f64::consts::PI {
        a += std::f64::consts::TAU;
    } else if a > std::f64::consts::PI {
        a -= std::f64::consts::TAU;
    }
    a
}

/// A 2D vector in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// Creates a new vector with the given components.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector pointing in the given direction (radians).
    pub fn unit(angle: f64) -> Self {
        Self {
            x: angle.cos(),
            y: angle.sin(),
        }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Vector2) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Rotates the vector about the origin by `angle` radians.
    pub fn rotated(&self, angle: f64) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        Self {
            x: self.x * cos_a - self.y * sin_a,
            y: self.x * sin_a + self.y * cos_a,
        }
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

/// A 2D position plus heading (direction of travel, radians).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vector2,
    pub heading: f64,
}

impl Pose {
    /// Creates a pose from coordinates and a heading.
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self {
            position: Vector2::new(x, y),
            heading,
        }
    }

    /// The origin pose with heading 0.
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Compares position distance and wrapped heading difference against a
    /// tolerance.
    pub fn approx_eq(&self, other: &Pose, eps: f64) -> bool {
        self.position.distance_to(&other.position) <= eps
            && wrap_angle(self.heading - other.heading).abs() <= eps
    }

    /// Rotates the pose about the world origin by `angle` radians.
    pub fn rotated(&self, angle: f64) -> Self {
        Self {
            position: self.position.rotated(angle),
            heading: self.heading + angle,
        }
    }
}
