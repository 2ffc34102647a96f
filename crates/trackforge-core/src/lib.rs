//! # Trackforge Core
//!
//! Core types for trackforge.
//! Provides the fundamental abstractions shared by every layer:
//! the error taxonomy, 2D vector/pose math, and bounding boxes.

pub mod bounding_box;
pub mod error;
pub mod math;

pub use bounding_box::BoundingBox;
pub use error::{ConfigError, Error, GeometryError, ImportError, Result};
pub use math::{wrap_angle, Pose, Vector2};

/// Tolerance used when comparing chained tile poses.
pub const POSE_EPSILON: f64 = 1e-6;
