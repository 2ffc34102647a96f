//! Axis-aligned bounding boxes with an empty sentinel state.

use crate::math::Vector2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in millimeters.
///
/// A freshly constructed box is empty (inverted sentinel bounds) and becomes
/// valid with the first `expand_*` call. Boxes never shrink except by
/// reconstruction. An empty box reaching the layout stage is a fatal
/// geometry-invariant violation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl BoundingBox {
    /// Creates an empty box (the "no geometry yet" sentinel).
    pub fn empty() -> Self {
        Self {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        }
    }

    /// Creates a box from explicit bounds.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Whether the box is in the empty sentinel state.
    pub fn is_empty(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    /// Expands the box to include the given point.
    pub fn expand_point(&mut self, p: Vector2) {
        self.x_min = self.x_min.min(p.x);
        self.x_max = self.x_max.max(p.x);
        self.y_min = self.y_min.min(p.y);
        self.y_max = self.y_max.max(p.y);
    }

    /// Expands the box to include another box. Expanding by an empty box is
    /// a no-op.
    pub fn expand_box(&mut self, other: &BoundingBox) {
        if other.is_empty() {
            return;
        }
        self.x_min = self.x_min.min(other.x_min);
        self.x_max = self.x_max.max(other.x_max);
        self.y_min = self.y_min.min(other.y_min);
        self.y_max = self.y_max.max(other.y_max);
    }

    /// Grows the box outward by `margin` on every side.
    pub fn grow(&mut self, margin: f64) {
        self.x_min -= margin;
        self.x_max += margin;
        self.y_min -= margin;
        self.y_max += margin;
    }

    /// Width of the box (x extent).
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the box (y extent).
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sentinel() {
        let bb = BoundingBox::empty();
        assert!(bb.is_empty());
    }

    #[test]
    fn test_expand_point_fixes_sentinel() {
        let mut bb = BoundingBox::empty();
        bb.expand_point(Vector2::new(1.0, -2.0));
        assert!(!bb.is_empty());
        assert_eq!(bb.x_min, 1.0);
        assert_eq!(bb.x_max, 1.0);
        assert_eq!(bb.y_min, -2.0);
        assert_eq!(bb.y_max, -2.0);
    }

    #[test]
    fn test_expand_box_union() {
        let mut a = BoundingBox::new(0.0, 1.0, 0.0, 1.0);
        let b = BoundingBox::new(-2.0, 0.5, 0.5, 3.0);
        a.expand_box(&b);
        assert_eq!(a, BoundingBox::new(-2.0, 1.0, 0.0, 3.0));
    }

    #[test]
    fn test_expand_by_empty_is_noop() {
        let mut a = BoundingBox::new(0.0, 1.0, 0.0, 1.0);
        a.expand_box(&BoundingBox::empty());
        assert_eq!(a, BoundingBox::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn test_grow() {
        let mut a = BoundingBox::new(0.0, 10.0, 5.0, 15.0);
        a.grow(2.5);
        assert_eq!(a, BoundingBox::new(-2.5, 12.5, 2.5, 17.5));
        assert_eq!(a.width(), 15.0);
        assert_eq!(a.height(), 15.0);
    }
}
