//! Tile primitives: the two geometric building blocks of a track lane.
//!
//! A tile knows its start pose and shape parameters and derives its end pose
//! and local bounding box in closed form. Tiles are immutable once
//! constructed and owned exclusively by the track that holds them.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use trackforge_core::{BoundingBox, Pose, Vector2};

/// A straight lane segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineTile {
    start: Pose,
    length: f64,
}

impl LineTile {
    /// Creates a straight segment of the given length starting at `start`.
    ///
    /// A non-positive length is a caller contract violation.
    pub fn new(start: Pose, length: f64) -> Self {
        debug_assert!(length > 0.0, "line tile length must be positive");
        Self { start, length }
    }

    pub fn start_pose(&self) -> Pose {
        self.start
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// End pose: translated along the heading; heading unchanged.
    pub fn end_pose(&self) -> Pose {
        Pose {
            position: self.start.position + Vector2::unit(self.start.heading) * self.length,
            heading: self.start.heading,
        }
    }

    /// Smallest axis-aligned box containing the segment path.
    pub fn local_bounding_box(&self) -> BoundingBox {
        let mut bb = BoundingBox::empty();
        bb.expand_point(self.start.position);
        bb.expand_point(self.end_pose().position);
        bb
    }
}

/// A circular arc lane segment.
///
/// The radius is signed: positive turns left (counter-clockwise), negative
/// turns right. The swept angle carries the same sign as the radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcTile {
    start: Pose,
    radius: f64,
    sweep: f64,
}

impl ArcTile {
    /// Creates an arc of the given signed radius and swept angle.
    ///
    /// A zero radius/sweep or mismatched signs are caller contract
    /// violations.
    pub fn new(start: Pose, radius: f64, sweep: f64) -> Self {
        debug_assert!(radius != 0.0, "arc tile radius must be non-zero");
        debug_assert!(sweep != 0.0, "arc tile sweep must be non-zero");
        debug_assert!(
            radius.signum() == sweep.signum(),
            "arc sweep sign must match radius sign"
        );
        Self {
            start,
            radius,
            sweep,
        }
    }

    pub fn start_pose(&self) -> Pose {
        self.start
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// Arc length along the lane.
    pub fn length(&self) -> f64 {
        (self.radius * self.sweep).abs()
    }

    /// Center of the arc's circle: offset 90 degrees to the left of the
    /// heading by the signed radius, which lands on the correct side for
    /// both turn directions.
    pub fn center(&self) -> Vector2 {
        let h = self.start.heading;
        self.start.position + Vector2::new(-h.sin(), h.cos()) * self.radius
    }

    /// End pose: the start point rotated about the center by the swept
    /// angle; the heading advances by the same angle.
    pub fn end_pose(&self) -> Pose {
        let c = self.center();
        let p = (self.start.position - c).rotated(self.sweep) + c;
        Pose {
            position: p,
            heading: self.start.heading + self.sweep,
        }
    }

    /// Smallest axis-aligned box containing the arc path, computed
    /// analytically: both endpoints plus every axis-aligned extremum the
    /// swept angular interval crosses.
    pub fn local_bounding_box(&self) -> BoundingBox {
        let mut bb = BoundingBox::empty();
        bb.expand_point(self.start.position);
        bb.expand_point(self.end_pose().position);

        let c = self.center();
        let r = self.radius.abs();
        let a0 = {
            let d = self.start.position - c;
            d.y.atan2(d.x)
        };
        let a1 = a0 + self.sweep;
        let lo = a0.min(a1);
        let hi = a0.max(a1);

        // Quarter-turn directions crossed by [lo, hi] are the candidate
        // extrema of the circle restricted to the arc.
        let mut k = (lo / FRAC_PI_2).ceil();
        while k * FRAC_PI_2 <= hi {
            let a = k * FRAC_PI_2;
            bb.expand_point(c + Vector2::unit(a) * r);
            k += 1.0;
        }
        bb
    }
}

/// A lane tile: either a straight segment or a circular arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tile {
    Line(LineTile),
    Arc(ArcTile),
}

impl Tile {
    pub fn start_pose(&self) -> Pose {
        match self {
            Tile::Line(t) => t.start_pose(),
            Tile::Arc(t) => t.start_pose(),
        }
    }

    pub fn end_pose(&self) -> Pose {
        match self {
            Tile::Line(t) => t.end_pose(),
            Tile::Arc(t) => t.end_pose(),
        }
    }

    /// Path length along the lane.
    pub fn length(&self) -> f64 {
        match self {
            Tile::Line(t) => t.length(),
            Tile::Arc(t) => t.length(),
        }
    }

    pub fn local_bounding_box(&self) -> BoundingBox {
        match self {
            Tile::Line(t) => t.local_bounding_box(),
            Tile::Arc(t) => t.local_bounding_box(),
        }
    }

    /// The same tile rotated about the world origin. Shape parameters are
    /// untouched: a rotation is orientation-preserving, so the signed arc
    /// radius never flips turn direction.
    pub fn rotated(&self, angle: f64) -> Tile {
        match self {
            Tile::Line(t) => Tile::Line(LineTile {
                start: t.start.rotated(angle),
                length: t.length,
            }),
            Tile::Arc(t) => Tile::Arc(ArcTile {
                start: t.start.rotated(angle),
                radius: t.radius,
                sweep: t.sweep,
            }),
        }
    }

    /// SVG path data (`d` attribute) for the tile's lane path.
    pub fn svg_path_fragment(&self) -> String {
        let s = self.start_pose().position;
        let e = self.end_pose().position;
        match self {
            Tile::Line(_) => {
                format!("M {} {} L {} {}", s.x, s.y, e.x, e.y)
            }
            Tile::Arc(t) => {
                let r = t.radius.abs();
                let large_arc = if t.sweep.abs() > PI { 1 } else { 0 };
                // SVG's sweep-flag 1 is the positive-angle direction, the
                // same rotation direction as a positive sweep.
                let sweep_flag = if t.sweep > 0.0 { 1 } else { 0 };
                format!(
                    "M {} {} A {} {} 0 {} {} {} {}",
                    s.x, s.y, r, r, large_arc, sweep_flag, e.x, e.y
                )
            }
        }
    }

    /// Serializable descriptor of the tile for the JSON export.
    pub fn descriptor(&self) -> TileDescriptor {
        match self {
            Tile::Line(t) => TileDescriptor::Line {
                start: t.start_pose(),
                length: t.length(),
                end: t.end_pose(),
            },
            Tile::Arc(t) => TileDescriptor::Arc {
                start: t.start_pose(),
                radius: t.radius(),
                sweep: t.sweep(),
                end: t.end_pose(),
            },
        }
    }
}

/// JSON-facing description of a tile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TileDescriptor {
    Line { start: Pose, length: f64, end: Pose },
    Arc {
        start: Pose,
        radius: f64,
        sweep: f64,
        end: Pose,
    },
}
