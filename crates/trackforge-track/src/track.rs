//! Track assembly: an ordered, connected chain of tiles.

use crate::tile::{ArcTile, LineTile, Tile};
use tracing::debug;
use trackforge_core::{BoundingBox, GeometryError, Pose, Result, POSE_EPSILON};

/// Default rendered lane width in millimeters.
pub const DEFAULT_LANE_WIDTH: f64 = 10.0;

/// An ordered sequence of tiles forming one continuous lane path.
///
/// The end pose of tile `i` equals the start pose of tile `i + 1` within
/// [`POSE_EPSILON`]; `push` enforces this fail-fast, so importer and builder
/// bugs surface at construction time instead of as garbled drawings. A track
/// may close into a loop but closure is not structurally enforced.
#[derive(Debug, Clone)]
pub struct Track {
    tiles: Vec<Tile>,
    start: Pose,
    lane_width: f64,
}

impl Track {
    /// Creates an empty track starting at the world origin.
    pub fn new() -> Self {
        Self::starting_at(Pose::origin())
    }

    /// Creates an empty track whose first appended tile starts at `start`.
    pub fn starting_at(start: Pose) -> Self {
        Self {
            tiles: Vec::new(),
            start,
            lane_width: DEFAULT_LANE_WIDTH,
        }
    }

    /// Sets the rendered lane width in millimeters.
    pub fn with_lane_width(mut self, lane_width: f64) -> Self {
        self.lane_width = lane_width;
        self
    }

    pub fn lane_width(&self) -> f64 {
        self.lane_width
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// The chain's current end pose (the start pose while still empty).
    pub fn end_pose(&self) -> Pose {
        self.tiles.last().map_or(self.start, |t| t.end_pose())
    }

    /// Adds a tile, rejecting one whose declared start pose diverges from
    /// the chain's current end pose by more than [`POSE_EPSILON`].
    pub fn push(&mut self, tile: Tile) -> Result<()> {
        let expected = self.end_pose();
        let declared = tile.start_pose();
        if !declared.approx_eq(&expected, POSE_EPSILON) {
            return Err(GeometryError::DisconnectedTile {
                index: self.tiles.len(),
                x: declared.position.x,
                y: declared.position.y,
                heading: declared.heading,
            }
            .into());
        }
        self.tiles.push(tile);
        Ok(())
    }

    /// Appends a straight segment continuing from the chain's end pose.
    pub fn append_line(&mut self, length: f64) {
        let tile = Tile::Line(LineTile::new(self.end_pose(), length));
        self.tiles.push(tile);
    }

    /// Appends an arc segment continuing from the chain's end pose.
    pub fn append_arc(&mut self, radius: f64, sweep: f64) {
        let tile = Tile::Arc(ArcTile::new(self.end_pose(), radius, sweep));
        self.tiles.push(tile);
    }

    /// Union of all tile-local bounding boxes.
    ///
    /// Fails with [`GeometryError::EmptyCanvas`] on a tile-less track;
    /// callers must treat that as fatal before any layout computation.
    pub fn adapt_canvas(&self) -> Result<BoundingBox> {
        if self.tiles.is_empty() {
            return Err(GeometryError::EmptyCanvas.into());
        }
        let mut bb = BoundingBox::empty();
        for tile in &self.tiles {
            bb.expand_box(&tile.local_bounding_box());
        }
        debug!(
            width = bb.width(),
            height = bb.height(),
            tiles = self.tiles.len(),
            "computed track canvas"
        );
        Ok(bb)
    }

    /// Rotates the whole track about the world origin by `angle` radians.
    ///
    /// Rotation is an isometry: it preserves tile connectivity and the turn
    /// direction of every arc.
    pub fn rotate(&mut self, angle: f64) {
        if angle == 0.0 {
            return;
        }
        self.start = self.start.rotated(angle);
        for tile in &mut self.tiles {
            *tile = tile.rotated(angle);
        }
    }

    /// Whether the last tile's end pose matches the first tile's start pose.
    pub fn is_closed(&self, eps: f64) -> bool {
        match (self.tiles.first(), self.tiles.last()) {
            (Some(first), Some(last)) => last.end_pose().approx_eq(&first.start_pose(), eps),
            _ => false,
        }
    }

    /// Total lane path length.
    pub fn total_length(&self) -> f64 {
        self.tiles.iter().map(|t| t.length()).sum()
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::new()
    }
}
