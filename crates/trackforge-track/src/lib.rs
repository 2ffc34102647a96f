//! # Trackforge Track
//!
//! The geometric track model: line/arc tile primitives, the connected tile
//! chain (`Track`), procedural track builders, and the derived table of
//! named reference points along a track.

pub mod builders;
pub mod location_table;
pub mod tile;
pub mod track;

pub use builders::{ring_track, starter_track};
pub use location_table::{LocationRecord, LocationTable};
pub use tile::{ArcTile, LineTile, Tile, TileDescriptor};
pub use track::{Track, DEFAULT_LANE_WIDTH};
