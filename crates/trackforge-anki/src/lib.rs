//! # Trackforge Anki
//!
//! Importers for Anki Drive and Anki Overdrive app-data map files.
//!
//! Both vendors share the same pipeline: locate the map file under the
//! app-data root, parse its records into raw pieces, optionally normalize
//! the per-piece rotation, then convert the pieces into a connected tile
//! chain and apply a single global rotation. The two variants differ only in
//! their on-disk record layout and their piece-id lookup table.
//!
//! Any failure aborts the whole import; no partial track is ever usable.

pub mod convert;
pub mod drive;
pub mod overdrive;
pub mod pieces;

pub use drive::DriveMap;
pub use overdrive::OverdriveMap;
pub use pieces::PieceGeometry;
