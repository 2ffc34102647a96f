//! # Trackforge Layout
//!
//! Paper-tiling layout: subdivides a track's bounding box into a grid of
//! standard-paper-sized pages with overlap strips and crop-mark guides so
//! the printout can be physically reassembled.

pub mod paper;
pub mod tiling;

pub use paper::PaperFormat;
pub use tiling::{GuideLine, PageGrid, PageGuides, PageLabel, TilingConfig};
