//! # Trackforge Export
//!
//! Renderers turning tracks, location tables, and page grids into SVG, JSON,
//! and CSV documents. All functions produce strings; writing files is the
//! binary's job, so the library stays side-effect-free.

pub mod csv;
pub mod json;
pub mod svg;

pub use csv::render_location_csv;
pub use json::{render_location_json, render_track_json};
pub use svg::{render_annotated_svg, render_clean_svg, render_page_svg};
