//! JSON renderers for the track model and location table.

use serde::Serialize;
use trackforge_core::{BoundingBox, Error, Result};
use trackforge_track::{LocationRecord, LocationTable, TileDescriptor, Track};

#[derive(Debug, Serialize)]
struct TrackDocument {
    print_box: BoundingBox,
    lane_width: f64,
    closed: bool,
    total_length: f64,
    tiles: Vec<TileDescriptor>,
}

#[derive(Debug, Serialize)]
struct LocationDocument<'a> {
    print_box: BoundingBox,
    locations: &'a [LocationRecord],
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::other(format!("JSON serialization failed: {e}")))
}

/// Renders the track as a JSON document of tile descriptors.
pub fn render_track_json(print_box: &BoundingBox, track: &Track) -> Result<String> {
    let doc = TrackDocument {
        print_box: *print_box,
        lane_width: track.lane_width(),
        closed: track.is_closed(1e-6),
        total_length: track.total_length(),
        tiles: track.tiles().iter().map(|t| t.descriptor()).collect(),
    };
    to_json(&doc)
}

/// Renders the location table as a JSON document.
pub fn render_location_json(print_box: &BoundingBox, table: &LocationTable) -> Result<String> {
    let doc = LocationDocument {
        print_box: *print_box,
        locations: table.records(),
    };
    to_json(&doc)
}
