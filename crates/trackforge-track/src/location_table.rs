//! Named reference points derived from a completed track.
//!
//! The table is built once by walking the tile chain and is read-only
//! afterward; it does not retain the track.

use crate::track::Track;
use serde::{Deserialize, Serialize};
use trackforge_core::Pose;

/// One labeled reference point along the lane path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Zero-based record index.
    pub index: usize,
    /// Human-readable label, e.g. `segment-3` or `finish`.
    pub label: String,
    /// Pose of the reference point.
    pub pose: Pose,
    /// Cumulative lane path length at this point in millimeters.
    pub distance: f64,
}

/// A derived index of named reference points at tile boundaries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationTable {
    records: Vec<LocationRecord>,
}

impl LocationTable {
    /// Walks the track and records a reference point at every tile start
    /// plus a trailing `finish` record at the chain's end pose. For a closed
    /// loop the finish pose coincides with the first record.
    pub fn from_track(track: &Track) -> Self {
        let mut records = Vec::with_capacity(track.len() + 1);
        let mut distance = 0.0;
        for (i, tile) in track.tiles().iter().enumerate() {
            records.push(LocationRecord {
                index: i,
                label: format!("segment-{i}"),
                pose: tile.start_pose(),
                distance,
            });
            distance += tile.length();
        }
        if !track.is_empty() {
            records.push(LocationRecord {
                index: track.len(),
                label: "finish".to_string(),
                pose: track.end_pose(),
                distance,
            });
        }
        Self { records }
    }

    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
