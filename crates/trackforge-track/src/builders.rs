//! Procedural track builders.
//!
//! Pure constructors for the built-in track shapes. Each returns a closed,
//! continuous loop assembled through the chaining appenders, so the
//! connectivity invariant holds by construction.

use crate::track::Track;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use trackforge_core::Pose;

/// Builds the starter oval: two 560 mm straights joined by two 180-degree
/// left curves of 210 mm radius.
pub fn starter_track() -> Track {
    let mut track = Track::new();
    track.append_line(560.0);
    track.append_arc(210.0, PI);
    track.append_line(560.0);
    track.append_arc(210.0, PI);
    track
}

/// Builds a circular ring track centered on the origin.
///
/// The lane centerline runs at `outer_radius`, divided into `segments` equal
/// arcs, and the lane is rendered `outer_radius - inner_radius` wide. The
/// loop closes exactly and its centerline extent is `2 * outer_radius` per
/// axis.
pub fn ring_track(inner_radius: f64, outer_radius: f64, segments: usize) -> Track {
    debug_assert!(segments >= 2, "a ring needs at least two arc segments");
    debug_assert!(
        inner_radius > 0.0 && outer_radius > inner_radius,
        "ring radii must satisfy 0 < inner < outer"
    );

    let start = Pose::new(outer_radius, 0.0, FRAC_PI_2);
    let mut track = Track::starting_at(start).with_lane_width(outer_radius - inner_radius);
    let sweep = TAU / segments as f64;
    for _ in 0..segments {
        track.append_arc(outer_radius, sweep);
    }
    track
}
