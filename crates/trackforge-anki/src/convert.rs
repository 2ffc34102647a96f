//! Shared piece-chain conversion.
//!
//! Converting a parsed map into a track is identical for both vendors once
//! each record has been resolved to a [`PieceGeometry`]: chain the pieces in
//! vendor order, then rotate the whole track about the origin.

use crate::pieces::PieceGeometry;
use std::path::{Path, PathBuf};
use tracing::warn;
use trackforge_core::{wrap_angle, ImportError, Pose, Result, POSE_EPSILON};
use trackforge_track::Track;

/// One record resolved against the vendor lookup table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedPiece {
    pub geometry: PieceGeometry,
    /// Vendor default rotation of the piece in radians.
    pub theta: f64,
    /// 1-based source line, for diagnostics.
    pub line: usize,
}

/// Chains resolved pieces into a track and applies the global rotation.
///
/// The first piece starts at the origin with its theta as heading; every
/// later piece continues from the previous end pose. A later piece whose
/// declared theta diverges from the chained heading is logged but not
/// rejected: the chained pose wins, since the vendor files routinely carry
/// stale thetas.
pub(crate) fn assemble_track(pieces: &[ResolvedPiece], rotation: f64) -> Result<Track> {
    let start_heading = pieces.first().map_or(0.0, |p| p.theta);
    let mut track = Track::starting_at(Pose::new(0.0, 0.0, start_heading));

    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            let chained = track.end_pose().heading;
            if wrap_angle(piece.theta - chained).abs() > POSE_EPSILON {
                warn!(
                    line = piece.line,
                    theta = piece.theta,
                    chained,
                    "piece theta diverges from chained heading; using chained pose"
                );
            }
        }
        match piece.geometry {
            PieceGeometry::Straight { length } => track.append_line(length),
            PieceGeometry::Curve { radius, sweep } => track.append_arc(radius, sweep),
        }
    }

    track.rotate(rotation);
    Ok(track)
}

/// Resolves a map file path under the app-data root, failing with
/// [`ImportError::NotFound`] if it does not exist.
pub(crate) fn locate_map_file(
    appdata: &Path,
    subpath: &str,
    file_name: &str,
) -> std::result::Result<PathBuf, ImportError> {
    let path = appdata.join(subpath).join(file_name);
    if !path.is_file() {
        return Err(ImportError::NotFound {
            path: path.display().to_string(),
        });
    }
    Ok(path)
}

/// Splits a record line into whitespace-separated fields, checking the
/// expected field count.
pub(crate) fn split_fields(
    line: &str,
    line_number: usize,
    expected: usize,
) -> std::result::Result<Vec<&str>, ImportError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != expected {
        return Err(ImportError::Malformed {
            line: line_number,
            reason: format!("expected {} fields, found {}", expected, fields.len()),
        });
    }
    Ok(fields)
}

/// Parses one numeric field, reporting the field name on failure.
pub(crate) fn parse_field<T: std::str::FromStr>(
    value: &str,
    name: &str,
    line_number: usize,
) -> std::result::Result<T, ImportError> {
    value.parse::<T>().map_err(|_| ImportError::Malformed {
        line: line_number,
        reason: format!("invalid {name} value '{value}'"),
    })
}
