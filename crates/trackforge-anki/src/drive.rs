//! Anki Drive map importer.
//!
//! Drive maps live under the app's base-station config directory. The file
//! is a whitespace-separated text format: a header line with the piece
//! count, then one `<piece_id> <theta>` record per piece, theta in radians.

use crate::convert::{assemble_track, locate_map_file, parse_field, split_fields, ResolvedPiece};
use crate::pieces::drive_piece;
use std::path::Path;
use tracing::info;
use trackforge_core::{ImportError, Result};
use trackforge_track::Track;

/// Location of Drive map files below the app-data root.
pub const DRIVE_MAP_SUBPATH: &str = "files/expansion/assets/resources/basestation/config";

#[derive(Debug, Clone, Copy)]
struct DrivePiece {
    id: u32,
    theta: f64,
    line: usize,
}

/// A parsed Anki Drive racing map.
#[derive(Debug, Clone)]
pub struct DriveMap {
    pieces: Vec<DrivePiece>,
}

impl DriveMap {
    /// Locates and parses a Drive map file under the app-data root.
    pub fn load(appdata: &Path, file_name: &str) -> Result<Self> {
        let path = locate_map_file(appdata, DRIVE_MAP_SUBPATH, file_name)?;
        let text = std::fs::read_to_string(&path).map_err(|e| ImportError::Io {
            reason: e.to_string(),
        })?;
        let map = Self::parse(&text)?;
        info!(
            path = %path.display(),
            pieces = map.pieces.len(),
            "loaded Anki Drive map"
        );
        Ok(map)
    }

    /// Parses the Drive record format from text.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty());

        let (header_line, header) = lines.next().ok_or(ImportError::Malformed {
            line: 1,
            reason: "missing header line".to_string(),
        })?;
        let expected: usize = parse_field(header, "piece count", header_line)?;

        let mut pieces = Vec::with_capacity(expected);
        for (line_number, line) in lines.by_ref().take(expected) {
            let fields = split_fields(line, line_number, 2)?;
            pieces.push(DrivePiece {
                id: parse_field(fields[0], "piece id", line_number)?,
                theta: parse_field(fields[1], "theta", line_number)?,
                line: line_number,
            });
        }
        if pieces.len() != expected {
            return Err(ImportError::Truncated {
                expected,
                found: pieces.len(),
            }
            .into());
        }
        if let Some((line_number, _)) = lines.next() {
            return Err(ImportError::Malformed {
                line: line_number,
                reason: format!("header declares {expected} pieces but more records follow"),
            }
            .into());
        }
        Ok(Self { pieces })
    }

    /// Number of parsed pieces.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Forces every piece's theta to zero, discarding the vendor defaults.
    pub fn reset_theta(&mut self) {
        for piece in &mut self.pieces {
            piece.theta = 0.0;
        }
    }

    /// Converts the parsed pieces into a connected track, then rotates the
    /// whole track about the origin by `rotation` radians.
    pub fn convert(&self, rotation: f64) -> Result<Track> {
        let mut resolved = Vec::with_capacity(self.pieces.len());
        for piece in &self.pieces {
            let geometry =
                drive_piece(piece.id).ok_or(ImportError::UnknownPiece {
                    id: piece.id,
                    line: piece.line,
                })?;
            resolved.push(ResolvedPiece {
                geometry,
                theta: piece.theta,
                line: piece.line,
            });
        }
        assemble_track(&resolved, rotation)
    }
}
