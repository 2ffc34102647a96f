//! Anki Overdrive map importer.
//!
//! Overdrive maps live under the app's `Maps` directory. The text format
//! carries a versioned header `<format_version> <piece_count>`, then one
//! `<piece_id> <flags> <theta>` record per piece. Flag bit 0 marks a piece
//! laid reversed, which mirrors a curve's turn direction.

use crate::convert::{assemble_track, locate_map_file, parse_field, split_fields, ResolvedPiece};
use crate::pieces::overdrive_piece;
use std::path::Path;
use tracing::info;
use trackforge_core::{ImportError, Result};
use trackforge_track::Track;

/// Location of Overdrive map files below the app-data root.
pub const OVERDRIVE_MAP_SUBPATH: &str = "files/Maps";

/// The only record-format version this importer understands.
pub const SUPPORTED_FORMAT_VERSION: u32 = 1;

const FLAG_REVERSED: u32 = 0x1;

#[derive(Debug, Clone, Copy)]
struct OverdrivePiece {
    id: u32,
    flags: u32,
    theta: f64,
    line: usize,
}

/// A parsed Anki Overdrive modular map.
#[derive(Debug, Clone)]
pub struct OverdriveMap {
    pieces: Vec<OverdrivePiece>,
}

impl OverdriveMap {
    /// Locates and parses an Overdrive map file under the app-data root.
    pub fn load(appdata: &Path, file_name: &str) -> Result<Self> {
        let path = locate_map_file(appdata, OVERDRIVE_MAP_SUBPATH, file_name)?;
        let text = std::fs::read_to_string(&path).map_err(|e| ImportError::Io {
            reason: e.to_string(),
        })?;
        let map = Self::parse(&text)?;
        info!(
            path = %path.display(),
            pieces = map.pieces.len(),
            "loaded Anki Overdrive map"
        );
        Ok(map)
    }

    /// Parses the Overdrive record format from text.
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
        let fields = split_fields(header, header_line, 2)?;
        let version: u32 = parse_field(fields[0], "format version", header_line)?;
        if version != SUPPORTED_FORMAT_VERSION {
            return Err(ImportError::UnsupportedVersion { version }.into());
        }
        let expected: usize = parse_field(fields[1], "piece count", header_line)?;

        let mut pieces = Vec::with_capacity(expected);
        for (line_number, line) in lines.by_ref().take(expected) {
            let fields = split_fields(line, line_number, 3)?;
            pieces.push(OverdrivePiece {
                id: parse_field(fields[0], "piece id", line_number)?,
                flags: parse_field(fields[1], "flags", line_number)?,
                theta: parse_field(fields[2], "theta", line_number)?,
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

    /// Converts the parsed pieces into a connected track, then rotates the
    /// whole track about the origin by `rotation` radians.
    pub fn convert(&self, rotation: f64) -> Result<Track> {
        let mut resolved = Vec::with_capacity(self.pieces.len());
        for piece in &self.pieces {
            let mut geometry =
                overdrive_piece(piece.id).ok_or(ImportError::UnknownPiece {
                    id: piece.id,
                    line: piece.line,
                })?;
            if piece.flags & FLAG_REVERSED != 0 {
                geometry = geometry.reversed();
            }
            resolved.push(ResolvedPiece {
                geometry,
                theta: piece.theta,
                line: piece.line,
            });
        }
        assemble_track(&resolved, rotation)
    }
}
