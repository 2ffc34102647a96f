//! Error handling for trackforge
//!
//! Provides error types for all layers of the application:
//! - Configuration errors (bad flags, unknown paper presets)
//! - Import errors (missing or malformed vendor map files)
//! - Geometry errors (broken tile chains, empty canvases)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Configuration error type
///
/// Represents errors in the render configuration assembled at the CLI
/// boundary. These are user-input problems and always fatal.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    /// Unknown paper format name
    #[error("Invalid tile size '{name}'")]
    InvalidPaperFormat {
        /// The paper format name that was not recognized.
        name: String,
    },

    /// Unknown built-in track name
    #[error("Invalid track name '{name}'. Track name must be one of 'starter' or 'ring'")]
    InvalidTrackName {
        /// The track name that was not recognized.
        name: String,
    },

    /// The app-data path does not exist or is not a directory
    #[error("Track repository path '{path}' is non-existent")]
    AppDataNotADirectory {
        /// The path that was expected to be a directory.
        path: String,
    },

    /// Paper dimension too small for the configured margins
    #[error("Paper dimension {dimension}mm does not exceed the combined margin {margin}mm")]
    PaperTooSmall {
        /// The offending paper dimension in millimeters.
        dimension: f64,
        /// The combined margin in millimeters.
        margin: f64,
    },
}

/// Import error type
///
/// Represents errors raised while locating, parsing, or converting a vendor
/// map file. Any import error aborts the whole import; no partial track is
/// ever handed downstream.
#[derive(Error, Debug, Clone)]
pub enum ImportError {
    /// Map file (or a parent directory) is missing
    #[error("Map file not found: {path}")]
    NotFound {
        /// The path that could not be resolved.
        path: String,
    },

    /// A record could not be decoded
    #[error("Malformed map record at line {line}: {reason}")]
    Malformed {
        /// The 1-based line number of the offending record.
        line: usize,
        /// The reason the record could not be decoded.
        reason: String,
    },

    /// The file ended before the declared number of records
    #[error("Truncated map file: expected {expected} pieces, found {found}")]
    Truncated {
        /// The piece count declared in the header.
        expected: usize,
        /// The number of pieces actually present.
        found: usize,
    },

    /// A piece id has no entry in the vendor lookup table
    #[error("Unknown piece id {id} at line {line}")]
    UnknownPiece {
        /// The vendor piece id without a geometry entry.
        id: u32,
        /// The 1-based line number referencing the piece.
        line: usize,
    },

    /// The map file declares an unsupported format version
    #[error("Unsupported map format version {version}")]
    UnsupportedVersion {
        /// The declared format version.
        version: u32,
    },

    /// I/O error while reading the map file
    #[error("I/O error reading map file: {reason}")]
    Io {
        /// The underlying I/O failure.
        reason: String,
    },
}

/// Geometry error type
///
/// Represents violations of the track model's structural invariants. These
/// indicate a construction bug upstream, not a user-input problem, and are
/// never recovered from.
#[derive(Error, Debug, Clone)]
pub enum GeometryError {
    /// A bounding box was requested from a track with no tiles
    #[error("Track has no tiles; cannot compute a canvas")]
    EmptyCanvas,

    /// A tile's declared start pose diverges from the chain's end pose
    #[error(
        "Tile {index} start pose ({x:.6}, {y:.6}, {heading:.6}) diverges from the chain end pose"
    )]
    DisconnectedTile {
        /// The index at which the tile would have been inserted.
        index: usize,
        /// The divergent start x coordinate.
        x: f64,
        /// The divergent start y coordinate.
        y: f64,
        /// The divergent start heading in radians.
        heading: f64,
    },
}

/// Main error type for trackforge
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Import error
    #[error(transparent)]
    Import(#[from] ImportError),

    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Check if this is an import error
    pub fn is_import_error(&self) -> bool {
        matches!(self, Error::Import(_))
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
