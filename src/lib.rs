//! # Trackforge
//!
//! Generates printable, tiled vector drawings of closed-loop racetracks,
//! either procedurally (built-in track shapes) or imported from Anki
//! Drive/Overdrive app data.
//!
//! ## Architecture
//!
//! Trackforge is organized as a workspace with multiple crates:
//!
//! 1. **trackforge-core** - Error taxonomy, 2D math, bounding boxes
//! 2. **trackforge-track** - Tile primitives, track assembly, location tables
//! 3. **trackforge-anki** - Anki Drive/Overdrive map importers
//! 4. **trackforge-layout** - Paper presets, page grids, crop-mark guides
//! 5. **trackforge-export** - SVG/JSON/CSV renderers
//! 6. **trackforge** - Main binary: CLI, logging, output file writing

pub mod cli;
pub mod run;

pub use cli::{Args, BuiltinTrack, RenderConfig, TrackSource};
pub use run::run;

pub use trackforge_core::{
    BoundingBox, ConfigError, Error, GeometryError, ImportError, Pose, Result, Vector2,
};
pub use trackforge_track::{LocationTable, Tile, Track};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output to stderr, keeping stdout free for CLI messages
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
