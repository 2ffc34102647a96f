//! Command-line interface and render configuration.
//!
//! The raw clap arguments are validated once into an immutable
//! [`RenderConfig`] that every core operation receives; no configuration
//! lives in process globals.

use clap::{ArgGroup, Parser};
use std::path::{Path, PathBuf};
use trackforge_core::{ConfigError, Result};
use trackforge_layout::{PaperFormat, TilingConfig};

/// Generate printable, tiled vector drawings of closed-loop racetracks.
#[derive(Parser, Debug, Clone)]
#[command(name = "trackforge", version)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["track", "import_drive", "import_overdrive"])
))]
pub struct Args {
    /// Name of a built-in track (starter, ring)
    #[arg(short, long)]
    pub track: Option<String>,

    /// Anki Drive map file to import from the app data
    /// (e.g. IntersecProduction_map.txt or oval32wide_8pc_map.txt)
    #[arg(short = 'i', long)]
    pub import_drive: Option<String>,

    /// Anki Overdrive map file to import from the app data
    /// (e.g. modular_gunner.txt or modular_capsule.txt)
    #[arg(short = 'j', long)]
    pub import_overdrive: Option<String>,

    /// Path to the app data of Anki's android Drive or Overdrive app
    /// (e.g. ~/com.anki.drive)
    #[arg(short = 'I', long, default_value = ".")]
    pub appdata: PathBuf,

    /// Prefix of output files
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Size of tiling (a3-landscape, a4-landscape, a3-portrait, a4-portrait,
    /// letter-landscape, letter-portrait, legal-landscape, legal-portrait,
    /// full)
    #[arg(short, long, default_value = "full")]
    pub size: String,

    /// Rotate imported Anki maps by the given number of degrees
    #[arg(short, long, default_value_t = 0.0)]
    pub rotate: f64,

    /// Import Anki Drive map by overriding default rotation with theta=0
    #[arg(short, long)]
    pub zero: bool,
}

/// A built-in procedural track shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinTrack {
    Starter,
    Ring,
}

/// Where the track geometry comes from.
#[derive(Debug, Clone)]
pub enum TrackSource {
    Builtin(BuiltinTrack),
    ImportDrive(String),
    ImportOverdrive(String),
}

/// Validated, immutable render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub source: TrackSource,
    pub appdata: PathBuf,
    /// Output file prefix; may contain a directory component.
    pub prefix: String,
    pub paper: PaperFormat,
    /// Global map rotation in radians.
    pub rotation: f64,
    /// Force theta=0 on Drive imports.
    pub zero_theta: bool,
    pub tiling: TilingConfig,
}

impl RenderConfig {
    /// Validates the raw arguments into a render configuration.
    pub fn from_args(args: Args) -> Result<Self> {
        let source = if let Some(name) = &args.track {
            match name.as_str() {
                "starter" => TrackSource::Builtin(BuiltinTrack::Starter),
                "ring" => TrackSource::Builtin(BuiltinTrack::Ring),
                other => {
                    return Err(ConfigError::InvalidTrackName {
                        name: other.to_string(),
                    }
                    .into())
                }
            }
        } else if let Some(file) = &args.import_drive {
            TrackSource::ImportDrive(file.clone())
        } else if let Some(file) = &args.import_overdrive {
            TrackSource::ImportOverdrive(file.clone())
        } else {
            // clap's ArgGroup guarantees one source is present.
            unreachable!("argument group enforces a track source")
        };

        if matches!(
            source,
            TrackSource::ImportDrive(_) | TrackSource::ImportOverdrive(_)
        ) && !args.appdata.is_dir()
        {
            return Err(ConfigError::AppDataNotADirectory {
                path: args.appdata.display().to_string(),
            }
            .into());
        }

        let paper: PaperFormat = args.size.parse().map_err(trackforge_core::Error::Config)?;

        let prefix = match args.prefix {
            Some(prefix) => prefix,
            None => default_prefix(&source),
        };

        Ok(Self {
            source,
            appdata: args.appdata,
            prefix,
            paper,
            rotation: args.rotate.to_radians(),
            zero_theta: args.zero,
            tiling: TilingConfig::default(),
        })
    }
}

/// Default output prefix: the track name, or the map file's stem.
fn default_prefix(source: &TrackSource) -> String {
    match source {
        TrackSource::Builtin(BuiltinTrack::Starter) => "starter".to_string(),
        TrackSource::Builtin(BuiltinTrack::Ring) => "ring".to_string(),
        TrackSource::ImportDrive(file) | TrackSource::ImportOverdrive(file) => Path::new(file)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "track".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_source_flags_are_exclusive() {
        let result = Args::try_parse_from([
            "trackforge",
            "--track",
            "ring",
            "--import-drive",
            "oval_map.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_a_source_is_required() {
        assert!(Args::try_parse_from(["trackforge"]).is_err());
    }

    #[test]
    fn test_builtin_track_config() {
        let args = Args::try_parse_from(["trackforge", "--track", "ring"]).unwrap();
        let config = RenderConfig::from_args(args).unwrap();
        assert!(matches!(
            config.source,
            TrackSource::Builtin(BuiltinTrack::Ring)
        ));
        assert_eq!(config.prefix, "ring");
        assert_eq!(config.paper, PaperFormat::Full);
        assert_eq!(config.rotation, 0.0);
    }

    #[test]
    fn test_unknown_track_name_is_config_error() {
        let args = Args::try_parse_from(["trackforge", "--track", "moebius"]).unwrap();
        let err = RenderConfig::from_args(args).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_unknown_size_is_config_error() {
        let args =
            Args::try_parse_from(["trackforge", "--track", "ring", "--size", "a5-portrait"])
                .unwrap();
        let err = RenderConfig::from_args(args).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_import_prefix_defaults_to_file_stem() {
        let args = Args::try_parse_from([
            "trackforge",
            "--import-drive",
            "oval32wide_8pc_map.txt",
            "--appdata",
            ".",
        ])
        .unwrap();
        let config = RenderConfig::from_args(args).unwrap();
        assert_eq!(config.prefix, "oval32wide_8pc_map");
    }

    #[test]
    fn test_rotation_is_converted_to_radians() {
        let args =
            Args::try_parse_from(["trackforge", "--track", "ring", "--rotate", "180"]).unwrap();
        let config = RenderConfig::from_args(args).unwrap();
        assert!((config.rotation - std::f64::consts::PI).abs() < 1e-12);
    }
}
