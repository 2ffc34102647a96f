//! Paper size presets.

use std::str::FromStr;
use trackforge_core::{BoundingBox, ConfigError};

/// A named standard paper size/orientation, or `Full` for an exact-fit
/// single page the size of the track itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperFormat {
    A3Landscape,
    A4Landscape,
    A3Portrait,
    A4Portrait,
    LetterLandscape,
    LetterPortrait,
    LegalLandscape,
    LegalPortrait,
    Full,
}

impl PaperFormat {
    /// Paper dimensions (width, height) in millimeters. `Full` takes the
    /// track box's own extent, which always yields exactly one page.
    pub fn dimensions(&self, track_bb: &BoundingBox) -> (f64, f64) {
        match self {
            PaperFormat::A3Landscape => (420.0, 297.0),
            PaperFormat::A4Landscape => (297.0, 210.0),
            PaperFormat::A3Portrait => (297.0, 420.0),
            PaperFormat::A4Portrait => (210.0, 297.0),
            PaperFormat::LetterLandscape => (279.4, 215.9),
            PaperFormat::LetterPortrait => (215.9, 279.4),
            PaperFormat::LegalLandscape => (355.6, 215.9),
            PaperFormat::LegalPortrait => (215.9, 355.6),
            PaperFormat::Full => (track_bb.width(), track_bb.height()),
        }
    }

    /// The CLI name of the preset.
    pub fn name(&self) -> &'static str {
        match self {
            PaperFormat::A3Landscape => "a3-landscape",
            PaperFormat::A4Landscape => "a4-landscape",
            PaperFormat::A3Portrait => "a3-portrait",
            PaperFormat::A4Portrait => "a4-portrait",
            PaperFormat::LetterLandscape => "letter-landscape",
            PaperFormat::LetterPortrait => "letter-portrait",
            PaperFormat::LegalLandscape => "legal-landscape",
            PaperFormat::LegalPortrait => "legal-portrait",
            PaperFormat::Full => "full",
        }
    }
}

impl FromStr for PaperFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a3-landscape" => Ok(PaperFormat::A3Landscape),
            "a4-landscape" => Ok(PaperFormat::A4Landscape),
            "a3-portrait" => Ok(PaperFormat::A3Portrait),
            "a4-portrait" => Ok(PaperFormat::A4Portrait),
            "letter-landscape" => Ok(PaperFormat::LetterLandscape),
            "letter-portrait" => Ok(PaperFormat::LetterPortrait),
            "legal-landscape" => Ok(PaperFormat::LegalLandscape),
            "legal-portrait" => Ok(PaperFormat::LegalPortrait),
            "full" => Ok(PaperFormat::Full),
            other => Err(ConfigError::InvalidPaperFormat {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for name in [
            "a3-landscape",
            "a4-landscape",
            "a3-portrait",
            "a4-portrait",
            "letter-landscape",
            "letter-portrait",
            "legal-landscape",
            "legal-portrait",
            "full",
        ] {
            let format: PaperFormat = name.parse().unwrap();
            assert_eq!(format.name(), name);
        }
    }

    #[test]
    fn test_unknown_name_is_config_error() {
        let err = "a5-landscape".parse::<PaperFormat>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPaperFormat { .. }));
    }

    #[test]
    fn test_full_takes_track_extent() {
        let bb = BoundingBox::new(0.0, 500.0, 0.0, 300.0);
        assert_eq!(PaperFormat::Full.dimensions(&bb), (500.0, 300.0));
        assert_eq!(PaperFormat::A4Landscape.dimensions(&bb), (297.0, 210.0));
    }
}
