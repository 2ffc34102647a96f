//! Vendor piece-id lookup tables.
//!
//! Each physical road piece in a vendor tile set maps to the geometry of its
//! lane centerline. Signed curve radii encode turn direction (positive =
//! left). The Drive and Overdrive sets use distinct ids and dimensions.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Lane geometry of one vendor road piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PieceGeometry {
    /// A straight segment of the given length in millimeters.
    Straight { length: f64 },
    /// A constant-radius curve; radius and sweep share their sign.
    Curve { radius: f64, sweep: f64 },
}

impl PieceGeometry {
    /// The geometry mirrored across the direction of travel (left curves
    /// become right curves). Straights are unaffected.
    pub fn reversed(self) -> Self {
        match self {
            PieceGeometry::Straight { length } => PieceGeometry::Straight { length },
            PieceGeometry::Curve { radius, sweep } => PieceGeometry::Curve {
                radius: -radius,
                sweep: -sweep,
            },
        }
    }
}

/// Anki Drive piece set.
pub fn drive_piece(id: u32) -> Option<PieceGeometry> {
    let geometry = match id {
        // Start/finish straight and the plain straight share dimensions.
        0 | 1 => PieceGeometry::Straight { length: 560.0 },
        2 => PieceGeometry::Curve {
            radius: 210.0,
            sweep: FRAC_PI_2,
        },
        3 => PieceGeometry::Curve {
            radius: -210.0,
            sweep: -FRAC_PI_2,
        },
        4 => PieceGeometry::Straight { length: 280.0 },
        5 => PieceGeometry::Curve {
            radius: 420.0,
            sweep: FRAC_PI_4,
        },
        6 => PieceGeometry::Curve {
            radius: -420.0,
            sweep: -FRAC_PI_4,
        },
        _ => return None,
    };
    Some(geometry)
}

/// Anki Overdrive modular piece set.
pub fn overdrive_piece(id: u32) -> Option<PieceGeometry> {
    let geometry = match id {
        17 | 33 => PieceGeometry::Straight { length: 560.0 },
        18 => PieceGeometry::Curve {
            radius: 280.0,
            sweep: FRAC_PI_2,
        },
        20 => PieceGeometry::Curve {
            radius: -280.0,
            sweep: -FRAC_PI_2,
        },
        23 => PieceGeometry::Straight { length: 280.0 },
        24 => PieceGeometry::Curve {
            radius: 560.0,
            sweep: FRAC_PI_4,
        },
        27 => PieceGeometry::Curve {
            radius: -560.0,
            sweep: -FRAC_PI_4,
        },
        _ => return None,
    };
    Some(geometry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_ids_have_no_geometry() {
        assert!(drive_piece(99).is_none());
        assert!(overdrive_piece(0).is_none());
    }

    #[test]
    fn test_reversed_flips_curve_direction_only() {
        let left = overdrive_piece(18).unwrap();
        match left.reversed() {
            PieceGeometry::Curve { radius, sweep } => {
                assert!(radius < 0.0);
                assert!(sweep < 0.0);
            }
            _ => panic!("curve reversed into a straight"),
        }
        let straight = overdrive_piece(17).unwrap();
        assert_eq!(straight.reversed(), straight);
    }
}
