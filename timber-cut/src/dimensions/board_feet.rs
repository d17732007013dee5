use serde::{Deserialize, Serialize};

use crate::dimensions::units;
use crate::entities::{Catalog, Piece, PieceKind};

/// Board feet of a board: `(length_ft * width_in * thickness_in) / 12`.
/// No rounding is performed, callers format for display.
pub fn board_feet(length_ft: f64, width_in: f64, thickness_in: f64) -> f64 {
    (length_ft * width_in * thickness_in) / 12.0
}

/// Estimated price of all pieces in the catalog, floored to whole currency units.
///
/// The volume of each piece is approximated as `2 * thickness`, ignoring its width and length.
/// This intentionally diverges from [`board_feet`], which does use the full cross-section:
/// a displayed price and the displayed board feet are not proportional.
pub fn estimate_price(catalog: &Catalog, price_multiplier: f64, base_rate: f64) -> u64 {
    let volume_proxy: f64 = catalog.iter().map(|(_, p)| 2.0 * p.thickness()).sum();
    (volume_proxy * base_rate * price_multiplier).floor() as u64
}

/// User-facing dimensions of a piece, derived from its bounds and thickness.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length_ft: f64,
    pub width_in: f64,
    pub thickness_in: f64,
    pub board_feet: f64,
}

impl Dimensions {
    pub fn of(piece: &Piece) -> Self {
        let bounds = piece.bounds();
        let length_ft = units::length_to_feet(bounds.depth());
        let width_in = units::width_to_inches(bounds.width());
        let thickness_in = units::thickness_to_inches(piece.thickness());
        Dimensions {
            length_ft,
            width_in,
            thickness_in,
            board_feet: board_feet(length_ft, width_in, thickness_in),
        }
    }

    /// Cross dimension shown next to a piece: the diameter for logs, the width otherwise.
    pub fn label_width_in(piece: &Piece) -> f64 {
        match piece.kind {
            PieceKind::Log => units::thickness_to_inches(piece.thickness()),
            PieceKind::Plank | PieceKind::Custom => units::width_to_inches(piece.bounds().width()),
        }
    }
}
