use serde::{Deserialize, Serialize};

use crate::entities::PieceKind;

/// External representation of a [`Piece`](crate::entities::Piece).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPiece {
    /// Cross-section outline in the local frame, implicitly closed
    pub points: Vec<(f64, f64)>,
    /// Extrusion length, in local units
    pub thickness: f64,
    /// World-space (x, z) position
    pub position: (f64, f64),
    pub kind: PieceKind,
    /// Whether this piece is the explicitly selected one
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
}

/// External representation of a [`Catalog`](crate::entities::Catalog), pieces in display order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ExtCatalog {
    pub pieces: Vec<ExtPiece>,
}
