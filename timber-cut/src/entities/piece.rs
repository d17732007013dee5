use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Point, Polygon, Rect};

new_key_type! {
    /// Unique key identifying a [`Piece`] within a [`Catalog`](crate::entities::Catalog).
    pub struct PieceKey;
}

/// Kind of lumber a piece represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    /// Rectangular board, extruded cross-section
    Plank,
    /// Round log, rendered as a cylinder whose diameter is the thickness
    Log,
    /// Anything that used to be a log before it was cut
    Custom,
}

impl PieceKind {
    /// Kind of the pieces produced by cutting a piece of this kind.
    /// A log is no longer round once cut.
    pub fn after_cut(self) -> PieceKind {
        match self {
            PieceKind::Log => PieceKind::Custom,
            kind => kind,
        }
    }

    /// Human-readable label used in the cut list
    pub fn label(self) -> &'static str {
        match self {
            PieceKind::Log => "Round Log",
            PieceKind::Plank | PieceKind::Custom => "Plank/Slab",
        }
    }
}

/// A piece of lumber: a cross-section [`Polygon`] extruded to a thickness, placed in the world.
#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    /// Cross-section outline, in the piece's local frame
    profile: Polygon,
    /// Extrusion length along the third axis, in local units
    thickness: f64,
    /// World-space (x, z) position of the local frame origin
    pub position: Point,
    pub kind: PieceKind,
}

impl Piece {
    pub fn try_new(profile: Polygon, thickness: f64, position: Point, kind: PieceKind) -> Result<Self> {
        ensure!(
            thickness.is_finite() && thickness > 0.0,
            "piece thickness must be positive, got {thickness}"
        );
        ensure!(
            position.is_finite(),
            "piece position must be finite, got {position:?}"
        );
        Ok(Piece {
            profile,
            thickness,
            position,
            kind,
        })
    }

    pub fn profile(&self) -> &Polygon {
        &self.profile
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Bounds of the cross-section in the local frame
    pub fn bounds(&self) -> Rect {
        self.profile.bbox()
    }

    /// Replaces the cross-section, keeping thickness and placement.
    pub fn set_profile(&mut self, profile: Polygon) {
        self.profile = profile;
    }

    pub fn set_thickness(&mut self, thickness: f64) -> Result<()> {
        ensure!(
            thickness.is_finite() && thickness > 0.0,
            "piece thickness must be positive, got {thickness}"
        );
        self.thickness = thickness;
        Ok(())
    }
}
