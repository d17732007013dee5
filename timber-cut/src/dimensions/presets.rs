use anyhow::{Context, Result, bail};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::dimensions::units;
use crate::entities::{Catalog, PieceKey, PieceKind, StandardSize};
use crate::geometry::primitives::Polygon;
use crate::util::SawmillConfig;

/// Width of the canonical profile, in local units
const CANONICAL_WIDTH: f64 = 2.0;
/// Depth (length) of the canonical profile, in local units
const CANONICAL_DEPTH: f64 = 4.0;

/// Canonical shapes a piece can be reset to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapePreset {
    Plank,
    Log,
}

impl ShapePreset {
    pub fn kind(self) -> PieceKind {
        match self {
            ShapePreset::Plank => PieceKind::Plank,
            ShapePreset::Log => PieceKind::Log,
        }
    }
}

/// Axis a dimension edit applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimAxis {
    /// Local y-axis
    Length,
    /// Local x-axis
    Width,
    Thickness,
}

impl DimAxis {
    /// Converts a user-facing value (feet for length, inches otherwise) to local units.
    pub fn to_local(self, display_value: f64) -> f64 {
        match self {
            DimAxis::Length => units::feet_to_length(display_value),
            DimAxis::Width => units::inches_to_width(display_value),
            DimAxis::Thickness => units::inches_to_thickness(display_value),
        }
    }
}

/// Replaces the profile and thickness of a piece with the canonical shape of `preset`,
/// discarding any previous cuts.
pub fn apply_shape_preset(
    catalog: &mut Catalog,
    key: PieceKey,
    preset: ShapePreset,
    config: &SawmillConfig,
) -> Result<()> {
    let piece = catalog.get_mut(key).context("no piece to apply shape preset to")?;
    let thickness = match preset {
        ShapePreset::Plank => config.plank_thickness,
        ShapePreset::Log => config.log_thickness,
    };
    piece.set_profile(Polygon::rectangle(CANONICAL_WIDTH, CANONICAL_DEPTH)?);
    piece.set_thickness(thickness)?;
    piece.kind = preset.kind();
    debug!("[DIM] applied {preset:?} preset to {key:?}");
    Ok(())
}

/// Resizes a piece to a nominal lumber size, keeping its current length. The piece becomes a plank.
pub fn apply_size_preset(catalog: &mut Catalog, key: PieceKey, size: &StandardSize) -> Result<()> {
    let piece = catalog.get_mut(key).context("no piece to apply size preset to")?;
    let width = units::inches_to_width(size.width_in);
    let thickness = units::inches_to_thickness(size.thickness_in);
    let length = match piece.bounds().depth() {
        d if d > 0.0 => d,
        _ => CANONICAL_DEPTH,
    };
    piece.set_profile(Polygon::rectangle(width, length)?);
    piece.set_thickness(thickness)?;
    piece.kind = PieceKind::Plank;
    debug!("[DIM] applied {} preset to {key:?}", size.label);
    Ok(())
}

/// Sets one dimension of a piece to `value` (in local units).
///
/// Thickness is set directly. Width and length rescale every vertex along the corresponding
/// axis by the ratio of `value` to the current bound; a (near) zero bound counts as 1.
/// Validating `value` is up to the caller.
pub fn set_dimension(catalog: &mut Catalog, key: PieceKey, axis: DimAxis, value: f64) -> Result<()> {
    let piece = catalog.get_mut(key).context("no piece to resize")?;
    let bounds = piece.bounds();
    let non_zero = |b: f64| if b.abs() < f64::EPSILON { 1.0 } else { b };

    let (sx, sy) = match axis {
        DimAxis::Thickness => return piece.set_thickness(value),
        DimAxis::Width => (value / non_zero(bounds.width()), 1.0),
        DimAxis::Length => (1.0, value / non_zero(bounds.depth())),
    };
    if !(sx.is_finite() && sy.is_finite()) || sx <= 0.0 || sy <= 0.0 {
        bail!("cannot scale {axis:?} to {value}");
    }
    let profile = piece.profile().scaled(sx, sy)?;
    piece.set_profile(profile);
    Ok(())
}
