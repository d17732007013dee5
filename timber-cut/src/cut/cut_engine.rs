use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::{Catalog, Piece, PieceKey};
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Line, Point, Polygon, Rect};
use crate::util::{CutConfig, assertions};

/// A saw pass at a world-space (x, z) point with the blade rotated by `rotation` radians.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct CutRequest {
    pub x: f64,
    pub z: f64,
    pub rotation: f64,
}

impl CutRequest {
    pub fn point(&self) -> Point {
        Point(self.x, self.z)
    }

    /// Unit normal of the blade: the direction the two halves are pushed apart in.
    pub fn blade_normal(&self) -> Point {
        Point(self.rotation.sin(), self.rotation.cos())
    }

    /// Unit direction of the cut line, perpendicular to the blade normal.
    pub fn cut_direction(&self) -> Point {
        Point(self.rotation.cos(), -self.rotation.sin())
    }
}

/// Reasons a cut leaves the catalog untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CutError {
    /// The saw is not over any piece
    #[error("Missed!")]
    Miss,
    /// The cut line does not split the piece into two valid halves
    #[error("Cut failed!")]
    DegenerateCut,
}

/// Transient visual event at the location of a successful cut, consumed once by the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CutEffect {
    pub x: f64,
    pub z: f64,
    pub color: String,
}

/// Outcome of a successful cut.
#[derive(Clone, Debug, PartialEq)]
pub struct CutReport {
    /// Key of the piece that was cut (no longer in the catalog)
    pub removed: PieceKey,
    /// Keys of the two pieces that replaced it, in display order
    pub created: (PieceKey, PieceKey),
    pub effect: CutEffect,
}

/// Locates the piece under a saw pass and splits it in two.
#[derive(Clone, Copy, Debug, Default)]
pub struct CutEngine {
    pub config: CutConfig,
}

impl CutEngine {
    pub fn new(config: CutConfig) -> Self {
        CutEngine { config }
    }

    /// First piece, in display order, whose square hit region contains the world point `(x, z)`.
    /// The hit region is centered on the piece position, regardless of its actual outline.
    pub fn locate(&self, catalog: &Catalog, x: f64, z: f64) -> Option<PieceKey> {
        let point = Point(x, z);
        catalog
            .iter()
            .find(|(_, p)| Rect::square_around(p.position, self.config.hit_half_extent).contains_strict(&point))
            .map(|(k, _)| k)
    }

    /// Cuts the piece under `request`, replacing it by two separated halves.
    /// On error the catalog is left unchanged.
    pub fn cut(
        &self,
        catalog: &mut Catalog,
        request: &CutRequest,
        color: &str,
    ) -> Result<CutReport, CutError> {
        let Some(key) = self.locate(catalog, request.x, request.z) else {
            info!("[CUT] no piece under ({:.3}, {:.3})", request.x, request.z);
            return Err(CutError::Miss);
        };
        let target = catalog.get(key).ok_or(CutError::Miss)?;
        let (first, second) = self.split(target, request)?;

        let created = catalog
            .replace_with_pair(key, first, second)
            .ok_or(CutError::Miss)?;

        debug!(
            "[CUT] {key:?} split into {:?} and {:?} at ({:.3}, {:.3}), rotation {:.3}",
            created.0, created.1, request.x, request.z, request.rotation
        );

        Ok(CutReport {
            removed: key,
            created,
            effect: CutEffect {
                x: request.x,
                z: request.z,
                color: color.to_string(),
            },
        })
    }

    /// Computes the two pieces `target` is split into by `request`, without touching any catalog.
    pub fn split(&self, target: &Piece, request: &CutRequest) -> Result<(Piece, Piece), CutError> {
        //cut line in the piece's local frame
        let local_saw = request.point() - target.position;
        let line = Line::through(local_saw, request.cut_direction(), self.config.line_extent);

        let (left, right) = target
            .profile()
            .slice(&line)
            .ok_or(CutError::DegenerateCut)?;

        if !assertions::slice_conserves_area(target.profile(), &left, &right) {
            warn!("[CUT] slice of a non-convex outline does not conserve area");
        }

        let normal = request.blade_normal();
        let c_left = left.centroid();
        let c_right = right.centroid();

        //the half on the positive side of the normal moves along it, the other one against it
        let direction = match (c_left - local_saw).dot(&normal) > 0.0 {
            true => 1.0,
            false => -1.0,
        };
        let push = normal * (self.config.separation * direction);

        let kind = target.kind.after_cut();
        let make_half = |profile: Polygon, centroid: Point, push: Point| {
            let profile = profile.recentered();
            debug_assert!(assertions::is_recentered(&profile));
            Piece::try_new(
                profile,
                target.thickness(),
                target.position + centroid + push,
                kind,
            )
            .map_err(|_| CutError::DegenerateCut)
        };

        Ok((
            make_half(left, c_left, push)?,
            make_half(right, c_right, -push)?,
        ))
    }
}
