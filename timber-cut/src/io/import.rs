use anyhow::{Context, Result};
use log::debug;

use crate::entities::{Catalog, Piece};
use crate::geometry::primitives::{Point, Polygon};
use crate::io::ext_repr::ExtCatalog;

/// Builds a fresh [`Catalog`] from its external representation, validating every piece.
/// Pieces receive new keys.
pub fn import(ext_catalog: &ExtCatalog) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    for (i, ext_piece) in ext_catalog.pieces.iter().enumerate() {
        let points = ext_piece.points.iter().map(|&p| Point::from(p)).collect();
        let profile = Polygon::try_new(points).with_context(|| format!("invalid outline of piece #{}", i + 1))?;
        let piece = Piece::try_new(
            profile,
            ext_piece.thickness,
            ext_piece.position.into(),
            ext_piece.kind,
        )
        .with_context(|| format!("invalid piece #{}", i + 1))?;
        let key = catalog.insert(piece);
        if ext_piece.selected {
            catalog.select(Some(key));
        }
    }
    debug!("[IO] imported catalog with {} pieces", catalog.len());
    Ok(catalog)
}
