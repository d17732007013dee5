use crate::entities::Catalog;
use crate::io::ext_repr::{ExtCatalog, ExtPiece};

/// Exports the catalog to its external representation.
pub fn export(catalog: &Catalog) -> ExtCatalog {
    let selected = catalog.selected_key();
    let pieces = catalog
        .iter()
        .map(|(key, piece)| ExtPiece {
            points: piece.profile().points().iter().map(|&p| p.into()).collect(),
            thickness: piece.thickness(),
            position: piece.position.into(),
            kind: piece.kind,
            selected: selected == Some(key),
        })
        .collect();
    ExtCatalog { pieces }
}
