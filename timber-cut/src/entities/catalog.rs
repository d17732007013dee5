use log::debug;
use slotmap::SlotMap;

use crate::entities::{Piece, PieceKey};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Point;
use crate::util::assertions;

/// The ordered collection of pieces being edited in the configurator.
///
/// Display order is kept separately from storage, every inserted piece receives a fresh [`PieceKey`].
/// The selection is a weak reference: a stale or empty selection falls back to the first piece.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pieces: SlotMap<PieceKey, Piece>,
    order: Vec<PieceKey>,
    selected: Option<PieceKey>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Catalog containing a single piece
    pub fn with_piece(piece: Piece) -> Self {
        let mut catalog = Catalog::new();
        catalog.insert(piece);
        catalog
    }

    /// Appends a piece at the end of the display order and returns its key.
    pub fn insert(&mut self, piece: Piece) -> PieceKey {
        let key = self.pieces.insert(piece);
        self.order.push(key);
        debug_assert!(assertions::catalog_is_consistent(self));
        key
    }

    /// Removes a piece. Clears the selection if it pointed to the removed piece.
    pub fn remove(&mut self, key: PieceKey) -> Option<Piece> {
        let piece = self.pieces.remove(key)?;
        self.order.retain(|k| *k != key);
        if self.selected == Some(key) {
            self.selected = None;
        }
        debug_assert!(assertions::catalog_is_consistent(self));
        Some(piece)
    }

    /// Atomically replaces the piece at `key` by `first` and `second`, which take its place in the display order.
    /// Returns the keys of the new pieces, or `None` (leaving the catalog untouched) if `key` is absent.
    pub fn replace_with_pair(
        &mut self,
        key: PieceKey,
        first: Piece,
        second: Piece,
    ) -> Option<(PieceKey, PieceKey)> {
        let idx = self.index_of(key)?;
        self.pieces.remove(key);
        let k1 = self.pieces.insert(first);
        let k2 = self.pieces.insert(second);
        self.order.splice(idx..=idx, [k1, k2]);
        if self.selected == Some(key) {
            self.selected = None;
        }
        debug!("[CAT] replaced {key:?} by {k1:?} and {k2:?}");
        debug_assert!(assertions::catalog_is_consistent(self));
        Some((k1, k2))
    }

    /// Removes all pieces and inserts `piece` as the only one.
    pub fn reset(&mut self, piece: Piece) -> PieceKey {
        self.pieces.clear();
        self.order.clear();
        self.selected = None;
        self.insert(piece)
    }

    pub fn get(&self, key: PieceKey) -> Option<&Piece> {
        self.pieces.get(key)
    }

    pub fn get_mut(&mut self, key: PieceKey) -> Option<&mut Piece> {
        self.pieces.get_mut(key)
    }

    pub fn contains(&self, key: PieceKey) -> bool {
        self.pieces.contains_key(key)
    }

    /// Position of `key` in the display order
    pub fn index_of(&self, key: PieceKey) -> Option<usize> {
        self.order.iter().position(|k| *k == key)
    }

    /// Iterates over all pieces in display order
    pub fn iter(&self) -> impl Iterator<Item = (PieceKey, &Piece)> {
        self.order.iter().map(|&k| (k, &self.pieces[k]))
    }

    pub fn keys(&self) -> impl Iterator<Item = PieceKey> + '_ {
        self.order.iter().copied()
    }

    pub fn first_key(&self) -> Option<PieceKey> {
        self.order.first().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Selects a piece. Selecting a key that is not in the catalog clears the selection.
    pub fn select(&mut self, key: Option<PieceKey>) {
        self.selected = key.filter(|k| self.contains(*k));
    }

    /// The explicitly selected key, if it still refers to a piece
    pub fn selected_key(&self) -> Option<PieceKey> {
        self.selected.filter(|k| self.contains(*k))
    }

    /// Key of the piece edits apply to: the selection, or the first piece if nothing is selected.
    pub fn target_key(&self) -> Option<PieceKey> {
        self.selected_key().or_else(|| self.first_key())
    }

    /// The piece edits apply to, see [`Catalog::target_key`]
    pub fn selected(&self) -> Option<&Piece> {
        self.target_key().map(|k| &self.pieces[k])
    }

    /// First piece (in display order) whose cross-section, placed in the world, contains `point`.
    pub fn piece_at(&self, point: Point) -> Option<PieceKey> {
        self.iter()
            .find(|(_, p)| p.profile().collides_with(&(point - p.position)))
            .map(|(k, _)| k)
    }

    pub(crate) fn order(&self) -> &[PieceKey] {
        &self.order
    }

    pub(crate) fn storage(&self) -> &SlotMap<PieceKey, Piece> {
        &self.pieces
    }
}
