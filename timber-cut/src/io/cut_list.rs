use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::dimensions::{Dimensions, board_feet};
use crate::entities::Catalog;

pub const CUT_LIST_HEADER: &str = "ID,Type,Length (ft),Width (in),Thickness (in),Board Feet";

/// Suggested file name for a downloaded cut list
pub const CUT_LIST_FILE_NAME: &str = "timber_cut_list.csv";

/// One line of the cut list, with all values rounded to two decimals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CutListRow {
    pub label: String,
    pub kind: String,
    pub length_ft: f64,
    pub width_in: f64,
    pub thickness_in: f64,
    pub board_feet: f64,
}

impl CutListRow {
    fn to_csv(&self) -> String {
        format!(
            "{},{},{:.2},{:.2},{:.2},{:.2}",
            self.label, self.kind, self.length_ft, self.width_in, self.thickness_in, self.board_feet
        )
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// One row per piece, in display order, labelled `Piece #1`, `Piece #2`, ...
/// Board feet are computed from the rounded dimensions, so every row is consistent with itself.
pub fn cut_list(catalog: &Catalog) -> Vec<CutListRow> {
    catalog
        .iter()
        .enumerate()
        .map(|(i, (_, piece))| {
            let dims = Dimensions::of(piece);
            let (l, w, t) = (
                round2(dims.length_ft),
                round2(dims.width_in),
                round2(dims.thickness_in),
            );
            CutListRow {
                label: format!("Piece #{}", i + 1),
                kind: piece.kind.label().to_string(),
                length_ft: l,
                width_in: w,
                thickness_in: t,
                board_feet: round2(board_feet(l, w, t)),
            }
        })
        .collect()
}

/// The cut list as comma-separated text, header included.
pub fn cut_list_csv(catalog: &Catalog) -> String {
    rows_to_csv(&cut_list(catalog))
}

pub fn rows_to_csv(rows: &[CutListRow]) -> String {
    std::iter::once(CUT_LIST_HEADER.to_string())
        .chain(rows.iter().map(CutListRow::to_csv))
        .join("\n")
}
