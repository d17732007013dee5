use itertools::Itertools;

use crate::entities::Catalog;
use crate::geometry::geo_enums::Winding;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Polygon;
use crate::util::FPA;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// Display order and storage refer to exactly the same set of pieces.
pub fn catalog_is_consistent(catalog: &Catalog) -> bool {
    let order = catalog.order();
    order.len() == catalog.storage().len()
        && order.iter().all_unique()
        && order.iter().all(|k| catalog.storage().contains_key(*k))
}

/// The two halves of a slice cover the original outline: areas add up and winding is preserved.
/// Only guaranteed for convex outlines.
pub fn slice_conserves_area(original: &Polygon, left: &Polygon, right: &Polygon) -> bool {
    FPA(original.area()) == FPA(left.area() + right.area())
        && left.winding() == Winding::CounterClockwise
        && right.winding() == Winding::CounterClockwise
}

/// Centroid of the polygon coincides with the origin of its frame,
/// within a tolerance proportional to the extent of the polygon.
pub fn is_recentered(polygon: &Polygon) -> bool {
    let c = polygon.centroid();
    let bbox = polygon.bbox();
    let tolerance = FPA::EPSILON * bbox.width().max(bbox.depth()).max(1.0);
    c.0.abs() <= tolerance && c.1.abs() <= tolerance
}
