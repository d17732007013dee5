use log::trace;

use crate::geometry::geo_enums::Side;
use crate::geometry::primitives::{Edge, Line, Point, Rect};

/// Arithmetic mean of all vertices. `points` must not be empty.
pub fn centroid(points: &[Point]) -> Point {
    debug_assert!(!points.is_empty(), "centroid of an empty point set");
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.0, sy + p.1));
    Point(sx / n, sy / n)
}

/// Axis-aligned bounding box of `points`.
pub fn bounds(points: &[Point]) -> Rect {
    let (mut x_min, mut y_min) = (f64::INFINITY, f64::INFINITY);
    let (mut x_max, mut y_max) = (f64::NEG_INFINITY, f64::NEG_INFINITY);

    for point in points {
        x_min = x_min.min(point.0);
        y_min = y_min.min(point.1);
        x_max = x_max.max(point.0);
        y_max = y_max.max(point.1);
    }
    Rect {
        x_min,
        y_min,
        x_max,
        y_max,
    }
}

/// True if `p` lies strictly to the left of the infinite line `a -> b`.
/// Points on the line are not considered left.
pub fn is_left(a: Point, b: Point, p: Point) -> bool {
    Line::new(a, b).side_of(&p) == Side::Left
}

/// Intersection of the infinite line through `line_a` and `line_b` with the segment `seg_a -> seg_b`.
pub fn intersect_infinite_with_segment(
    line_a: Point,
    line_b: Point,
    seg_a: Point,
    seg_b: Point,
) -> Option<Point> {
    Line::new(line_a, line_b).intersect_segment(&Edge::new(seg_a, seg_b))
}

/// Bisects the closed outline `points` with the infinite line `line_a -> line_b`.
///
/// Every vertex is assigned to the half on its side of the line, and every crossing of an edge
/// with the line is appended to both halves, stitching the seam into each boundary.
/// Returns `(left, right)`, or `None` if either half ends up with fewer than 3 distinct points.
pub fn slice_polygon(
    points: &[Point],
    line_a: Point,
    line_b: Point,
) -> Option<(Vec<Point>, Vec<Point>)> {
    let line = Line::new(line_a, line_b);
    let n = points.len();

    let mut left = Vec::with_capacity(n + 2);
    let mut right = Vec::with_capacity(n + 2);

    for i in 0..n {
        let current = points[i];
        let next = points[(i + 1) % n];

        match line.side_of(&current) {
            Side::Left => left.push(current),
            Side::Right => right.push(current),
        }

        if let Some(x) = line.intersect_segment(&Edge::new(current, next)) {
            left.push(x);
            right.push(x);
        }
    }

    dedup_closed(&mut left);
    dedup_closed(&mut right);

    trace!(
        "sliced {} points into {} (left) and {} (right)",
        n,
        left.len(),
        right.len()
    );

    match left.len() < 3 || right.len() < 3 {
        true => None,
        false => Some((left, right)),
    }
}

/// Collapses runs of coincident vertices in a closed outline, including the wrap-around pair.
/// A cut passing exactly through a vertex reports that vertex for both adjacent edges.
fn dedup_closed(points: &mut Vec<Point>) {
    points.dedup_by(|a, b| a.almost_eq(b));
    while points.len() > 1 && points[0].almost_eq(&points[points.len() - 1]) {
        points.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    fn square() -> Vec<Point> {
        vec![Point(-1.0, -1.0), Point(1.0, -1.0), Point(1.0, 1.0), Point(-1.0, 1.0)]
    }

    #[test]
    fn centroid_is_vertex_mean() {
        let c = centroid(&[Point(0.0, 0.0), Point(4.0, 0.0), Point(4.0, 2.0)]);
        assert_approx_eq!(f64, c.0, 8.0 / 3.0);
        assert_approx_eq!(f64, c.1, 2.0 / 3.0);
    }

    #[test]
    fn bounds_of_square() {
        let b = bounds(&square());
        assert_eq!((b.x_min, b.y_min, b.x_max, b.y_max), (-1.0, -1.0, 1.0, 1.0));
        assert_approx_eq!(f64, b.width(), 2.0);
        assert_approx_eq!(f64, b.depth(), 2.0);
    }

    #[test]
    fn on_line_is_not_left() {
        let (a, b) = (Point(0.0, 0.0), Point(1.0, 0.0));
        assert!(is_left(a, b, Point(0.5, 1.0)));
        assert!(!is_left(a, b, Point(0.5, -1.0)));
        assert!(!is_left(a, b, Point(3.0, 0.0)));
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let x = intersect_infinite_with_segment(
            Point(0.0, 0.0),
            Point(1.0, 0.0),
            Point(0.0, 1.0),
            Point(5.0, 1.0),
        );
        assert_eq!(x, None);
    }

    #[test]
    fn intersection_must_lie_on_segment() {
        let (a, b) = (Point(0.0, 0.0), Point(0.0, 1.0));
        //the infinite line x = 0 misses the segment, but not its extension
        assert_eq!(
            intersect_infinite_with_segment(a, b, Point(1.0, 0.0), Point(2.0, 0.0)),
            None
        );
        let x = intersect_infinite_with_segment(a, b, Point(-1.0, 5.0), Point(1.0, 5.0)).unwrap();
        assert_approx_eq!(f64, x.0, 0.0);
        assert_approx_eq!(f64, x.1, 5.0);
    }

    #[test]
    fn line_outside_square_fails() {
        assert!(slice_polygon(&square(), Point(-10.0, 5.0), Point(10.0, 5.0)).is_none());
    }

    #[test]
    fn line_through_vertex_only_fails() {
        //touches the corner (1, 1) and nothing else
        assert!(slice_polygon(&square(), Point(0.0, 2.0), Point(2.0, 0.0)).is_none());
    }

    #[test]
    fn diagonal_cut_yields_two_triangles() {
        let (left, right) =
            slice_polygon(&square(), Point(-10.0, -10.0), Point(10.0, 10.0)).unwrap();
        assert_eq!(left.len(), 3);
        assert_eq!(right.len(), 3);
    }

    #[test]
    fn horizontal_cut_shares_seam_points() {
        let (left, right) = slice_polygon(&square(), Point(-10.0, 0.0), Point(10.0, 0.0)).unwrap();
        assert_eq!(left.len(), 4);
        assert_eq!(right.len(), 4);
        let seam = left.iter().filter(|p| right.contains(p)).count();
        assert_eq!(seam, 2);
        assert!(left.iter().all(|p| p.1 >= 0.0));
        assert!(right.iter().all(|p| p.1 <= 0.0));
    }
}
