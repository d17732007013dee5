use crate::geometry::geo_enums::Side;
use crate::geometry::primitives::{Edge, Point};

/// Infinite line passing through two distinct points, oriented from `start` to `end`
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Line { start, end }
    }

    /// Line through `p` along `direction`, defined by the two points `p ∓ direction * extent`.
    pub fn through(p: Point, direction: Point, extent: f64) -> Self {
        Line {
            start: p - direction * extent,
            end: p + direction * extent,
        }
    }

    pub fn direction(&self) -> Point {
        self.end - self.start
    }

    /// Signed area of the parallelogram spanned by the line direction and `start -> point`.
    /// Positive when `point` lies to the left of the line.
    pub fn cross(&self, point: &Point) -> f64 {
        self.direction().cross(&(*point - self.start))
    }

    /// Classifies `point` relative to the line. Points exactly on the line are [`Side::Right`].
    pub fn side_of(&self, point: &Point) -> Side {
        match self.cross(point) > 0.0 {
            true => Side::Left,
            false => Side::Right,
        }
    }

    /// Intersection of this infinite line with the finite segment `edge`.
    /// Returns `None` for parallel lines or when the intersection lies outside the segment.
    pub fn intersect_segment(&self, edge: &Edge) -> Option<Point> {
        //based on: https://en.wikipedia.org/wiki/Line%E2%80%93line_intersection#Given_two_points_on_each_line_segment
        let Point(x1, y1) = self.start;
        let Point(x2, y2) = self.end;
        let Point(x3, y3) = edge.start;
        let Point(x4, y4) = edge.end;

        let denom = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
        if denom == 0.0 {
            //parallel
            return None;
        }
        let ua = ((x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3)) / denom;
        let ub = ((x2 - x1) * (y1 - y3) - (y2 - y1) * (x1 - x3)) / denom;

        match (0.0..=1.0).contains(&ub) {
            true => Some(Point(x1 + ua * (x2 - x1), y1 + ua * (y2 - y1))),
            false => None,
        }
    }
}
