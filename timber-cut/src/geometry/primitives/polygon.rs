use anyhow::{Result, bail, ensure};
use itertools::Itertools;

use crate::geometry::geo_enums::Winding;
use crate::geometry::geo_traits::{CollidesWith, Shape, Translatable};
use crate::geometry::primitives::{Edge, Line, Point, Rect};
use crate::geometry::slice;
use crate::util::FPA;

/// Closed cross-sectional outline of a piece of lumber.
///
/// Invariants upheld by every constructor:
/// * at least 3 points, all finite
/// * non-zero area
/// * counterclockwise winding (clockwise input is reversed)
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn try_new(mut points: Vec<Point>) -> Result<Self> {
        ensure!(
            points.len() >= 3,
            "polygon must have at least 3 points, got {}",
            points.len()
        );
        ensure!(
            points.iter().all(|p| p.is_finite()),
            "polygon contains non-finite points: {points:?}"
        );

        match Polygon::calculate_signed_area(&points) {
            area if FPA(area).is_zero() => bail!("polygon has no area: {points:?}"),
            area if area < 0.0 => {
                //outlines are always stored counterclockwise (positive area)
                points.reverse();
            }
            _ => {}
        }

        Ok(Polygon { points })
    }

    /// Axis-aligned rectangle of `width` (x) by `depth` (y) centered on the origin.
    pub fn rectangle(width: f64, depth: f64) -> Result<Self> {
        let (hw, hd) = (width / 2.0, depth / 2.0);
        Polygon::try_new(vec![
            Point(-hw, -hd),
            Point(hw, -hd),
            Point(hw, hd),
            Point(-hw, hd),
        ])
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    pub fn get_edge(&self, i: usize) -> Edge {
        let j = (i + 1) % self.number_of_points();
        Edge::new(self.points[i], self.points[j])
    }

    pub fn edge_iter(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.number_of_points()).map(move |i| self.get_edge(i))
    }

    pub fn winding(&self) -> Winding {
        match Polygon::calculate_signed_area(&self.points) > 0.0 {
            true => Winding::CounterClockwise,
            false => Winding::Clockwise,
        }
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area
    pub fn calculate_signed_area(points: &[Point]) -> f64 {
        let sigma: f64 = points
            .iter()
            .circular_tuple_windows()
            .map(|(p_i, p_j)| p_i.cross(p_j))
            .sum();
        0.5 * sigma
    }

    /// Copy of `self` with every vertex expressed relative to the centroid.
    pub fn recentered(&self) -> Polygon {
        let c = self.centroid();
        self.translate_clone(-c)
    }

    /// Copy of `self` with every vertex scaled by `sx` along x and `sy` along y, relative to the origin.
    pub fn scaled(&self, sx: f64, sy: f64) -> Result<Polygon> {
        let points = self.points.iter().map(|p| Point(p.0 * sx, p.1 * sy)).collect_vec();
        Polygon::try_new(points)
    }

    /// Bisects `self` by the infinite `line`.
    /// Returns the halves left and right of the line, or `None` if the line does not
    /// split the polygon into two halves with an interior.
    pub fn slice(&self, line: &Line) -> Option<(Polygon, Polygon)> {
        let (left, right) = slice::slice_polygon(&self.points, line.start, line.end)?;
        match (Polygon::try_new(left), Polygon::try_new(right)) {
            (Ok(left), Ok(right)) => Some((left, right)),
            _ => None,
        }
    }
}

impl Shape for Polygon {
    fn centroid(&self) -> Point {
        slice::centroid(&self.points)
    }

    fn area(&self) -> f64 {
        Polygon::calculate_signed_area(&self.points).abs()
    }

    fn bbox(&self) -> Rect {
        slice::bounds(&self.points)
    }
}

impl Translatable for Polygon {
    fn translate(&mut self, d: Point) -> &mut Self {
        self.points.iter_mut().for_each(|p| {
            p.translate(d);
        });
        self
    }
}

impl CollidesWith<Point> for Polygon {
    fn collides_with(&self, point: &Point) -> bool {
        if !self.bbox().collides_with(point) {
            return false;
        }
        //ray casting towards +x, counting crossings
        let Point(x, y) = *point;
        self.edge_iter()
            .filter(|e| (e.start.1 > y) != (e.end.1 > y))
            .filter(|e| {
                let t = (y - e.start.1) / (e.end.1 - e.start.1);
                x < e.start.0 + t * (e.end.0 - e.start.0)
            })
            .count()
            % 2
            == 1
    }
}
