use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Point;

///Axis-aligned rectangle, used as the bounds of a cross-section
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// Square of half extent `half` centered at `center`
    pub fn square_around(center: Point, half: f64) -> Self {
        Rect {
            x_min: center.0 - half,
            y_min: center.1 - half,
            x_max: center.0 + half,
            y_max: center.1 + half,
        }
    }

    /// Extent along the local x-axis
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Extent along the local y-axis
    pub fn depth(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// True if `point` lies in the open interior (boundary excluded)
    pub fn contains_strict(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x > self.x_min && x < self.x_max && y > self.y_min && y < self.y_max
    }
}

impl CollidesWith<Point> for Rect {
    #[inline(always)]
    fn collides_with(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}
