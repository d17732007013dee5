use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::Translatable;
use crate::util::FPA;

/// Geometric primitive representing a point (or a 2D vector)
#[derive(Debug, Clone, PartialEq, Copy, Default, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn dot(&self, other: &Point) -> f64 {
        self.0 * other.0 + self.1 * other.1
    }

    /// z-component of the 3D cross product of `self` and `other`
    pub fn cross(&self, other: &Point) -> f64 {
        self.0 * other.1 - self.1 * other.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }

    /// Equality within floating point tolerance
    pub fn almost_eq(&self, other: &Point) -> bool {
        FPA(self.0) == FPA(other.0) && FPA(self.1) == FPA(other.1)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point(self.0 * rhs, self.1 * rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point(-self.0, -self.1)
    }
}

impl Translatable for Point {
    fn translate(&mut self, d: Point) -> &mut Self {
        self.0 += d.0;
        self.1 += d.1;
        self
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}
