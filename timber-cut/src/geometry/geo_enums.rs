/// Side of an infinite [`Line`](crate::geometry::primitives::Line) a point lies on,
/// looking from its start towards its end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Strictly to the left (positive cross product)
    Left,
    /// To the right, or exactly on the line
    Right,
}

/// Winding order of a closed polygon outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}
