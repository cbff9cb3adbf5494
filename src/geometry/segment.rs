use crate::math::{Point2, Vector2};

/// A directed line segment from `p1` to `p2`.
///
/// Used both for offset lines (parallel to a boundary edge) and for the
/// cable segments that connect them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p1: Point2,
    pub p2: Point2,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// Euclidean distance between the endpoints.
    #[must_use]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.p1, &self.p2)
    }

    /// Returns the vector from `p1` to `p2`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.p2 - self.p1
    }

    /// Returns this segment with both endpoints moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vector2) -> Self {
        Self {
            p1: self.p1 + offset,
            p2: self.p2 + offset,
        }
    }
}
