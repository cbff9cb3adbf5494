use crate::geometry::Segment;

/// Computes the total length of a cable run.
pub struct CableLength<'a> {
    segments: &'a [Segment],
}

impl<'a> CableLength<'a> {
    /// Creates a new `CableLength` query.
    #[must_use]
    pub fn new(segments: &'a [Segment]) -> Self {
        Self { segments }
    }

    /// Executes the query, returning the sum of segment lengths
    /// (`0.0` for no segments).
    #[must_use]
    pub fn execute(&self) -> f64 {
        self.segments.iter().map(Segment::length).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use approx::assert_relative_eq;

    #[test]
    fn empty_is_zero() {
        assert_relative_eq!(CableLength::new(&[]).execute(), 0.0);
    }

    #[test]
    fn sums_segment_lengths() {
        let segments = [
            Segment::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0)),
            Segment::new(Point2::new(3.0, 4.0), Point2::new(3.0, 5.0)),
        ];
        assert_relative_eq!(CableLength::new(&segments).execute(), 6.0);
    }
}
