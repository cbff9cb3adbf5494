use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::geometry::{InsetSide, Segment};
use crate::math::{ensure_finite_point, ensure_positive, Point2};

/// Default step between successive offset lines, as a multiple of the radius.
pub const DEFAULT_SPACING_MULTIPLIER: f64 = 2.0;

/// Upper bound on the offset lines generated for a single edge.
pub const MAX_LINES_PER_EDGE: usize = 1_000_000;

/// Generates lines parallel to each boundary edge, inset by increasing
/// multiples of a spacing radius.
///
/// For every consecutive point pair `(p1, p2)` the edge is shifted along its
/// unit normal by `radius`, `radius + step`, `radius + 2 * step`, ... while
/// the shift stays strictly below the edge length, where
/// `step = radius * spacing_multiplier`.
///
/// The boundary is not implicitly closed: a closed outline must repeat its
/// first point at the end. Zero-length edges are skipped.
///
/// Output order is edge order, then increasing offset within an edge.
#[derive(Debug)]
pub struct OffsetLines2D<'a> {
    boundary: &'a [Point2],
    radius: f64,
    spacing_multiplier: f64,
    side: InsetSide,
}

impl<'a> OffsetLines2D<'a> {
    /// Creates a new offset-line generator with the default spacing
    /// multiplier and the left inset side.
    #[must_use]
    pub fn new(boundary: &'a [Point2], radius: f64) -> Self {
        Self {
            boundary,
            radius,
            spacing_multiplier: DEFAULT_SPACING_MULTIPLIER,
            side: InsetSide::default(),
        }
    }

    /// Sets the step between offset lines as a multiple of the radius.
    #[must_use]
    pub fn with_spacing_multiplier(mut self, spacing_multiplier: f64) -> Self {
        self.spacing_multiplier = spacing_multiplier;
        self
    }

    /// Sets which side of each edge the lines are placed on.
    #[must_use]
    pub fn with_inset_side(mut self, side: InsetSide) -> Self {
        self.side = side;
        self
    }

    /// Executes the generation.
    ///
    /// Boundaries with fewer than two points yield no lines.
    ///
    /// # Errors
    ///
    /// - `GeometryError::NonPositive` / `GeometryError::NonFinite` if the
    ///   radius or spacing multiplier is not a positive finite number
    /// - `GeometryError::StepTooSmall` if adding the step to the radius does
    ///   not change it in floating point
    /// - `GeometryError::NonFinite` if any boundary point is not finite
    /// - `GeometryError::TooManyLines` if an edge would need more than
    ///   [`MAX_LINES_PER_EDGE`] lines
    pub fn execute(&self) -> Result<Vec<Segment>> {
        ensure_positive("radius", self.radius)?;
        ensure_positive("spacing multiplier", self.spacing_multiplier)?;
        for p in self.boundary {
            ensure_finite_point(p)?;
        }

        let step = self.radius * self.spacing_multiplier;
        if self.radius + step <= self.radius {
            return Err(GeometryError::StepTooSmall {
                radius: self.radius,
                step,
            }
            .into());
        }

        let mut lines = Vec::new();
        if self.boundary.len() < 2 {
            return Ok(lines);
        }

        for (edge_idx, pair) in self.boundary.windows(2).enumerate() {
            let edge = Segment::new(pair[0], pair[1]);
            let dir = edge.direction();
            let length = dir.norm();

            if length <= 0.0 {
                trace!(edge = edge_idx, "zero-length edge skipped");
                continue;
            }

            let needed = ((length - self.radius) / step).ceil();
            if needed > count_as_f64(MAX_LINES_PER_EDGE) {
                return Err(GeometryError::TooManyLines {
                    edge: edge_idx,
                    needed,
                    limit: MAX_LINES_PER_EDGE,
                }
                .into());
            }

            let normal = self.side.unit_normal(dir.x, dir.y, length);

            // Offsets are `radius + k * step`; the counter bounds the loop.
            let mut k = 0usize;
            let mut offset = self.radius;
            while offset < length && k < MAX_LINES_PER_EDGE {
                lines.push(edge.translated(normal * offset));
                k += 1;
                offset = self.radius + count_as_f64(k) * step;
            }
        }

        debug!(
            radius = self.radius,
            edges = self.boundary.len() - 1,
            lines = lines.len(),
            "generated offset lines"
        );
        Ok(lines)
    }
}

/// Line counts stay far below 2^53, so the conversion is exact.
#[allow(clippy::cast_precision_loss)]
fn count_as_f64(n: usize) -> f64 {
    n as f64
}
