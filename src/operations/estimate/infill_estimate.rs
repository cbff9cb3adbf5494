use serde::Serialize;
use tracing::{debug, warn};

use crate::config::InfillConfig;
use crate::error::{EstimateError, InfillError, Result};
use crate::geometry::InsetSide;
use crate::operations::offset::{OffsetLines2D, DEFAULT_SPACING_MULTIPLIER};
use crate::operations::parse::ParsePathData;
use crate::operations::query::CableLength;
use crate::operations::trace::TraceCable;

/// Cable length computed for one spacing radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpacingLength {
    pub radius: f64,
    pub length: f64,
}

/// Mapping from spacing radius to total cable length, in request order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SpacingResult {
    entries: Vec<SpacingLength>,
}

impl SpacingResult {
    /// Records `length` for `radius`, replacing any earlier entry for the
    /// same radius in place.
    pub fn insert(&mut self, radius: f64, length: f64) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.radius.to_bits() == radius.to_bits())
        {
            Some(entry) => entry.length = length,
            None => self.entries.push(SpacingLength { radius, length }),
        }
    }

    /// Returns the length recorded for `radius`.
    #[must_use]
    pub fn get(&self, radius: f64) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.radius.to_bits() == radius.to_bits())
            .map(|e| e.length)
    }

    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &SpacingLength> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SpacingResult {
    type Item = &'a SpacingLength;
    type IntoIter = std::slice::Iter<'a, SpacingLength>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Estimates serpentine cable length for a region outlined by a path
/// description, once per spacing radius.
///
/// # Algorithm
///
/// 1. Parse the path description into a boundary polyline
/// 2. For each radius: generate offset lines, trace them into a cable run,
///    and sum its length
///
/// Radii are processed independently; the boundary is parsed once.
#[derive(Debug)]
pub struct InfillEstimate<'a> {
    path_data: &'a str,
    radii: &'a [f64],
    spacing_multiplier: f64,
    side: InsetSide,
}

impl<'a> InfillEstimate<'a> {
    /// Creates a new estimate with the default spacing multiplier and
    /// inset side.
    #[must_use]
    pub fn new(path_data: &'a str, radii: &'a [f64]) -> Self {
        Self {
            path_data,
            radii,
            spacing_multiplier: DEFAULT_SPACING_MULTIPLIER,
            side: InsetSide::default(),
        }
    }

    /// Creates an estimate using the radii, multiplier and inset side of `config`.
    #[must_use]
    pub fn from_config(path_data: &'a str, config: &'a InfillConfig) -> Self {
        Self::new(path_data, &config.radii)
            .with_spacing_multiplier(config.spacing_multiplier)
            .with_inset_side(config.inset_side)
    }

    #[must_use]
    pub fn with_spacing_multiplier(mut self, spacing_multiplier: f64) -> Self {
        self.spacing_multiplier = spacing_multiplier;
        self
    }

    #[must_use]
    pub fn with_inset_side(mut self, side: InsetSide) -> Self {
        self.side = side;
        self
    }

    /// Executes the estimate.
    ///
    /// Fails as a whole: either every requested radius has a length, or an
    /// error is returned.
    ///
    /// # Errors
    ///
    /// - `EstimateError::NoBoundaryFound` if the path description cannot be
    ///   parsed or yields no points
    /// - `GeometryError` if a radius or the spacing multiplier is invalid
    pub fn execute(&self) -> Result<SpacingResult> {
        let boundary = match ParsePathData::new(self.path_data).execute() {
            Ok(points) if !points.is_empty() => points,
            Ok(_) => return Err(no_boundary("path data contains no points".to_owned())),
            Err(err) => return Err(no_boundary(err.to_string())),
        };

        let mut result = SpacingResult::default();
        for &radius in self.radii {
            let lines = OffsetLines2D::new(&boundary, radius)
                .with_spacing_multiplier(self.spacing_multiplier)
                .with_inset_side(self.side)
                .execute()?;
            let cable = TraceCable::new(&lines).execute();
            let length = CableLength::new(&cable).execute();

            debug!(radius, lines = lines.len(), length, "estimated cable length");
            result.insert(radius, length);
        }

        Ok(result)
    }
}

fn no_boundary(reason: String) -> InfillError {
    warn!(%reason, "no boundary found");
    EstimateError::NoBoundaryFound { reason }.into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeometryError;
    use approx::assert_relative_eq;

    const SQUARE: &str = "M0,0 L10,0 L10,10 L0,10 Z";

    #[test]
    fn square_matches_manual_sum() {
        let result = InfillEstimate::new(SQUARE, &[2.0]).execute().unwrap();
        // Cable alternates between sqrt(10^2 + 4^2) and sqrt(2^2 + 6^2).
        let expected = 4.0 * 116.0_f64.sqrt() + 3.0 * 40.0_f64.sqrt();
        assert_relative_eq!(result.get(2.0).unwrap(), expected, epsilon = 1e-9);
    }

    #[test]
    fn one_entry_per_radius_in_order() {
        let result = InfillEstimate::new(SQUARE, &[2.0, 4.0, 1.0])
            .execute()
            .unwrap();
        let radii: Vec<f64> = result.iter().map(|e| e.radius).collect();
        assert_eq!(radii, vec![2.0, 4.0, 1.0]);
        // Radius 4: one line per edge (offset 4; 12 > 10), so 3 cable segments.
        assert!(result.get(4.0).unwrap() > 0.0);
    }

    #[test]
    fn duplicate_radius_kept_once() {
        let result = InfillEstimate::new(SQUARE, &[2.0, 2.0]).execute().unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn empty_radii_give_empty_result() {
        let result = InfillEstimate::new(SQUARE, &[]).execute().unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn curve_only_path_has_no_boundary() {
        let err = InfillEstimate::new("C1,1 2,2 3,3", &[2.0])
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            InfillError::Estimate(EstimateError::NoBoundaryFound { .. })
        ));
    }

    #[test]
    fn unparsable_path_has_no_boundary() {
        for data in ["", "M0,0 L1", "M0,0 Lx,y"] {
            let err = InfillEstimate::new(data, &[2.0]).execute().unwrap_err();
            assert!(
                matches!(
                    err,
                    InfillError::Estimate(EstimateError::NoBoundaryFound { .. })
                ),
                "unexpected error for {data:?}: {err}"
            );
        }
    }

    #[test]
    fn single_point_gives_zero_length() {
        let result = InfillEstimate::new("M5,5", &[1.0]).execute().unwrap();
        assert_relative_eq!(result.get(1.0).unwrap(), 0.0);
    }

    #[test]
    fn invalid_radius_fails_whole_call() {
        let err = InfillEstimate::new(SQUARE, &[2.0, 0.0])
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            InfillError::Geometry(GeometryError::NonPositive { .. })
        ));
    }

    #[test]
    fn vanishing_step_fails_instead_of_stalling() {
        let err = InfillEstimate::new("M0,0 L10,0", &[1.0])
            .with_spacing_multiplier(1e-17)
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            InfillError::Geometry(GeometryError::StepTooSmall { .. })
        ));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let radii = [0.7, 1.3, 2.0];
        let a = InfillEstimate::new(SQUARE, &radii).execute().unwrap();
        let b = InfillEstimate::new(SQUARE, &radii).execute().unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.length.to_bits(), y.length.to_bits());
        }
    }

    #[test]
    fn from_config_uses_config_values() {
        let config = InfillConfig {
            radii: vec![1.0],
            spacing_multiplier: 3.0,
            inset_side: InsetSide::Right,
        };
        let via_config = InfillEstimate::from_config(SQUARE, &config)
            .execute()
            .unwrap();
        let direct = InfillEstimate::new(SQUARE, &[1.0])
            .with_spacing_multiplier(3.0)
            .with_inset_side(InsetSide::Right)
            .execute()
            .unwrap();
        assert_eq!(via_config, direct);
    }

    #[test]
    fn serializes_as_list() {
        let mut result = SpacingResult::default();
        result.insert(2.0, 10.5);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"[{"radius":2.0,"length":10.5}]"#);
    }
}
