use crate::error::{GeometryError, Result};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Checks that both coordinates of `p` are finite.
///
/// # Errors
///
/// Returns `GeometryError::NonFinite` naming the first offending coordinate.
pub fn ensure_finite_point(p: &Point2) -> Result<()> {
    if !p.x.is_finite() {
        return Err(GeometryError::NonFinite {
            what: "x coordinate",
            value: p.x,
        }
        .into());
    }
    if !p.y.is_finite() {
        return Err(GeometryError::NonFinite {
            what: "y coordinate",
            value: p.y,
        }
        .into());
    }
    Ok(())
}

/// Checks that `value` is finite and strictly positive.
///
/// # Errors
///
/// Returns `GeometryError::NonFinite` or `GeometryError::NonPositive`.
pub fn ensure_positive(parameter: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(GeometryError::NonFinite {
            what: parameter,
            value,
        }
        .into());
    }
    if value <= 0.0 {
        return Err(GeometryError::NonPositive { parameter, value }.into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::InfillError;

    #[test]
    fn finite_point_accepted() {
        assert!(ensure_finite_point(&Point2::new(-3.5, 1e9)).is_ok());
    }

    #[test]
    fn nan_and_infinity_rejected() {
        let err = ensure_finite_point(&Point2::new(f64::NAN, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            InfillError::Geometry(GeometryError::NonFinite { what: "x coordinate", .. })
        ));
        let err = ensure_finite_point(&Point2::new(0.0, f64::INFINITY)).unwrap_err();
        assert!(matches!(
            err,
            InfillError::Geometry(GeometryError::NonFinite { what: "y coordinate", .. })
        ));
    }

    #[test]
    fn positive_checks() {
        assert!(ensure_positive("radius", 0.5).is_ok());
        assert!(matches!(
            ensure_positive("radius", 0.0),
            Err(InfillError::Geometry(GeometryError::NonPositive { .. }))
        ));
        assert!(matches!(
            ensure_positive("radius", -1.0),
            Err(InfillError::Geometry(GeometryError::NonPositive { .. }))
        ));
        assert!(matches!(
            ensure_positive("radius", f64::NAN),
            Err(InfillError::Geometry(GeometryError::NonFinite { .. }))
        ));
    }
}
