use serde::{Deserialize, Serialize};

use crate::math::Vector2;

/// Which side of a boundary edge, relative to its walking direction,
/// offset lines are placed on.
///
/// For a counter-clockwise boundary (y up) the interior is on the left;
/// for a clockwise one it is on the right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsetSide {
    /// Normal `(-dy, dx) / len`.
    #[default]
    Left,
    /// Normal `(dy, -dx) / len`.
    Right,
}

impl InsetSide {
    /// Returns the unit normal for an edge with direction `(dx, dy)` and
    /// length `len`. `len` must be non-zero.
    #[must_use]
    pub fn unit_normal(self, dx: f64, dy: f64, len: f64) -> Vector2 {
        match self {
            Self::Left => Vector2::new(-dy / len, dx / len),
            Self::Right => Vector2::new(dy / len, -dx / len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn left_normal_of_positive_x_points_up() {
        let n = InsetSide::Left.unit_normal(10.0, 0.0, 10.0);
        assert_relative_eq!(n.x, 0.0);
        assert_relative_eq!(n.y, 1.0);
    }

    #[test]
    fn right_is_opposite_of_left() {
        let l = InsetSide::Left.unit_normal(3.0, 4.0, 5.0);
        let r = InsetSide::Right.unit_normal(3.0, 4.0, 5.0);
        assert_relative_eq!(l.x, -r.x);
        assert_relative_eq!(l.y, -r.y);
        assert_relative_eq!(l.norm(), 1.0);
    }

    #[test]
    fn default_is_left() {
        assert_eq!(InsetSide::default(), InsetSide::Left);
    }
}
