#![allow(clippy::unwrap_used)]

use cable_infill::operations::offset::OffsetLines2D;
use cable_infill::operations::query::CableLength;
use cable_infill::operations::trace::TraceCable;
use cable_infill::{InfillEstimate, Point2, Segment};
use proptest::prelude::*;

fn boundary() -> impl Strategy<Value = Vec<Point2>> {
    prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), 2..8)
        .prop_map(|pts| pts.into_iter().map(|(x, y)| Point2::new(x, y)).collect())
}

fn segments() -> impl Strategy<Value = Vec<Segment>> {
    prop::collection::vec((-50.0..50.0f64, -50.0..50.0f64, -50.0..50.0f64, -50.0..50.0f64), 0..12)
        .prop_map(|v| {
            v.into_iter()
                .map(|(a, b, c, d)| Segment::new(Point2::new(a, b), Point2::new(c, d)))
                .collect()
        })
}

proptest! {
    #[test]
    fn length_is_finite_and_non_negative(pts in boundary(), radius in 0.5..20.0f64) {
        let lines = OffsetLines2D::new(&pts, radius).execute().unwrap();
        let cable = TraceCable::new(&lines).execute();
        let length = CableLength::new(&cable).execute();
        prop_assert!(length.is_finite());
        prop_assert!(length >= 0.0);
    }

    #[test]
    fn offset_lines_are_finite_and_parallel(pts in boundary(), radius in 0.5..20.0f64) {
        let lines = OffsetLines2D::new(&pts, radius).execute().unwrap();
        for line in &lines {
            prop_assert!(line.p1.x.is_finite() && line.p1.y.is_finite());
            prop_assert!(line.p2.x.is_finite() && line.p2.y.is_finite());
        }
    }

    #[test]
    fn trace_only_reuses_input_endpoints(lines in segments()) {
        let cable = TraceCable::new(&lines).execute();
        prop_assert_eq!(cable.len(), lines.len().saturating_sub(1));
        let endpoints: Vec<Point2> = lines.iter().flat_map(|l| [l.p1, l.p2]).collect();
        for seg in &cable {
            prop_assert!(endpoints.contains(&seg.p1));
            prop_assert!(endpoints.contains(&seg.p2));
        }
    }

    #[test]
    fn estimate_is_repeatable(
        x in 1.0..50.0f64,
        y in 1.0..50.0f64,
        radius in 0.5..10.0f64,
    ) {
        let data = format!("M0,0 L{x},0 L{x},{y} L0,{y} Z");
        let radii = [radius];
        let a = InfillEstimate::new(&data, &radii).execute();
        let b = InfillEstimate::new(&data, &radii).execute();
        prop_assert!(a.is_ok());
        prop_assert_eq!(a.ok(), b.ok());
    }
}
