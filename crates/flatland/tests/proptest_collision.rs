//! Property tests for shape overlap.

use flatland::{overlaps, BodyKind, DVec2, Shape, Size};
use proptest::prelude::*;

/// Finite coordinates on a coarse grid so boundary cases actually occur.
fn coord() -> impl Strategy<Value = f64> {
    (-400i32..400i32).prop_map(|v| v as f64 * 0.5)
}

fn extent() -> impl Strategy<Value = f64> {
    (1i32..200i32).prop_map(|v| v as f64 * 0.5)
}

fn shape() -> impl Strategy<Value = Shape> {
    (prop_oneof![Just(BodyKind::Box), Just(BodyKind::Circle)], extent(), extent())
        .prop_map(|(kind, w, h)| Shape::from_size(kind, Size::new(w, h)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2_000))]

    #[test]
    fn overlap_is_symmetric(
        a in shape(), ax in coord(), ay in coord(),
        b in shape(), bx in coord(), by in coord(),
    ) {
        let pa = DVec2::new(ax, ay);
        let pb = DVec2::new(bx, by);
        prop_assert_eq!(overlaps(&a, pa, &b, pb), overlaps(&b, pb, &a, pa));
    }

    #[test]
    fn shape_overlaps_itself(s in shape(), x in coord(), y in coord()) {
        let p = DVec2::new(x, y);
        prop_assert!(overlaps(&s, p, &s, p));
    }

    #[test]
    fn far_apart_never_overlap(a in shape(), b in shape(), x in coord(), y in coord()) {
        // Extents are below 100, so 500 units apart is always clear.
        let pa = DVec2::new(x, y);
        let pb = pa + DVec2::new(500.0, 0.0);
        prop_assert!(!overlaps(&a, pa, &b, pb));
    }

    #[test]
    fn touching_boxes_do_not_overlap(hw in extent(), hh in extent(), y in coord()) {
        let s = Shape::Box { half_width: hw, half_height: hh };
        let pa = DVec2::new(0.0, y);
        prop_assert!(!overlaps(&s, pa, &s, pa + DVec2::new(hw * 2.0, 0.0)));
        prop_assert!(overlaps(&s, pa, &s, pa + DVec2::new(hw * 2.0 - 0.25, 0.0)));
    }
}
