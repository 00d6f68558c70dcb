use super::*;
use crate::constraint::{DoubleConstraint, LongConstraint};

#[test]
fn test_new_normalizes() {
    assert_eq!(NumericRangeSet::<i32>::new(None, None), NumericRangeSet::Unbounded);
    assert_eq!(NumericRangeSet::new(Some(2), Some(1)), NumericRangeSet::Empty);
    assert_eq!(
        NumericRangeSet::new(Some(1), Some(1)),
        NumericRangeSet::Bounded {
            min: Some(1),
            max: Some(1)
        }
    );
    assert!(NumericRangeSet::<f64>::default().is_unbounded());
}

#[test]
fn test_intersection_commutative_and_idempotent() {
    let ranges = [
        NumericRangeSet::Empty,
        NumericRangeSet::Unbounded,
        NumericRangeSet::new(Some(10), None),
        NumericRangeSet::new(None, Some(20)),
        NumericRangeSet::new(Some(5), Some(15)),
        NumericRangeSet::new(Some(30), Some(40)),
    ];

    for a in &ranges {
        assert_eq!(a.intersection(a), *a, "idempotent for {a:?}");
        for b in &ranges {
            assert_eq!(
                a.intersection(b),
                b.intersection(a),
                "commutative for {a:?} and {b:?}"
            );
        }
    }
}

#[test]
fn test_intersection_bounds() {
    let a = NumericRangeSet::new(Some(10), None);
    let b = NumericRangeSet::new(Some(5), Some(15));
    assert_eq!(a.intersection(&b), NumericRangeSet::new(Some(10), Some(15)));

    let c = NumericRangeSet::new(Some(30), Some(40));
    assert!(b.intersection(&c).is_empty());
    assert!(NumericRangeSet::Empty.intersection(&NumericRangeSet::<i32>::Unbounded).is_empty());
}

#[test]
fn test_contains_open_bounds() {
    let unbounded = NumericRangeSet::<i32>::Unbounded;
    assert!(unbounded.contains(i32::MIN));
    assert!(unbounded.contains(i32::MAX));

    let lower = NumericRangeSet::new(Some(10), None);
    assert!(lower.contains(10));
    assert!(lower.contains(i32::MAX));
    assert!(!lower.contains(9));

    let upper = NumericRangeSet::new(None, Some(10.0));
    assert!(upper.contains(f64::MIN));
    assert!(upper.contains(10.0));
    assert!(!upper.contains(10.5));

    assert!(!NumericRangeSet::Empty.contains(0));
}

#[test]
fn test_from_constraint_exact() {
    let c = LongConstraint::new("width").with_exact(5);
    let r = NumericRangeSet::from_constraint(&c);
    assert_eq!(r.min(), Some(5));
    assert_eq!(r.max(), Some(5));

    let c = DoubleConstraint::new("frameRate").with_min(15.0).with_ideal(60.0);
    let r = NumericRangeSet::from_constraint(&c);
    assert_eq!(r, NumericRangeSet::new(Some(15.0), None));

    let c = LongConstraint::new("width").with_ideal(1280);
    assert!(NumericRangeSet::from_constraint(&c).is_unbounded());
}

#[test]
fn test_from_constraint_clamped() {
    let c = DoubleConstraint::new("frameRate").with_max(-1.0);
    assert!(NumericRangeSet::from_constraint_clamped(&c, 0.0, 1000.0).is_empty());

    let c = DoubleConstraint::new("frameRate").with_min(2000.0);
    assert!(NumericRangeSet::from_constraint_clamped(&c, 0.0, 1000.0).is_empty());

    // bounds outside the native interval do not widen it
    let c = DoubleConstraint::new("frameRate").with_min(-5.0).with_max(2000.0);
    assert!(NumericRangeSet::from_constraint_clamped(&c, 0.0, 1000.0).is_unbounded());

    let c = DoubleConstraint::new("frameRate").with_min(15.0).with_max(2000.0);
    assert_eq!(
        NumericRangeSet::from_constraint_clamped(&c, 0.0, 1000.0),
        NumericRangeSet::new(Some(15.0), None)
    );

    let c = LongConstraint::new("width").with_exact(1280);
    assert_eq!(
        NumericRangeSet::from_constraint_clamped(&c, 1, i32::MAX),
        NumericRangeSet::new(Some(1280), Some(1280))
    );

    let c = LongConstraint::new("width").with_min(200).with_max(100);
    assert!(NumericRangeSet::from_constraint_clamped(&c, 1, i32::MAX).is_empty());
}
