use super::*;

#[test]
fn test_default_set_is_unconstrained() {
    let set = MediaTrackConstraintSet::new();
    assert!(!set.is_constrained());
    assert!(!set.has_min());
    assert!(!set.has_exact());
    assert_eq!(set.first_mandatory(), None);
    assert_eq!(set.to_string(), "");
}

#[test]
fn test_all_constraints_names_are_unique() {
    let set = MediaTrackConstraintSet::new();
    let names: Vec<&str> = set.all_constraints().iter().map(|c| c.name()).collect();
    assert_eq!(names.len(), NUM_CONSTRAINTS);

    let mut dedup = names.clone();
    dedup.sort_unstable();
    dedup.dedup();
    assert_eq!(dedup.len(), names.len());

    assert_eq!(names[0], CONSTRAINT_WIDTH);
    assert_eq!(names[3], CONSTRAINT_FRAME_RATE);
}

#[test]
fn test_aggregate_queries() {
    let mut set = MediaTrackConstraintSet::new();
    set.width.set_ideal(1280);
    assert!(set.is_constrained());
    assert!(!set.has_min());
    assert!(!set.has_exact());
    assert_eq!(set.first_mandatory(), None);

    set.frame_rate.set_min(24.0);
    assert!(set.has_min());
    assert_eq!(set.first_mandatory(), Some(CONSTRAINT_FRAME_RATE));

    set.device_id.set_exact(["cam0"]);
    assert!(set.has_exact());

    set.reset();
    assert!(!set.is_constrained());
    assert_eq!(set.width.name(), CONSTRAINT_WIDTH);
}

#[test]
fn test_constraint_lookup_by_name() {
    let mut set = MediaTrackConstraintSet::new();
    set.group_id.set_ideal(["g1"]);

    let c = set.constraint(CONSTRAINT_GROUP_ID);
    assert!(c.is_some_and(|c| c.is_constrained()));
    assert!(set.constraint("noSuchConstraint").is_none());
}

#[test]
fn test_display() {
    let mut basic = MediaTrackConstraintSet::new();
    basic.width.set_min(640);
    basic.facing_mode.set_ideal(["user"]);
    assert_eq!(basic.to_string(), "width: {min: 640}, facingMode: {ideal: [\"user\"]}");

    let mut advanced = MediaTrackConstraintSet::new();
    advanced.frame_rate.set_exact(60.0);

    let constraints = MediaTrackConstraints::new(basic, vec![advanced.clone()]);
    assert_eq!(
        constraints.to_string(),
        "{width: {min: 640}, facingMode: {ideal: [\"user\"]}, advanced: [{frameRate: {exact: 60}}]}"
    );

    let only_advanced = MediaTrackConstraints::new(MediaTrackConstraintSet::new(), vec![advanced]);
    assert_eq!(
        only_advanced.to_string(),
        "{advanced: [{frameRate: {exact: 60}}]}"
    );
    assert_eq!(MediaTrackConstraints::default().to_string(), "{}");
}

#[test]
fn test_is_unconstrained() {
    let mut constraints = MediaTrackConstraints::default();
    assert!(constraints.is_unconstrained());

    constraints.push_advanced(MediaTrackConstraintSet::new());
    assert!(constraints.is_unconstrained());

    constraints.basic_mut().height.set_max(720);
    assert!(!constraints.is_unconstrained());
    assert_eq!(constraints.advanced().len(), 1);
}
