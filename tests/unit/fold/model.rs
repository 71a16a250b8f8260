use super::*;

#[test]
fn new_fold_defaults() {
    let fold = Fold::new(FoldKind::Horizontal);
    assert_eq!(fold.target_angle, Fold::DEFAULT_TARGET_ANGLE);
    assert_eq!(fold.current_angle, Fold::DEFAULT_TARGET_ANGLE);
    assert_eq!(fold.position, Fold::DEFAULT_POSITION);
    assert_eq!(fold.direction, FoldDirection::Mountain);
    assert!(fold.validate().is_ok());
}

#[test]
fn folds_get_fresh_ids() {
    let a = Fold::new(FoldKind::Diag1);
    let b = Fold::new(FoldKind::Diag1);
    assert_ne!(a.id, b.id);
}

#[test]
fn at_rest_clamps_and_zeroes() {
    let fold = Fold::at_rest(FoldKind::Diag2, 180.0, 120.0, FoldDirection::Valley);
    assert_eq!(fold.target_angle, MAX_FOLD_ANGLE);
    assert_eq!(fold.position, 100.0);
    assert_eq!(fold.current_angle, 0.0);

    let fold = Fold::at_rest(FoldKind::Diag2, f64::NAN, f64::INFINITY, FoldDirection::Mountain);
    assert_eq!(fold.target_angle, Fold::DEFAULT_TARGET_ANGLE);
    assert_eq!(fold.position, Fold::DEFAULT_POSITION);
}

#[test]
fn effective_angle_signs_by_direction() {
    let mut fold = Fold::new(FoldKind::Horizontal);
    fold.current_angle = 90.0;
    assert_eq!(fold.effective_angle(), 90.0);

    fold.direction = FoldDirection::Valley;
    assert_eq!(fold.effective_angle(), -90.0);

    // Magnitude is taken before the sign is applied.
    fold.current_angle = -45.0;
    assert_eq!(fold.effective_angle(), -45.0);
    fold.direction = FoldDirection::Mountain;
    assert_eq!(fold.effective_angle(), 45.0);
}

#[test]
fn validate_rejects_out_of_range() {
    let mut fold = Fold::new(FoldKind::Horizontal);
    fold.target_angle = 180.0;
    assert!(fold.validate().is_err());

    let mut fold = Fold::new(FoldKind::Horizontal);
    fold.position = 101.0;
    assert!(fold.validate().is_err());

    let mut fold = Fold::new(FoldKind::Horizontal);
    fold.current_angle = f64::NAN;
    assert!(fold.validate().is_err());
}

#[test]
fn direction_tags_round_trip_with_mountain_fallback() {
    assert_eq!(FoldDirection::from_tag("valley"), FoldDirection::Valley);
    assert_eq!(FoldDirection::from_tag("mountain"), FoldDirection::Mountain);
    assert_eq!(FoldDirection::from_tag("sideways"), FoldDirection::Mountain);
}

#[test]
fn default_sequence_is_two_centered_mountain_folds() {
    let folds = default_folds();
    assert_eq!(folds.len(), 2);
    assert_eq!(folds[0].kind, FoldKind::Diag1);
    assert_eq!(folds[0].target_angle, 135.0);
    assert_eq!(folds[1].kind, FoldKind::Horizontal);
    assert_eq!(folds[1].target_angle, 170.0);
    for fold in &folds {
        assert_eq!(fold.current_angle, 0.0);
        assert_eq!(fold.position, 50.0);
        assert_eq!(fold.direction, FoldDirection::Mountain);
    }
}
