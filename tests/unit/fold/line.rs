use super::*;

const EPS: f64 = 1e-9;

#[test]
fn horizontal_position_scales_offset() {
    let line = fold_line(FoldKind::Horizontal, 300.0, 25.0, None);
    assert_eq!(line.plane.nx, 0.0);
    assert_eq!(line.plane.ny, 1.0);
    assert_eq!(line.plane.c, -75.0);
    assert_eq!(line.axis, RotationAxis::X);
    assert_eq!(line.origin, "50% 25%");
    assert_eq!(line.start, Point::new(0.0, 75.0));
    assert_eq!(line.end, Point::new(300.0, 75.0));
}

#[test]
fn vertical_position_scales_offset() {
    let line = fold_line(FoldKind::Vertical, 300.0, 75.0, None);
    assert_eq!(line.plane.nx, 1.0);
    assert_eq!(line.plane.ny, 0.0);
    assert_eq!(line.plane.c, -225.0);
    assert_eq!(line.axis, RotationAxis::Y);
    assert_eq!(line.origin, "75% 50%");
}

#[test]
fn diag1_center_passes_through_origin() {
    let line = fold_line(FoldKind::Diag1, 300.0, 50.0, None);
    assert!((line.plane.nx - FRAC_1_SQRT_2).abs() < EPS);
    assert!((line.plane.ny + FRAC_1_SQRT_2).abs() < EPS);
    assert!(line.plane.c.abs() < EPS);
    assert_eq!(line.axis, RotationAxis::D1);
    // The x = y diagonal itself.
    assert!(line.plane.signed_distance(Point::new(120.0, 120.0)).abs() < EPS);
}

#[test]
fn diag1_offset_follows_position() {
    // position 25% of a 300px sheet: offset = 75 - 150 = -75.
    let line = fold_line(FoldKind::Diag1, 300.0, 25.0, None);
    assert!((line.plane.c - (-75.0 * FRAC_1_SQRT_2)).abs() < EPS);
    assert_eq!(line.start, Point::new(0.0, 75.0));
    assert_eq!(line.end, Point::new(300.0, 375.0));
}

#[test]
fn diag2_center_is_antidiagonal() {
    let line = fold_line(FoldKind::Diag2, 300.0, 50.0, None);
    assert_eq!(line.axis, RotationAxis::D2);
    // x + y = paper_size at the center position.
    assert!(line.plane.signed_distance(Point::new(100.0, 200.0)).abs() < EPS);
    assert_eq!(line.start, Point::new(0.0, 300.0));
    assert_eq!(line.end, Point::new(300.0, 0.0));
}

#[test]
fn custom_line_derives_perpendicular_normal() {
    let seg = Segment {
        p1: Point::new(0.0, 150.0),
        p2: Point::new(300.0, 150.0),
    };
    let line = fold_line(FoldKind::Custom, 300.0, 50.0, Some(seg));
    // A horizontal segment yields a vertical normal and the X axis bucket.
    assert!(line.plane.nx.abs() < EPS);
    assert!((line.plane.ny - 1.0).abs() < EPS);
    assert!((line.plane.c + 150.0).abs() < EPS);
    assert_eq!(line.axis, RotationAxis::X);
    assert_eq!(line.start, seg.p1);
    assert_eq!(line.end, seg.p2);
}

#[test]
fn custom_axis_buckets_by_angle() {
    let bucket = |dx: f64, dy: f64| {
        let seg = Segment {
            p1: Point::new(0.0, 0.0),
            p2: Point::new(dx, dy),
        };
        fold_line(FoldKind::Custom, 300.0, 50.0, Some(seg)).axis
    };
    assert_eq!(bucket(100.0, 0.0), RotationAxis::X);
    assert_eq!(bucket(0.0, 100.0), RotationAxis::Y);
    assert_eq!(bucket(0.0, -100.0), RotationAxis::Y);
    assert_eq!(bucket(100.0, 100.0), RotationAxis::D1);
    assert_eq!(bucket(100.0, -100.0), RotationAxis::D2);
}

#[test]
fn degenerate_custom_segment_falls_back_to_horizontal() {
    let seg = Segment {
        p1: Point::new(10.0, 10.0),
        p2: Point::new(10.0, 10.0),
    };
    let line = fold_line(FoldKind::Custom, 300.0, 25.0, Some(seg));
    assert_eq!(line, fold_line(FoldKind::Horizontal, 300.0, 25.0, None));
}

#[test]
fn missing_custom_segment_falls_back_to_horizontal() {
    let line = fold_line(FoldKind::Custom, 300.0, 50.0, None);
    assert_eq!(line, fold_line(FoldKind::Horizontal, 300.0, 50.0, None));
}

#[test]
fn unknown_wire_tags_collapse_to_horizontal() {
    assert_eq!(FoldKind::from_tag("horizontal"), FoldKind::Horizontal);
    assert_eq!(FoldKind::from_tag("diag2"), FoldKind::Diag2);
    assert_eq!(FoldKind::from_tag("zigzag"), FoldKind::Horizontal);
    assert_eq!(FoldKind::from_tag(""), FoldKind::Horizontal);
}

#[test]
fn rotation_axis_vectors_match_css() {
    assert_eq!(RotationAxis::X.rotate3d(), "1, 0, 0");
    assert_eq!(RotationAxis::Y.rotate3d(), "0, 1, 0");
    assert_eq!(RotationAxis::D1.rotate3d(), "1, 1, 0");
    assert_eq!(RotationAxis::D2.rotate3d(), "-1, 1, 0");
}
