use super::*;

#[test]
fn shared_end_point_is_exact() {
    enable_logging();

    let line1 = line((0.0, 0.0), (1.0, 0.0));
    let line2 = line((1.0, 0.0), (1.0, 1.0));

    let intersections = curve_intersections(&line1, &line2, &IntersectionOptions::default()).unwrap();

    assert!(intersections.len() == 1);
    assert!(intersections[0].s() == 1.0);
    assert!(intersections[0].t() == 0.0);
    assert!(intersections[0].point() == Coord2(1.0, 0.0));
}

#[test]
fn shared_end_point_of_curve_and_line() {
    enable_logging();

    let parabola    = parabola();
    let line        = line((1.0, 1.0), (2.0, 0.0));

    let intersections = curve_intersections(&parabola, &line, &IntersectionOptions::default()).unwrap();

    assert!(intersections.len() == 1);
    assert!(intersections[0].s() == 1.0);
    assert!(intersections[0].t() == 0.0);
}

#[test]
fn t_junction() {
    enable_logging();

    let line1 = line((0.0, 0.0), (2.0, 0.0));
    let line2 = line((1.0, 0.0), (1.0, 1.0));

    let intersections = curve_intersections(&line1, &line2, &IntersectionOptions::default()).unwrap();

    assert!(intersections.len() == 1);
    assert!((intersections[0].s() - 0.5).abs() < 1e-14);
    assert!(intersections[0].t() == 0.0);
}
