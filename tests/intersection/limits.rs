use super::*;

#[test]
fn two_cubics_are_not_supported() {
    enable_logging();

    let cubic1 = Curve::try_new(vec![Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(2.0, -2.0), Coord2(3.0, 0.0)]).unwrap();
    let cubic2 = Curve::try_new(vec![Coord2(0.0, 1.0), Coord2(1.0, -2.0), Coord2(2.0, 2.0), Coord2(3.0, -1.0)]).unwrap();

    let error = curve_intersections(&cubic1, &cubic2, &IntersectionOptions::default()).unwrap_err();

    assert!(error == BezierError::UnsupportedDegree { operation: "intersection", degree: 3 });
    assert!(error.is_unsupported());
}

#[test]
fn two_points_cannot_be_intersected() {
    let point1 = Curve::try_new(vec![Coord2(1.0, 1.0)]).unwrap();
    let point2 = Curve::try_new(vec![Coord2(1.0, 1.0)]).unwrap();

    let error = curve_intersections(&point1, &point2, &IntersectionOptions::default()).unwrap_err();

    assert!(error == BezierError::PointImplicitization);
}

#[test]
fn candidate_limit() {
    enable_logging();

    let parabola    = parabola();
    let line        = line((-1.0, 0.25), (1.0, 0.25));
    let options     = IntersectionOptions::default().with_max_candidates(2);

    let error = curve_intersections(&parabola, &line, &options).unwrap_err();

    assert!(matches!(error, BezierError::TooManyCandidates { count, .. } if count > 2));
    assert!(error.is_unsupported());
}

#[test]
fn shallow_search_still_finds_crossings() {
    enable_logging();

    let parabola    = parabola();
    let line        = line((-1.0, 0.25), (1.0, 0.25));
    let options     = IntersectionOptions::default().with_max_depth(3);

    let intersections = curve_intersections(&parabola, &line, &options).unwrap();

    assert!(intersections.len() == 2);
    intersections.iter().for_each(|intersection| check_intersection(intersection, 1e-12));
}
