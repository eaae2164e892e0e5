use super::*;

#[test]
fn parabola_and_line() {
    enable_logging();

    let parabola    = parabola();
    let line        = line((-1.0, 0.25), (1.0, 0.25));

    let intersections = curve_intersections(&parabola, &line, &IntersectionOptions::default()).unwrap();

    assert!(intersections.len() == 2);
    assert!(intersections[0].s() < intersections[1].s());

    assert!((intersections[0].s() - 0.25).abs() < 1e-12);
    assert!((intersections[0].t() - 0.25).abs() < 1e-12);
    assert!((intersections[1].s() - 0.75).abs() < 1e-12);
    assert!((intersections[1].t() - 0.75).abs() < 1e-12);

    intersections.iter().for_each(|intersection| check_intersection(intersection, 1e-12));
}

#[test]
fn two_parabolas() {
    enable_logging();

    // y = x^2 and y = 1 - x^2 meet where x = ±1/sqrt(2), and both curves have x = 2s - 1
    let lower = parabola();
    let upper = Curve::try_new(vec![Coord2(-1.0, 0.0), Coord2(0.0, 2.0), Coord2(1.0, 0.0)]).unwrap();

    let intersections   = curve_intersections(&lower, &upper, &IntersectionOptions::default()).unwrap();
    let expected        = [(1.0 - f64::sqrt(0.5)) / 2.0, (1.0 + f64::sqrt(0.5)) / 2.0];

    assert!(intersections.len() == 2);
    for (intersection, expected) in intersections.iter().zip(expected.iter()) {
        assert!((intersection.s() - expected).abs() < 1e-12);
        assert!((intersection.t() - expected).abs() < 1e-12);
        assert!((intersection.point().y() - 0.5).abs() < 1e-12);

        check_intersection(intersection, 1e-12);
    }
}

#[test]
fn cubic_and_line() {
    enable_logging();

    // y = 6s(1-s)(1-2s) and x = 3s, so the cubic crosses y = 0 at its end points and in the middle
    let cubic   = Curve::try_new(vec![Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(2.0, -2.0), Coord2(3.0, 0.0)]).unwrap();
    let line    = line((-1.0, 0.0), (4.0, 0.0));

    let intersections = curve_intersections(&cubic, &line, &IntersectionOptions::default()).unwrap();

    assert!(intersections.len() == 3);
    assert!(intersections[0].s() == 0.0);
    assert!((intersections[0].t() - 0.2).abs() < 1e-12);
    assert!((intersections[1].s() - 0.5).abs() < 1e-12);
    assert!((intersections[1].t() - 0.5).abs() < 1e-12);
    assert!(intersections[2].s() == 1.0);
    assert!((intersections[2].t() - 0.8).abs() < 1e-12);

    intersections.iter().for_each(|intersection| check_intersection(intersection, 1e-12));
}

#[test]
fn elevated_curves_are_reduced_before_implicitizing() {
    enable_logging();

    let cubic       = Curve::try_new(vec![Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(2.0, -2.0), Coord2(3.0, 0.0)]).unwrap();
    let elevated    = line((-1.0, 0.0), (4.0, 0.0)).elevate().elevate();

    assert!(elevated.degree() == 3);

    let intersections = curve_intersections(&cubic, &elevated, &IntersectionOptions::default()).unwrap();

    assert!(intersections.len() == 3);
    assert!((intersections[1].s() - 0.5).abs() < 1e-12);
    assert!((intersections[1].t() - 0.5).abs() < 1e-12);

    intersections.iter().for_each(|intersection| check_intersection(intersection, 1e-12));
}

#[test]
fn residual_vanishes_at_intersections() {
    enable_logging();

    let parabola    = parabola();
    let line        = line((-1.0, -0.5), (1.0, 0.75));

    let intersections = curve_intersections(&line, &parabola, &IntersectionOptions::default()).unwrap();

    assert!(intersections.len() == 2);
    for intersection in intersections.iter() {
        let point = intersection.point();

        assert!(parabola.implicit_at(point.x(), point.y()).unwrap().abs() < 1e-10);
        check_intersection(intersection, 1e-12);
    }
}

#[test]
fn nested_parabolas() {
    enable_logging();

    let parabola    = parabola();
    let above       = Curve::try_new(parabola.nodes().iter().map(|node| Coord2(node.x(), node.y() + 0.001)).collect::<Vec<_>>()).unwrap();

    assert!(curve_intersections(&parabola, &above, &IntersectionOptions::default()).unwrap().is_empty());
    assert!(curve_intersections(&above, &parabola, &IntersectionOptions::default()).unwrap().is_empty());
}
