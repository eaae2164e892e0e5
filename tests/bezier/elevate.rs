use super::*;

#[test]
fn elevated_curve_has_same_shape() {
    let curve       = Curve::try_new(vec![Coord2(0.0, 0.0), Coord2(1.0, 3.0), Coord2(3.0, -2.0)]).unwrap();
    let elevated    = curve.elevate();

    assert!(elevated.degree() == 3);
    for step in 0..=50 {
        let s = (step as f64) / 50.0;

        assert!(close_points(&elevated.evaluate(s), &curve.evaluate(s), 1e-14));
    }
}

#[test]
fn reduce_undoes_elevate() {
    let curve       = Curve::try_new(vec![Coord2(0.0, 0.0), Coord2(1.0, 3.0), Coord2(3.0, -2.0)]).unwrap();
    let reduced     = curve.elevate().elevate().reduced();

    assert!(reduced.degree() == 2);
    for (p1, p2) in reduced.nodes().iter().zip(curve.nodes().iter()) {
        assert!(close_points(p1, p2, 1e-12));
    }
}

#[test]
fn quadratic_does_not_reduce() {
    let curve = Curve::try_new(vec![Coord2(0.0, 0.0), Coord2(1.0, 3.0), Coord2(3.0, -2.0)]).unwrap();

    assert!(curve.reduce().is_none());
    assert!(curve.reduced() == curve);
}

#[test]
fn collinear_evenly_spaced_nodes_reduce_to_line() {
    let curve = Curve::try_new(vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, 2.0), Coord2(3.0, 3.0)]).unwrap();

    assert!(curve.reduced().degree() == 1);
}
