use super::*;
use bezier_kernel::bezier::*;

#[test]
fn evaluate_end_points() {
    let curve = Curve::try_new(vec![Coord2(1.0, 1.0), Coord2(3.0, 3.0), Coord2(4.0, 4.0), Coord2(2.0, 2.0)]).unwrap();

    assert!(curve.evaluate(0.0) == Coord2(1.0, 1.0));
    assert!(curve.evaluate(1.0) == Coord2(2.0, 2.0));
}

#[test]
fn evaluate_quadratic_midpoint() {
    let curve = Curve::try_new(vec![Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(3.0, 0.0)]).unwrap();

    // 0.25*(0, 0) + 0.5*(1, 2) + 0.25*(3, 0)
    assert!(close_points(&curve.evaluate(0.5), &Coord2(1.25, 1.0), 1e-15));
}

#[test]
fn evaluate_matches_de_casteljau() {
    let curve = Curve::try_new(vec![Coord2(1.0, 1.0), Coord2(3.0, 3.0), Coord2(4.0, 4.0), Coord2(2.0, 2.0), Coord2(5.0, -1.0)]).unwrap();

    for step in 0..=100 {
        let s = (step as f64) / 100.0;

        let mut nodes = curve.nodes().to_vec();
        while nodes.len() > 1 {
            nodes = de_casteljau_round(&nodes, 1.0-s, s).into_vec();
        }

        assert!(close_points(&curve.evaluate(s), &nodes[0], 1e-14));
    }
}

#[test]
fn evaluate_multi_matches_evaluate() {
    let curve   = Curve::try_new(vec![0.0, 3.0, -1.0, 2.0]).unwrap();
    let s_vals  = [0.0, 0.125, 0.5, 0.9, 1.0];
    let points  = curve.evaluate_multi(&s_vals);

    assert!(points.len() == s_vals.len());
    for (s, point) in s_vals.iter().zip(points.iter()) {
        assert!(curve.evaluate(*s) == *point);
    }
}

#[test]
fn evaluate_outside_unit_interval_extrapolates() {
    let line = Curve::try_new(vec![Coord2(0.0, 0.0), Coord2(1.0, 2.0)]).unwrap();

    assert!(close_points(&line.evaluate(2.0), &Coord2(2.0, 4.0), 1e-15));
    assert!(close_points(&line.evaluate(-1.0), &Coord2(-1.0, -2.0), 1e-15));
}
