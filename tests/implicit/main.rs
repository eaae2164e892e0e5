use bezier_kernel::*;
use bezier_kernel::implicit::*;

#[test]
fn points_on_line_have_zero_residual() {
    let line = [Coord2(0.0, 0.0), Coord2(1.0, 1.0)];

    assert!(evaluate_implicit(&line, 2.0, 2.0) == Ok(0.0));
    assert!(evaluate_implicit(&line, -3.5, -3.5) == Ok(0.0));
    assert!(evaluate_implicit(&line, 1.0, 0.0).unwrap() != 0.0);
}

#[test]
fn residual_sign_gives_side_of_line() {
    let line = [Coord2(0.0, 0.0), Coord2(1.0, 1.0)];

    let left    = evaluate_implicit(&line, 0.0, 1.0).unwrap();
    let right   = evaluate_implicit(&line, 1.0, 0.0).unwrap();

    assert!(left * right < 0.0);
}

#[test]
fn point_cannot_be_implicitized() {
    let error = evaluate_implicit(&[Coord2(1.0, 2.0)], 1.0, 2.0).unwrap_err();

    assert!(error == BezierError::PointImplicitization);
    assert!(error.is_input_domain());
}

#[test]
fn cubic_cannot_be_implicitized() {
    let curve = Curve::try_new(vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, -1.0), Coord2(3.0, 0.0)]).unwrap();
    let error = curve.implicit_at(0.0, 0.0).unwrap_err();

    assert!(error.is_unsupported());
}

#[test]
fn quadratic_residual_vanishes_on_curve() {
    let curve = Curve::try_new(vec![Coord2(0.0, 0.0), Coord2(1.0, 3.0), Coord2(4.0, 1.0)]).unwrap();

    for step in -5..=15 {
        // The implicit equation describes the whole algebraic curve, including the parts outside [0, 1]
        let s       = (step as f64) / 10.0;
        let point   = curve.evaluate(s);

        assert!(curve.implicit_at(point.x(), point.y()).unwrap().abs() < 1e-10);
    }
}

#[test]
fn quadratic_residual_does_not_vanish_off_curve() {
    let curve = Curve::try_new(vec![Coord2(0.0, 0.0), Coord2(1.0, 3.0), Coord2(4.0, 1.0)]).unwrap();

    assert!(curve.implicit_at(0.0, 1.0).unwrap().abs() > 1e-3);
    assert!(curve.implicit_at(2.0, 0.0).unwrap().abs() > 1e-3);
}

#[test]
fn elevated_line_has_no_residual() {
    // Degree-elevated curves must be reduced before they are implicitized: their residual is zero everywhere
    let elevated = Curve::try_new(vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0)]).unwrap().elevate();

    assert!(elevated.implicit_at(1.0, 0.0).unwrap().abs() < 1e-12);
    assert!(elevated.reduced().implicit_at(1.0, 0.0).unwrap().abs() > 0.5);
}
