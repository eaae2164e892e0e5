use super::*;

#[test]
fn length_of_line() {
    let line = Curve::try_new(vec![Coord2(1.0, 1.0), Coord2(4.0, 5.0)]).unwrap();

    assert!(line.length() == 5.0);
}

#[test]
fn length_of_elevated_line() {
    let line = Curve::try_new(vec![Coord2(1.0, 1.0), Coord2(4.0, 5.0)]).unwrap().elevate().elevate();

    assert!((line.length() - 5.0).abs() < 1e-12);
}

#[test]
fn length_of_point() {
    let point = Curve::try_new(vec![Coord2(1.0, 1.0)]).unwrap();

    assert!(point.length() == 0.0);
}

#[test]
fn length_of_parabola() {
    // Arc length of y = x^2 for x in [-1, 1] is sqrt(5) + asinh(2)/2
    let parabola    = Curve::try_new(vec![Coord2(-1.0, 1.0), Coord2(0.0, -1.0), Coord2(1.0, 1.0)]).unwrap();
    let expected    = f64::sqrt(5.0) + f64::asinh(2.0)/2.0;

    assert!((parabola.length() - expected).abs() < 1e-10);
}

#[test]
fn length_is_sum_of_halves() {
    let curve           = Curve::try_new(vec![Coord2(0.0, 0.0), Coord2(1.0, 3.0), Coord2(3.0, -2.0), Coord2(4.0, 1.0)]).unwrap();
    let (left, right)   = curve.subdivide();

    assert!(approx_equal(curve.length(), left.length() + right.length()));
}
