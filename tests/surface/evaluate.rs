use super::*;

use rand::prelude::*;

#[test]
fn evaluate_corners() {
    let surface = quadratic_surface();

    assert!(surface.evaluate_barycentric(1.0, 0.0, 0.0) == Ok(Coord2(0.0, 0.0)));
    assert!(surface.evaluate_barycentric(0.0, 1.0, 0.0) == Ok(Coord2(1.0, 0.0)));
    assert!(surface.evaluate_barycentric(0.0, 0.0, 1.0) == Ok(Coord2(0.25, 1.0)));
}

#[test]
fn evaluate_linear_is_affine() {
    let surface = Surface::try_new(vec![Coord2(0.0, 0.0), Coord2(1.0, 0.25), Coord2(0.25, 1.0)]).unwrap();
    let point   = surface.evaluate_barycentric(0.25, 0.5, 0.25).unwrap();

    assert!(close_points(&point, &Coord2(0.5625, 0.375), 1e-15));
}

#[test]
fn evaluate_cartesian_is_barycentric() {
    let surface = quadratic_surface();

    let cartesian   = surface.evaluate_cartesian(0.25, 0.5).unwrap();
    let barycentric = surface.evaluate_barycentric(0.25, 0.25, 0.5).unwrap();

    assert!(close_points(&cartesian, &barycentric, 1e-15));
}

#[test]
fn evaluate_cartesian_multi() {
    let surface = quadratic_surface();
    let points  = surface.evaluate_cartesian_multi(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();

    assert!(points == vec![Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(0.25, 1.0)]);
    assert!(surface.evaluate_cartesian_multi(&[(0.0, 0.0), (1.0, 1.0)]).is_err());
}

#[test]
fn evaluate_cubic() {
    // Evenly spaced nodes map the reference triangle onto itself
    let nodes = vec![
        Coord2(0.0, 0.0), Coord2(1.0/3.0, 0.0), Coord2(2.0/3.0, 0.0), Coord2(1.0, 0.0),
        Coord2(0.0, 1.0/3.0), Coord2(1.0/3.0, 1.0/3.0), Coord2(2.0/3.0, 1.0/3.0),
        Coord2(0.0, 2.0/3.0), Coord2(1.0/3.0, 2.0/3.0),
        Coord2(0.0, 1.0)
    ];
    let surface = Surface::try_new(nodes).unwrap();

    assert!(surface.degree() == 3);
    assert!(close_points(&surface.evaluate_cartesian(0.2, 0.3).unwrap(), &Coord2(0.2, 0.3), 1e-14));
}

#[test]
fn quartic_evaluation_is_unsupported() {
    let nodes   = (0..15).map(|index| Coord2(index as f64, 0.0)).collect::<Vec<_>>();
    let surface = Surface::try_new(nodes).unwrap();
    let error   = surface.evaluate_barycentric(0.25, 0.25, 0.5).unwrap_err();

    assert!(surface.degree() == 4);
    assert!(error == BezierError::UnsupportedDegree { operation: "surface evaluation", degree: 4 });
    assert!(error.is_unsupported());
}

#[test]
fn barycentric_must_sum_to_one() {
    let surface = quadratic_surface();
    let error   = surface.evaluate_barycentric(0.5, 0.5, 0.5).unwrap_err();

    match error {
        BezierError::InvalidBarycentric { lambda1, lambda2, lambda3, .. } => {
            assert!(lambda1 == 0.5 && lambda2 == 0.5 && lambda3 == 0.5);
        }

        _ => assert!(false)
    }

    assert!(error.is_input_domain());
}

#[test]
fn barycentric_must_not_be_negative() {
    let surface = quadratic_surface();

    assert!(surface.evaluate_barycentric(1.25, -0.25, 0.0).is_err());
    assert!(surface.evaluate_cartesian(0.75, 0.75).is_err());
}

#[test]
fn evaluation_inside_convex_hull() {
    let mut rng = StdRng::seed_from_u64(42);

    for degree in 1..=3 {
        let num_nodes   = (degree+1)*(degree+2)/2;
        let nodes       = (0..num_nodes).map(|_| Coord2(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0))).collect::<Vec<_>>();
        let surface     = Surface::try_new(nodes.clone()).unwrap();

        for _ in 0..200 {
            let s = rng.gen_range(0.0..1.0);
            let t = rng.gen_range(0.0..(1.0-s));

            let point = surface.evaluate_cartesian(s, t).unwrap();

            // A point is outside the convex hull if some direction separates it from every node
            for angle_step in 0..64 {
                let angle       = (angle_step as f64) * std::f64::consts::PI / 32.0;
                let direction   = Coord2(angle.cos(), angle.sin());
                let furthest    = nodes.iter().map(|node| node.dot(&direction)).fold(f64::MIN, f64::max);

                assert!(point.dot(&direction) <= furthest + 1e-12);
            }
        }
    }
}
