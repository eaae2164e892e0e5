use super::super::consts::*;
use super::super::error::*;
use super::super::coordinate::*;

use smallvec::*;

///
/// Finds the degree `d` of a surface with the specified number of nodes, where `(d + 1)(d + 2)/2 == num_nodes`
///
/// Returns an error if the number of nodes is not a triangular number
///
pub fn surface_degree(num_nodes: usize) -> BezierResult<usize> {
    // 8 * num_nodes = (2d + 3)^2 - 1
    let degree = (0.5 * (f64::sqrt(8.0 * (num_nodes as f64) + 1.0) - 3.0)).round();

    if num_nodes > 0 && degree >= 0.0 {
        let degree = degree as usize;

        if (degree+1) * (degree+2) == 2*num_nodes {
            return Ok(degree);
        }
    }

    Err(BezierError::InvalidNodeCount { shape: ShapeKind::Surface, count: num_nodes })
}

///
/// Checks that a set of barycentric coordinates is inside the reference triangle
///
pub fn check_barycentric(lambda1: f64, lambda2: f64, lambda3: f64) -> BezierResult<()> {
    let total = lambda1 + lambda2 + lambda3;

    if !((total - 1.0).abs() <= BARYCENTRIC_TOLERANCE + BARYCENTRIC_RELATIVE_TOLERANCE) {
        Err(BezierError::InvalidBarycentric { lambda1, lambda2, lambda3, reason: "values do not sum to 1" })
    } else if lambda1 < 0.0 || lambda2 < 0.0 || lambda3 < 0.0 {
        Err(BezierError::InvalidBarycentric { lambda1, lambda2, lambda3, reason: "values must not be negative" })
    } else {
        Ok(())
    }
}

///
/// The Bernstein weights of a triangle of the specified degree, in node order
///
/// These are the terms of the expansion of `(lambda1 + lambda2 + lambda3)^degree`. Only degrees 1 to 3 are supported.
///
pub fn barycentric_weights(degree: usize, lambda1: f64, lambda2: f64, lambda3: f64) -> BezierResult<SmallVec<[f64; 10]>> {
    let (l1, l2, l3) = (lambda1, lambda2, lambda3);

    match degree {
        1 => Ok(smallvec![l1, l2, l3]),

        2 => Ok(smallvec![
            l1*l1,
            2.0*l1*l2,
            l2*l2,
            2.0*l1*l3,
            2.0*l2*l3,
            l3*l3
        ]),

        3 => Ok(smallvec![
            l1*l1*l1,
            3.0*l1*l1*l2,
            3.0*l1*l2*l2,
            l2*l2*l2,
            3.0*l1*l1*l3,
            6.0*l1*l2*l3,
            3.0*l2*l2*l3,
            3.0*l1*l3*l3,
            3.0*l2*l3*l3,
            l3*l3*l3
        ]),

        _ => Err(BezierError::UnsupportedDegree { operation: "surface evaluation", degree })
    }
}

///
/// Evaluates the surface with the specified nodes at a set of barycentric coordinates
///
pub fn evaluate_surface_nodes<Point: Coordinate>(nodes: &[Point], degree: usize, lambda1: f64, lambda2: f64, lambda3: f64) -> BezierResult<Point> {
    check_barycentric(lambda1, lambda2, lambda3)?;

    let weights = barycentric_weights(degree, lambda1, lambda2, lambda3)?;

    Ok(weights.iter()
        .zip(nodes.iter())
        .fold(Point::origin(), |point, (weight, node)| point + (*node * *weight)))
}
