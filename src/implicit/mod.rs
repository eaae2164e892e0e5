//!
//! # Implicitization of planar curves
//!
//! A planar Bezier curve of degree 1 or 2 lies on an algebraic curve `f(x, y) = 0`. `f` is the
//! resultant of the two polynomials `x(s) - x` and `y(s) - y`: it vanishes exactly when both have
//! a common root, which is when `(x, y)` is a point on the curve.
//!
//! The resultant is computed directly from the Bernstein coefficients (the nodes shifted by
//! `(x, y)`), so the curve never has to be converted to a power basis.
//!
//! ```
//! # use bezier_kernel::*;
//! # use bezier_kernel::implicit::*;
//! #
//! let line = [Coord2(0.0, 0.0), Coord2(1.0, 1.0)];
//!
//! assert!(evaluate_implicit(&line, 2.0, 2.0).unwrap() == 0.0);
//! assert!(evaluate_implicit(&line, 1.0, 0.0).unwrap() != 0.0);
//! ```
//!
//! The curve must not be degree-elevated: the resultant of an elevated curve is identically zero.
//! `Curve::reduced()` removes any elevation before a curve is implicitized.
//!
//! `implicit_on_curve()` substitutes a second curve into the implicit equation, which gives the
//! residual along that curve as a polynomial in the Bernstein basis.
//!

mod on_curve;

pub use self::on_curve::*;

use super::coordinate::*;
use super::error::*;

///
/// Evaluates the implicit equation of the planar curve with the specified nodes at `(x, y)`
///
/// The result is zero for points on the curve. Degree 0 curves are points, and have no implicit
/// equation; degrees above 2 are not supported.
///
pub fn evaluate_implicit<Point: Coordinate+Coordinate2D>(nodes: &[Point], x: f64, y: f64) -> BezierResult<f64> {
    match nodes.len() {
        0 | 1   => Err(BezierError::PointImplicitization),
        2       => Ok(linear_implicit(nodes, x, y)),
        3       => Ok(quadratic_implicit(nodes, x, y)),
        count   => Err(BezierError::UnsupportedDegree { operation: "implicitization", degree: count-1 })
    }
}

///
/// The signed area of the triangle formed by the point and the two nodes of a line
///
#[inline]
fn linear_implicit<Point: Coordinate2D>(nodes: &[Point], x: f64, y: f64) -> f64 {
    let (x0, y0) = (nodes[0].x()-x, nodes[0].y()-y);
    let (x1, y1) = (nodes[1].x()-x, nodes[1].y()-y);

    x0*y1 - x1*y0
}

///
/// The 4x4 Sylvester determinant for a quadratic, expanded into two 3x3 cofactors
///
fn quadratic_implicit<Point: Coordinate2D>(nodes: &[Point], x: f64, y: f64) -> f64 {
    // Rows are [A, B, C, 0], [0, A, B, C], [D, E, F, 0], [0, D, E, F] with the middle weight doubled
    let a       = nodes[0].x() - x;
    let b       = 2.0*(nodes[1].x() - x);
    let c       = nodes[2].x() - x;
    let d       = nodes[0].y() - y;
    let e       = 2.0*(nodes[1].y() - y);
    let f       = nodes[2].y() - y;

    let sub1        = b*f - c*e;
    let sub2        = a*f - c*d;
    let sub_det_a   = -e*sub1 + f*sub2;
    let sub_det_d   = b*sub1 - c*sub2;

    a*sub_det_a + d*sub_det_d
}
