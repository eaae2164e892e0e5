use super::basis::*;
use super::curve::*;
use super::super::coordinate::*;

use smallvec::*;

///
/// Returns the nodes of the hodograph (first derivative) of the curve with the specified nodes
///
/// The derivative of a curve of degree `n` has degree `n - 1` and nodes `n * (v[j+1] - v[j])`. The derivative
/// of a point is the origin.
///
pub fn derivative_nodes<Point: Coordinate>(nodes: &[Point]) -> SmallVec<[Point; 4]> {
    if nodes.len() < 2 {
        return smallvec![Point::origin()];
    }

    let degree = (nodes.len() - 1) as f64;
    nodes.windows(2)
        .map(|pair| (pair[1] - pair[0]) * degree)
        .collect()
}

impl<Coord: Coordinate> Curve<Coord> {
    ///
    /// The curve formed by the first derivative of this curve
    ///
    pub fn hodograph(&self) -> Curve<Coord> {
        Curve::from_nodes(derivative_nodes(self.nodes()))
    }

    ///
    /// Evaluates the first derivative of this curve at `s`
    ///
    pub fn evaluate_hodograph(&self, s: f64) -> Coord {
        evaluate_nodes(&derivative_nodes(self.nodes()), s)
    }
}

impl<Coord: Coordinate+Coordinate2D> Curve<Coord> {
    ///
    /// The signed curvature of this curve at `s`
    ///
    /// This is `B'(s) x B''(s) / |B'(s)|^3`. Lines have no curvature.
    ///
    pub fn curvature(&self, s: f64) -> f64 {
        if self.degree() <= 1 {
            return 0.0;
        }

        let first_deriv     = derivative_nodes(self.nodes());
        let second_deriv    = derivative_nodes(&first_deriv);

        let tangent         = evaluate_nodes(&first_deriv, s);
        let concavity       = evaluate_nodes(&second_deriv, s);

        let cross           = tangent.x()*concavity.y() - tangent.y()*concavity.x();
        let speed           = tangent.magnitude();

        cross / (speed*speed*speed)
    }
}
