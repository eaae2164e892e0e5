use super::super::coordinate::*;

use smallvec::*;

///
/// Bernstein weights of the specified degree at `s`
///
/// The weights are built by raising the degree one step at a time, starting from the single weight
/// of a degree 0 curve
///
pub fn bernstein_weights(degree: usize, s: f64) -> SmallVec<[f64; 8]> {
    let lambda1         = 1.0 - s;
    let lambda2         = s;
    let mut weights     = smallvec![0.0; degree+1];
    weights[0]          = 1.0;

    for current_degree in 0..degree {
        // Work backwards so the weights from the previous degree are still available when they're needed
        weights[current_degree+1] = lambda2 * weights[current_degree];

        for index in (1..=current_degree).rev() {
            weights[index] = lambda1 * weights[index] + lambda2 * weights[index-1];
        }

        weights[0] = lambda1 * weights[0];
    }

    weights
}

///
/// Evaluates the Bezier curve with the specified nodes at `s`
///
pub fn evaluate_nodes<Point: Coordinate>(nodes: &[Point], s: f64) -> Point {
    if nodes.is_empty() { return Point::origin(); }

    let weights = bernstein_weights(nodes.len()-1, s);

    weights.iter()
        .zip(nodes.iter())
        .fold(Point::origin(), |point, (weight, node)| point + (*node * *weight))
}

///
/// Evaluates a Bezier curve at many parameters at once
///
pub fn evaluate_nodes_multi<Point: Coordinate>(nodes: &[Point], s_vals: &[f64]) -> Vec<Point> {
    s_vals.iter()
        .map(|s| evaluate_nodes(nodes, *s))
        .collect()
}

///
/// Performs a single round of de Casteljau's algorithm, producing nodes for a curve of one degree lower
///
/// `lambda1` and `lambda2` are the weights of the two ends of the interval and are expected to add up to 1
///
pub fn de_casteljau_round<Point: Coordinate>(nodes: &[Point], lambda1: f64, lambda2: f64) -> SmallVec<[Point; 4]> {
    nodes.windows(2)
        .map(|pair| pair[0]*lambda1 + pair[1]*lambda2)
        .collect()
}
