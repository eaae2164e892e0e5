use super::basis::*;
use super::curve::*;
use super::derivative::*;
use super::super::coordinate::*;

use roots::{find_roots_linear, find_roots_quadratic, find_roots_cubic, Roots};
use smallvec::*;

/// Number of Newton steps used to pull a candidate parameter towards the closest point on the curve
const POLISH_ITERATIONS: usize = 8;

/// Roots slightly outside the curve are moved onto its end points
const CLIP_RANGE: f64 = 0.001;

///
/// Solves for s in a single dimension of a Bezier curve of degree up to 3 (finds where the basis function evaluates to p)
///
/// Returns `None` for curves of higher degree, which have no closed-form solution here
///
pub fn solve_basis_for_s(weights: &[f64], p: f64) -> Option<SmallVec<[f64; 4]>> {
    let roots = match weights.len() {
        1 => Roots::No([]),
        2 => find_roots_linear(weights[1]-weights[0], weights[0]-p),
        3 => {
            let (w0, w1, w2) = (weights[0], weights[1], weights[2]);
            find_roots_quadratic(w0 - 2.0*w1 + w2, 2.0*(w1-w0), w0-p)
        }
        4 => {
            let (w1, w2, w3, w4) = (weights[0], weights[1], weights[2], weights[3]);

            let d = w1-p;
            let c = 3.0*(w2-w1);
            let b = 3.0*(w3-w2)-c;
            let a = w4-w1-c-b;

            find_roots_cubic(a, b, c, d)
        }
        _ => { return None; }
    };

    let mut roots: SmallVec<[f64; 4]> = match roots {
        Roots::No(_)    => smallvec![],
        Roots::One(r)   => r.iter().cloned().collect(),
        Roots::Two(r)   => r.iter().cloned().collect(),
        Roots::Three(r) => r.iter().cloned().collect(),
        Roots::Four(r)  => r.iter().cloned().collect()
    };

    for root in roots.iter_mut() {
        if *root < 0.0 && *root > -CLIP_RANGE { *root = 0.0 }
        if *root > 1.0 && *root < 1.0+CLIP_RANGE { *root = 1.0 }
    }

    roots.retain(|r| *r >= 0.0 && *r <= 1.0);

    Some(roots)
}

///
/// Samples a curve and returns the parameters of the samples closest to the point (used when there is no closed-form solution)
///
fn sample_for_s<Point: Coordinate>(nodes: &[Point], point: &Point) -> SmallVec<[f64; 4]> {
    let num_samples = 16 * nodes.len();
    let distances   = (0..=num_samples)
        .map(|index| {
            let s = (index as f64) / (num_samples as f64);
            (s, evaluate_nodes(nodes, s).distance_to(point))
        })
        .collect::<Vec<_>>();

    // Every local minimum of the distance is a candidate
    (0..distances.len())
        .filter(|index| {
            let distance = distances[*index].1;
            (*index == 0 || distances[index-1].1 >= distance) && (*index == distances.len()-1 || distances[index+1].1 >= distance)
        })
        .map(|index| distances[index].0)
        .collect()
}

///
/// Moves a parameter towards the closest point on the curve using Newton's method on `B'(s) . (B(s) - p)`
///
fn polish_s<Point: Coordinate>(nodes: &[Point], first_deriv: &[Point], second_deriv: &[Point], point: &Point, s: f64) -> f64 {
    let mut s = s;

    for _ in 0..POLISH_ITERATIONS {
        let offset      = evaluate_nodes(nodes, s) - *point;
        let tangent     = evaluate_nodes(first_deriv, s);
        let concavity   = evaluate_nodes(second_deriv, s);

        let numerator   = tangent.dot(&offset);
        let denominator = concavity.dot(&offset) + tangent.dot(&tangent);

        if denominator == 0.0 || !denominator.is_finite() { break; }

        let next_s = (s - numerator/denominator).max(0.0).min(1.0);
        if next_s == s { break; }

        s = next_s;
    }

    s
}

///
/// Given a point that is close to or on the curve with the specified nodes, finds the parameter that can be used to retrieve it
///
/// Returns the parameter in `[0, 1]` of the closest candidate point on the curve, provided it is within `tolerance` of the
/// target point
///
pub fn solve_nodes_for_s<Point: Coordinate>(nodes: &[Point], point: &Point, tolerance: f64) -> Option<f64> {
    if nodes.len() == 1 {
        return if nodes[0].distance_to(point) <= tolerance { Some(0.0) } else { None };
    }

    // Candidates come from solving each dimension separately
    let mut candidates = SmallVec::<[f64; 8]>::new();
    for dimension in 0..Point::len() {
        let weights = nodes.iter().map(|node| node.get(dimension)).collect::<SmallVec<[f64; 4]>>();

        match solve_basis_for_s(&weights, point.get(dimension)) {
            Some(roots) => candidates.extend(roots),
            None        => { candidates.extend(sample_for_s(nodes, point)); break; }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let first_deriv     = derivative_nodes(nodes);
    let second_deriv    = derivative_nodes(&first_deriv);

    candidates.into_iter()
        .map(|s| {
            let polished = polish_s(nodes, &first_deriv, &second_deriv, point, s);

            // Polishing only ever tries to improve on the original candidate
            let original_distance = evaluate_nodes(nodes, s).distance_to(point);
            let polished_distance = evaluate_nodes(nodes, polished).distance_to(point);

            if polished_distance <= original_distance {
                (polished, polished_distance)
            } else {
                (s, original_distance)
            }
        })
        .filter(|(_, distance)| *distance <= tolerance)
        .fold(None, |best: Option<(f64, f64)>, (s, distance)| {
            match best {
                Some((_, best_distance)) if best_distance <= distance   => best,
                _                                                       => Some((s, distance))
            }
        })
        .map(|(s, _)| s)
}

impl<Coord: Coordinate> Curve<Coord> {
    ///
    /// Given a point that is close to or on this curve, finds the parameter that can be used to retrieve it
    ///
    /// Returns `None` if no point on the curve is within `tolerance` of the point
    ///
    pub fn parameter_for_point(&self, point: &Coord, tolerance: f64) -> Option<f64> {
        solve_nodes_for_s(self.nodes(), point, tolerance)
    }
}
