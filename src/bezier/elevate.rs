use super::curve::*;
use super::super::consts::*;
use super::super::coordinate::*;

use smallvec::*;

///
/// Finds the nodes of the curve one degree higher that has the same shape as the curve with the specified nodes
///
pub fn elevate_nodes<Point: Coordinate>(nodes: &[Point]) -> SmallVec<[Point; 4]> {
    let degree          = nodes.len().saturating_sub(1);
    let denominator     = (degree + 1) as f64;
    let mut new_nodes   = SmallVec::with_capacity(degree + 2);

    new_nodes.push(nodes[0]);
    for index in 1..=degree {
        let multiplier  = index as f64;

        // Hold off on division until the end to limit round-off
        let combined    = nodes[index-1]*multiplier + nodes[index]*(denominator - multiplier);
        new_nodes.push(combined * (1.0/denominator));
    }
    new_nodes.push(nodes[degree]);

    new_nodes
}

///
/// If the curve with the specified nodes is a degree-elevated curve, returns the nodes of the curve one degree lower
///
/// The lower degree nodes are recovered by reversing the elevation formula. The curve is only considered to
/// be elevated if elevating the recovered nodes gives back nodes within `tolerance` of the originals.
///
pub fn reduce_nodes<Point: Coordinate>(nodes: &[Point], tolerance: f64) -> Option<SmallVec<[Point; 4]>> {
    if nodes.len() < 2 { return None; }

    let new_degree      = nodes.len() - 2;
    let denominator     = (new_degree + 1) as f64;
    let mut reduced     = SmallVec::<[Point; 4]>::with_capacity(new_degree + 1);

    reduced.push(nodes[0]);
    for index in 1..new_degree {
        let multiplier  = index as f64;
        let previous    = reduced[index-1];
        let node        = (nodes[index]*denominator - previous*multiplier) * (1.0/(denominator - multiplier));

        reduced.push(node);
    }
    if new_degree > 0 {
        reduced.push(nodes[nodes.len()-1]);
    }

    let elevated        = elevate_nodes(&reduced);
    let matches         = elevated.iter()
        .zip(nodes.iter())
        .all(|(elevated, original)| elevated.distance_to(original) <= tolerance);

    if matches {
        Some(reduced)
    } else {
        None
    }
}

impl<Coord: Coordinate> Curve<Coord> {
    ///
    /// Creates a curve with the same shape as this one but one degree higher
    ///
    pub fn elevate(&self) -> Curve<Coord> {
        Curve::from_nodes(elevate_nodes(self.nodes()))
    }

    ///
    /// If this curve is a degree-elevated curve, returns the curve one degree lower with the same shape
    ///
    pub fn reduce_within(&self, tolerance: f64) -> Option<Curve<Coord>> {
        reduce_nodes(self.nodes(), tolerance).map(Curve::from_nodes)
    }

    ///
    /// If this curve is a degree-elevated curve, returns the curve one degree lower with the same shape
    ///
    /// Nodes are compared using a tolerance relative to the size of the curve
    ///
    pub fn reduce(&self) -> Option<Curve<Coord>> {
        let tolerance = f64::sqrt((DEFAULT_WIGGLE as f64) * f64::EPSILON) * self.scale();
        self.reduce_within(tolerance)
    }

    ///
    /// Reduces this curve as far as it will go using the same relative tolerance as `reduce()`
    ///
    pub fn reduced(&self) -> Curve<Coord> {
        let tolerance = f64::sqrt((DEFAULT_WIGGLE as f64) * f64::EPSILON) * self.scale();
        self.fully_reduced(tolerance)
    }

    ///
    /// Reduces this curve as far as possible, returning a curve that is not degree-elevated
    ///
    pub fn fully_reduced(&self, tolerance: f64) -> Curve<Coord> {
        let mut curve = self.clone();

        while let Some(reduced) = curve.reduce_within(tolerance) {
            curve = reduced;
        }

        curve
    }
}
