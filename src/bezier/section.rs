use super::basis::*;
use super::curve::*;
use super::super::coordinate::*;

use smallvec::*;

///
/// Finds the nodes of the curve that covers the interval `[start, end]` of the curve with the specified nodes
///
/// Node `k` of the result is the blossom of the original curve evaluated with `degree - k` copies of `start`
/// and `k` copies of `end`, which is computed by running rounds of de Casteljau's algorithm with those
/// parameters. `start` may be greater than `end`, in which case the result runs backwards.
///
pub fn specialize_nodes<Point: Coordinate>(nodes: &[Point], start: f64, end: f64) -> SmallVec<[Point; 4]> {
    let degree = nodes.len().saturating_sub(1);

    (0..=degree)
        .map(|index| {
            let mut blended = nodes.iter().cloned().collect::<SmallVec<[Point; 4]>>();

            for round in 0..degree {
                let s   = if round < degree - index { start } else { end };
                blended = de_casteljau_round(&blended, 1.0 - s, s);
            }

            blended[0]
        })
        .collect()
}

impl<Coord: Coordinate> Curve<Coord> {
    ///
    /// Creates a new curve that follows this one between the parameters `start` and `end`
    ///
    /// The new curve is parameterized so that s = 0 corresponds to `start` on this curve and s = 1 to `end`
    ///
    pub fn specialize(&self, start: f64, end: f64) -> Curve<Coord> {
        Curve::from_nodes(specialize_nodes(self.nodes(), start, end))
    }

    ///
    /// Reverses the direction of this curve
    ///
    pub fn reverse(&self) -> Curve<Coord> {
        Curve::from_nodes(self.nodes().iter().rev().cloned().collect())
    }
}
