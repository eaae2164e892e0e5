use super::basis::*;
use super::subdivide::*;
use super::super::geo::*;
use super::super::error::*;
use super::super::shape::*;
use super::super::implicit::*;

use smallvec::*;

///
/// Represents a Bezier curve of arbitrary degree
///
/// A curve with `n` nodes has degree `n - 1`. The first and last nodes are the end points of the curve.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Curve<Coord: Coordinate> {
    nodes: SmallVec<[Coord; 4]>
}

impl<Coord: Coordinate> Geo for Curve<Coord> {
    type Point = Coord;
}

impl<Coord: Coordinate> Curve<Coord> {
    ///
    /// Creates a curve from its nodes
    ///
    /// A curve needs at least one node (a single node describes a degree 0 curve, which is a point)
    ///
    pub fn try_new<NodeIter: IntoIterator<Item=Coord>>(nodes: NodeIter) -> BezierResult<Curve<Coord>> {
        let nodes = nodes.into_iter().collect::<SmallVec<[Coord; 4]>>();

        if nodes.is_empty() {
            Err(BezierError::InvalidNodeCount { shape: ShapeKind::Curve, count: 0 })
        } else {
            Ok(Curve { nodes })
        }
    }

    ///
    /// Creates a curve from a list of nodes that is known to be non-empty
    ///
    #[inline]
    pub(crate) fn from_nodes(nodes: SmallVec<[Coord; 4]>) -> Curve<Coord> {
        test_assert!(!nodes.is_empty());

        Curve { nodes }
    }

    ///
    /// The nodes of this curve
    ///
    #[inline]
    pub fn nodes(&self) -> &[Coord] {
        &self.nodes
    }

    ///
    /// The degree of this curve
    ///
    #[inline]
    pub fn degree(&self) -> usize {
        self.nodes.len() - 1
    }

    ///
    /// The number of components in the nodes of this curve
    ///
    #[inline]
    pub fn dimension(&self) -> usize {
        Coord::len()
    }

    ///
    /// The point at s = 0
    ///
    #[inline]
    pub fn start_point(&self) -> Coord {
        self.nodes[0]
    }

    ///
    /// The point at s = 1
    ///
    #[inline]
    pub fn end_point(&self) -> Coord {
        self.nodes[self.nodes.len()-1]
    }

    ///
    /// Given a value s (usually from 0 to 1), returns the point on this curve
    ///
    #[inline]
    pub fn evaluate(&self, s: f64) -> Coord {
        evaluate_nodes(&self.nodes, s)
    }

    ///
    /// Evaluates this curve at each of the specified parameters
    ///
    #[inline]
    pub fn evaluate_multi(&self, s_vals: &[f64]) -> Vec<Coord> {
        evaluate_nodes_multi(&self.nodes, s_vals)
    }

    ///
    /// Splits this curve in half, returning the curves covering `[0, 0.5]` and `[0.5, 1]`
    ///
    #[inline]
    pub fn subdivide(&self) -> (Curve<Coord>, Curve<Coord>) {
        let (left, right) = subdivide_nodes(&self.nodes);

        test_assert!(left.len() == self.nodes.len());
        test_assert!(right.len() == self.nodes.len());

        (Curve::from_nodes(left), Curve::from_nodes(right))
    }

    ///
    /// The largest absolute value of any component of any node of this curve
    ///
    #[inline]
    pub fn scale(&self) -> f64 {
        self.nodes.iter()
            .map(|node| node.max_abs_component())
            .fold(0.0, f64::max)
    }
}

impl<Coord: Coordinate+Coordinate2D> Curve<Coord> {
    ///
    /// Evaluates the implicit equation `f(x, y) = 0` describing the algebraic curve that contains this curve
    ///
    #[inline]
    pub fn implicit_at(&self, x: f64, y: f64) -> BezierResult<f64> {
        evaluate_implicit(&self.nodes, x, y)
    }
}

impl<Coord: Coordinate> BezierShape for Curve<Coord> {
    type Subdivision = (Curve<Coord>, Curve<Coord>);

    #[inline]
    fn nodes(&self) -> &[Coord] {
        &self.nodes
    }

    #[inline]
    fn degree(&self) -> usize {
        self.nodes.len() - 1
    }

    #[inline]
    fn subdivide_shape(&self) -> BezierResult<(Curve<Coord>, Curve<Coord>)> {
        Ok(self.subdivide())
    }
}
