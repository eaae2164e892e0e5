use super::basis::*;
use super::subdivide::*;
use super::super::geo::*;
use super::super::error::*;
use super::super::shape::*;
use super::super::bezier::*;

use once_cell::sync::OnceCell;
use smallvec::*;

///
/// Represents a Bezier triangle
///
/// A triangle of degree `d` has `(d + 1)(d + 2)/2` nodes. The edges are computed the first time they are
/// requested and kept for the lifetime of the surface.
///
#[derive(Clone, Debug)]
pub struct Surface<Coord: Coordinate> {
    nodes:  SmallVec<[Coord; 6]>,
    degree: usize,
    edges:  OnceCell<(Curve<Coord>, Curve<Coord>, Curve<Coord>)>
}

impl<Coord: Coordinate> PartialEq for Surface<Coord> {
    fn eq(&self, other: &Surface<Coord>) -> bool {
        self.nodes == other.nodes
    }
}

impl<Coord: Coordinate> Geo for Surface<Coord> {
    type Point = Coord;
}

impl<Coord: Coordinate> Surface<Coord> {
    ///
    /// Creates a surface from its nodes, which must be ordered from left to right and bottom to top
    ///
    pub fn try_new<NodeIter: IntoIterator<Item=Coord>>(nodes: NodeIter) -> BezierResult<Surface<Coord>> {
        let nodes   = nodes.into_iter().collect::<SmallVec<[Coord; 6]>>();
        let degree  = surface_degree(nodes.len())?;

        Ok(Surface { nodes, degree, edges: OnceCell::new() })
    }

    #[inline]
    pub fn nodes(&self) -> &[Coord] {
        &self.nodes
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        Coord::len()
    }

    ///
    /// Evaluates the point at the specified barycentric coordinates
    ///
    /// The coordinates must not be negative and must add up to 1. Surfaces of degree 1 to 3 can be evaluated.
    ///
    pub fn evaluate_barycentric(&self, lambda1: f64, lambda2: f64, lambda3: f64) -> BezierResult<Coord> {
        evaluate_surface_nodes(&self.nodes, self.degree, lambda1, lambda2, lambda3)
    }

    ///
    /// Evaluates the point at `(s, t)` in the reference triangle
    ///
    #[inline]
    pub fn evaluate_cartesian(&self, s: f64, t: f64) -> BezierResult<Coord> {
        self.evaluate_barycentric(1.0 - s - t, s, t)
    }

    ///
    /// Evaluates the surface at several `(s, t)` points
    ///
    pub fn evaluate_cartesian_multi(&self, params: &[(f64, f64)]) -> BezierResult<Vec<Coord>> {
        params.iter()
            .map(|(s, t)| self.evaluate_cartesian(*s, *t))
            .collect()
    }

    ///
    /// Splits this surface into four surfaces of the same degree
    ///
    /// These cover the lower left, central, lower right and upper left quarters of the reference triangle
    /// (in that order). The central quarter is rotated by half a turn relative to the others.
    ///
    pub fn subdivide(&self) -> BezierResult<(Surface<Coord>, Surface<Coord>, Surface<Coord>, Surface<Coord>)> {
        let [a, b, c, d] = subdivide_surface_nodes(&self.nodes, self.degree)?;
        let child = |nodes: SmallVec<[Coord; 6]>| Surface { nodes, degree: self.degree, edges: OnceCell::new() };

        Ok((child(a), child(b), child(c), child(d)))
    }

    ///
    /// The three curves that form the boundary of this surface
    ///
    /// Only surfaces of degree 1 and 2 have edges
    ///
    pub fn edges(&self) -> BezierResult<&(Curve<Coord>, Curve<Coord>, Curve<Coord>)> {
        self.edges.get_or_try_init(|| -> BezierResult<_> {
            let [edge1, edge2, edge3] = edge_nodes(&self.nodes, self.degree)?;

            Ok((Curve::from_nodes(edge1), Curve::from_nodes(edge2), Curve::from_nodes(edge3)))
        })
    }

    ///
    /// The area of this surface
    ///
    pub fn area(&self) -> BezierResult<f64> {
        Err(BezierError::AreaNotImplemented)
    }
}

impl<Coord: Coordinate> BezierShape for Surface<Coord> {
    type Subdivision = (Surface<Coord>, Surface<Coord>, Surface<Coord>, Surface<Coord>);

    #[inline]
    fn nodes(&self) -> &[Coord] {
        &self.nodes
    }

    #[inline]
    fn degree(&self) -> usize {
        self.degree
    }

    #[inline]
    fn subdivide_shape(&self) -> BezierResult<Self::Subdivision> {
        self.subdivide()
    }
}
