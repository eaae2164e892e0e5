use super::geo::*;
use super::error::*;

///
/// Capabilities shared by every kind of Bezier shape
///
/// Shapes are immutable: operations such as `subdivide()` produce new shapes rather than
/// changing the shape they are called on.
///
pub trait BezierShape : Geo+Clone+Sized {
    ///
    /// The shapes generated by subdividing this shape once
    ///
    type Subdivision;

    ///
    /// The control points of this shape, in the order that defines its Bernstein coefficients
    ///
    fn nodes(&self) -> &[Self::Point];

    ///
    /// The polynomial degree of this shape
    ///
    fn degree(&self) -> usize;

    ///
    /// The number of components in each node
    ///
    #[inline]
    fn dimension(&self) -> usize {
        Self::Point::len()
    }

    ///
    /// Splits this shape into same-degree shapes covering equal parts of its reference domain
    ///
    fn subdivide_shape(&self) -> BezierResult<Self::Subdivision>;

    ///
    /// Bounding box of the nodes of this shape
    ///
    /// Bezier shapes lie inside the convex hull of their nodes, so this box contains the whole shape
    ///
    #[inline]
    fn control_bounds<Bounds: BoundingBox<Point=Self::Point>>(&self) -> Bounds {
        Bounds::from_points(self.nodes().iter().cloned())
    }
}
