use super::geo::*;
use super::super::coordinate::*;

///
/// Trait implemented by things representing axis-aligned bounding boxes
///
pub trait BoundingBox : Geo+Sized {
    ///
    /// Returns a bounding box with the specified minimum and maximum coordinates
    ///
    fn from_min_max(min: Self::Point, max: Self::Point) -> Self;

    ///
    /// Returns the minimum point of this bounding box
    ///
    fn min(&self) -> Self::Point;

    ///
    /// Returns the maximum point of this bounding box
    ///
    fn max(&self) -> Self::Point;

    ///
    /// Returns the smallest bounding box containing all of the specified points
    ///
    /// An empty iterator produces a box at the origin
    ///
    fn from_points<PointIter: IntoIterator<Item=Self::Point>>(points: PointIter) -> Self {
        let mut points  = points.into_iter();
        let first       = points.next().unwrap_or_else(Self::Point::origin);

        let (min, max)  = points.fold((first, first), |(min, max), point| {
            (Self::Point::from_smallest_components(min, point), Self::Point::from_biggest_components(max, point))
        });

        Self::from_min_max(min, max)
    }

    ///
    /// True if this bounding box overlaps another one
    ///
    /// Boxes that only touch along an edge or at a corner are considered to overlap: two curves that
    /// meet at a shared end point have bounding boxes like this
    ///
    fn overlaps(&self, target: &Self) -> bool {
        let (min1, max1) = (self.min(), self.max());
        let (min2, max2) = (target.min(), target.max());

        (0..Self::Point::len()).all(|component| {
            min1.get(component) <= max2.get(component) && min2.get(component) <= max1.get(component)
        })
    }

    ///
    /// Creates the union of this and another bounding box
    ///
    fn union(self, target: Self) -> Self {
        Self::from_min_max(Self::Point::from_smallest_components(self.min(), target.min()), Self::Point::from_biggest_components(self.max(), target.max()))
    }

    ///
    /// The length of the longest side of this bounding box
    ///
    fn max_extent(&self) -> f64 {
        let (min, max) = (self.min(), self.max());

        (0..Self::Point::len())
            .map(|component| max.get(component) - min.get(component))
            .fold(0.0, f64::max)
    }
}

///
/// Type representing a bounding box
///
/// (Unlike a normal point tuple this always represents its bounds in minimum/maximum order)
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds<Point: Coordinate>(Point, Point);

impl<Point: Coordinate> Geo for (Point, Point) {
    type Point = Point;
}

impl<Point: Coordinate> BoundingBox for (Point, Point) {
    #[inline]
    fn from_min_max(min: Self::Point, max: Self::Point) -> Self {
        (min, max)
    }

    #[inline]
    fn min(&self) -> Self::Point {
        Point::from_smallest_components(self.0, self.1)
    }

    #[inline]
    fn max(&self) -> Self::Point {
        Point::from_biggest_components(self.0, self.1)
    }
}

impl<Point: Coordinate> Geo for Bounds<Point> {
    type Point=Point;
}

impl<Point: Coordinate> BoundingBox for Bounds<Point> {
    #[inline]
    fn from_min_max(min: Self::Point, max: Self::Point) -> Self {
        Bounds(min, max)
    }

    #[inline]
    fn min(&self) -> Self::Point {
        self.0
    }

    #[inline]
    fn max(&self) -> Self::Point {
        self.1
    }
}
