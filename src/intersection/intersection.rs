use super::super::bezier::*;
use super::super::coordinate::*;

///
/// A point where two curves meet
///
/// `s` is the parameter of the point on the first curve and `t` is the parameter on the second curve
///
#[derive(Clone, Debug, PartialEq)]
pub struct Intersection<'a, Coord: Coordinate> {
    first:  &'a Curve<Coord>,
    second: &'a Curve<Coord>,
    s:      f64,
    t:      f64,
    point:  Coord
}

impl<'a, Coord: Coordinate> Intersection<'a, Coord> {
    pub(crate) fn new(first: &'a Curve<Coord>, second: &'a Curve<Coord>, s: f64, t: f64) -> Intersection<'a, Coord> {
        Intersection {
            first:  first,
            second: second,
            s:      s,
            t:      t,
            point:  first.evaluate(s)
        }
    }

    #[inline] pub fn first(&self) -> &'a Curve<Coord> { self.first }
    #[inline] pub fn second(&self) -> &'a Curve<Coord> { self.second }
    #[inline] pub fn s(&self) -> f64 { self.s }
    #[inline] pub fn t(&self) -> f64 { self.t }

    ///
    /// The point where the two curves meet (the first curve evaluated at `s`)
    ///
    #[inline]
    pub fn point(&self) -> Coord {
        self.point
    }
}
