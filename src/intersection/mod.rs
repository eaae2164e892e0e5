//!
//! # Intersections between Bezier curves
//!
//! ```
//! # use bezier_kernel::*;
//! # use bezier_kernel::intersection::*;
//! #
//! let parabola        = Curve::try_new(vec![Coord2(-1.0, 1.0), Coord2(0.0, -1.0), Coord2(1.0, 1.0)]).unwrap();
//! let line            = Curve::try_new(vec![Coord2(-1.0, 0.25), Coord2(1.0, 0.25)]).unwrap();
//!
//! let intersections   = all_intersections(&[(&parabola, &line)]).unwrap();
//!
//! assert!(intersections.len() == 2);
//! assert!((intersections[0].s() - 0.25).abs() < 1e-12);
//! assert!((intersections[1].s() - 0.75).abs() < 1e-12);
//! ```
//!
//! Intersections are found in three stages:
//!
//! * One of the curves (which must reduce to degree 1 or 2) is implicitized, and its implicit equation is
//!   written as a polynomial along the other curve.
//! * Both curves are repeatedly halved. Pairs of sections whose control point bounding boxes do not touch
//!   are discarded, as are sections where the implicit equation has the same sign throughout.
//! * Newton's method finds where the implicit equation vanishes along each surviving section.
//! * The roots are matched up with parameters on the implicitized curve, polished and merged.
//!
//! Curves that share an arc have infinitely many intersections. This is detected before subdividing
//! and reported as `BezierError::CoincidentCurves`.
//!
//! How closely values must agree is set by the `wiggle` field of `IntersectionOptions`, which is a
//! number of units in the last place. Tangential intersections are only found to roughly half of the
//! available precision: their parameters can be millions of units in the last place away from the exact
//! value, so comparing them with `approx_equal_ulps()` needs a much larger wiggle than the default.
//!

mod options;
mod intersection;
mod section;
mod coincidence;
mod root;
mod curve_curve;

pub use self::options::*;
pub use self::intersection::*;
pub use self::coincidence::*;
pub use self::curve_curve::*;
