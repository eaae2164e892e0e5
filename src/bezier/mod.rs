//!
//! # Routines for describing, querying and manipulating Bezier curves
//!
//! ```
//! # use bezier_kernel::*;
//! # use bezier_kernel::bezier::*;
//! #
//! let curve           = Curve::try_new(vec![Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(3.0, 0.0)]).unwrap();
//!
//! let mid_point       = curve.evaluate(0.5);
//! let (left, right)   = curve.subdivide();
//! let middle          = curve.specialize(0.25, 0.75);
//! let length          = curve.length();
//! ```
//!
//! A `Curve` can have any degree: a curve with `n` nodes has degree `n - 1`. Evaluation forms the row of
//! Bernstein weights for a parameter and takes its dot product with the nodes. Subdivision multiplies the
//! nodes by a fixed matrix for the curve's degree, which produces the nodes of both halves at once.
//!

mod basis;
mod curve;
mod derivative;
mod elevate;
mod length;
mod section;
mod solve;
mod subdivide;

pub use self::basis::*;
pub use self::curve::*;
pub use self::derivative::*;
pub use self::elevate::*;
pub use self::section::*;
pub use self::solve::*;
pub use self::subdivide::*;
