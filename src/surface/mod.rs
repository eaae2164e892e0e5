//!
//! # Bezier triangles
//!
//! ```
//! # use bezier_kernel::*;
//! # use bezier_kernel::surface::*;
//! #
//! let surface         = Surface::try_new(vec![Coord2(0.0, 0.0), Coord2(1.0, 0.25), Coord2(0.25, 1.0)]).unwrap();
//!
//! let centre          = surface.evaluate_barycentric(1.0/3.0, 1.0/3.0, 1.0/3.0).unwrap();
//! let (a, b, c, d)    = surface.subdivide().unwrap();
//! let (e1, e2, e3)    = surface.edges().unwrap();
//! ```
//!
//! A `Surface` maps the reference triangle `{(s, t) | 0 <= s, t, s + t <= 1}` onto a space of any
//! dimension. Points in the triangle are described by barycentric coordinates
//! `(lambda1, lambda2, lambda3) = (1 - s - t, s, t)`.
//!
//! Nodes are ordered from left to right and from bottom to top. For a quadratic triangle:
//!
//! ```text
//! 5
//! 3  4
//! 0  1  2
//! ```
//!
//! Subdivision and edge extraction use fixed tables of node indexes that depend on this order.
//!

mod basis;
mod subdivide;
mod surface;

pub use self::basis::*;
pub use self::subdivide::*;
pub use self::surface::*;
