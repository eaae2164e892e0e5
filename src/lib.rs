//!
//! # Bezier curves and Bezier triangles
//!
//! ```
//! # use bezier_kernel::*;
//! # use bezier_kernel::bezier::*;
//! # use bezier_kernel::intersection::*;
//! #
//! let curve1          = Curve::try_new(vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0)]).unwrap();
//! let curve2          = Curve::try_new(vec![Coord2(1.0, 0.0), Coord2(0.0, 1.0)]).unwrap();
//!
//! let mid_point       = curve1.evaluate(0.5);
//! let (left, right)   = curve1.subdivide();
//! let intersections   = all_intersections(&[(&curve1, &curve2)]).unwrap();
//!
//! assert!(intersections.len() == 1);
//! assert!(intersections[0].point().distance_to(&mid_point) < 1e-12);
//! ```
//!
//! Shapes are described by their control points ('nodes'). `Curve` is a Bezier curve of any degree and
//! `Surface` is a Bezier triangle of degree 1 to 3. Both implement the `BezierShape` trait, which describes
//! the things every shape can do: report its degree, dimension and nodes, and subdivide itself into
//! smaller shapes of the same degree.
//!
//! The `implicit` module converts planar curves of degree 1 and 2 into an implicit equation, and the
//! `intersection` module uses that equation together with subdivision to find where two curves cross.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde_derive;
extern crate serde;
extern crate roots;
extern crate itertools;
extern crate smallvec;
extern crate once_cell;
extern crate thiserror;

#[macro_use]
mod test_assert;

pub mod bezier;
pub mod surface;
pub mod implicit;
pub mod intersection;
pub mod plot;

mod consts;
pub use self::consts::*;

mod error;
pub use self::error::*;

mod shape;
pub use self::shape::*;

pub mod coordinate;
pub use self::coordinate::*;

pub mod geo;
pub use self::geo::*;

pub use self::bezier::Curve;
pub use self::surface::Surface;
