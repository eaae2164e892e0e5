//!
//! # Traits for basic geometric definitions
//!
//! The `Geo` trait is implemented by anything that has a particular type of coordinate: `Curve` and
//! `Surface` implement it to describe the type of their nodes.
//!
//! `BoundingBox` describes axis-aligned bounding boxes. The intersection engine uses the bounding
//! box of a curve's control points to discard pairs of curve sections that cannot meet.
//!

mod geo;
mod bounding_box;

pub use self::geo::*;
pub use self::bounding_box::*;
pub use super::coordinate::*;
