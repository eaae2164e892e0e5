use super::super::bezier::*;
use super::super::coordinate::*;

use itertools::*;
use smallvec::*;

///
/// If two curves share an arc, returns the parameter ranges of the shared arc on the first and second curve
///
/// Any arc shared by two curves must start and end at end points of the curves, so the end points of each
/// curve are located on the other curve. If two distinct parameter pairs are found, the sections of the two
/// curves between them are compared. `tolerance` is the distance allowed between points and between the nodes
/// of the sections.
///
/// The second range runs backwards if the curves run in opposite directions over the shared arc.
///
pub fn overlapping_region<Coord: Coordinate>(first: &Curve<Coord>, second: &Curve<Coord>, tolerance: f64, parameter_tolerance: f64) -> Option<((f64, f64), (f64, f64))> {
    // Parameter pairs for the end points that lie on the other curve
    let mut pairs = SmallVec::<[(f64, f64); 4]>::new();

    if let Some(s) = first.parameter_for_point(&second.start_point(), tolerance)   { pairs.push((s, 0.0)); }
    if let Some(s) = first.parameter_for_point(&second.end_point(), tolerance)     { pairs.push((s, 1.0)); }
    if let Some(t) = second.parameter_for_point(&first.start_point(), tolerance)   { pairs.push((0.0, t)); }
    if let Some(t) = second.parameter_for_point(&first.end_point(), tolerance)     { pairs.push((1.0, t)); }

    // The shared arc runs between the pair of points that are furthest apart on the first curve
    let ((s1, t1), (s2, t2)) = pairs.iter()
        .tuple_combinations()
        .filter(|((s1, t1), (s2, t2))| (s1-s2).abs() > parameter_tolerance && (t1-t2).abs() > parameter_tolerance)
        .max_by(|((s1, _), (s2, _)), ((s3, _), (s4, _))| {
            (s1-s2).abs().partial_cmp(&(s3-s4).abs()).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(a, b)| (*a, *b))?;

    let ((s1, t1), (s2, t2)) = if s1 <= s2 { ((s1, t1), (s2, t2)) } else { ((s2, t2), (s1, t1)) };

    // Curves with the same shape may still have different degrees, so compare the reduced sections
    let first_section   = first.specialize(s1, s2).fully_reduced(tolerance);
    let second_section  = second.specialize(t1, t2).fully_reduced(tolerance);

    if first_section.degree() != second_section.degree() {
        return None;
    }

    let same_shape = first_section.nodes().iter()
        .zip(second_section.nodes().iter())
        .all(|(p1, p2)| p1.distance_to(p2) <= tolerance);

    if same_shape {
        Some(((s1, s2), (t1, t2)))
    } else {
        None
    }
}
