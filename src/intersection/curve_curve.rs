use super::root::*;
use super::options::*;
use super::section::*;
use super::coincidence::*;
use super::intersection::*;
use super::super::error::*;
use super::super::bezier::*;
use super::super::coordinate::*;

use smallvec::*;
use std::cmp::Ordering;

///
/// Finds the intersections for each pair of curves in a list
///
/// The result contains the intersections of every pair, in the order the pairs are listed. Default options
/// are used: see `all_intersections_with_options()` to change the tolerance.
///
pub fn all_intersections<'a, Coord>(pairs: &[(&'a Curve<Coord>, &'a Curve<Coord>)]) -> BezierResult<Vec<Intersection<'a, Coord>>>
where Coord: Coordinate+Coordinate2D {
    all_intersections_with_options(pairs, &IntersectionOptions::default())
}

///
/// Finds the intersections for each pair of curves in a list, using the specified options
///
pub fn all_intersections_with_options<'a, Coord>(pairs: &[(&'a Curve<Coord>, &'a Curve<Coord>)], options: &IntersectionOptions) -> BezierResult<Vec<Intersection<'a, Coord>>>
where Coord: Coordinate+Coordinate2D {
    let mut intersections = vec![];

    for &(first, second) in pairs.iter() {
        intersections.extend(curve_intersections(first, second, options)?);
    }

    Ok(intersections)
}

///
/// Finds the points where two planar curves meet, sorted by their parameters
///
/// At least one of the curves must reduce to degree 1 or 2 (the one with the lowest degree is implicitized).
/// Curves that share an arc cause a `CoincidentCurves` error.
///
pub fn curve_intersections<'a, Coord>(first: &'a Curve<Coord>, second: &'a Curve<Coord>, options: &IntersectionOptions) -> BezierResult<Vec<Intersection<'a, Coord>>>
where Coord: Coordinate+Coordinate2D {
    debug!("Intersecting curves of degree {} and {}", first.degree(), second.degree());

    let scale               = first.scale().max(second.scale()).max(f64::MIN_POSITIVE);
    let point_tolerance     = options.point_tolerance(scale);
    let param_tolerance     = options.parameter_tolerance();
    let match_tolerance     = param_tolerance * scale;

    // Pick the curve to implicitize
    let first_reduced       = first.fully_reduced(match_tolerance);
    let second_reduced      = second.fully_reduced(match_tolerance);
    let (first_degree, second_degree) = (first_reduced.degree(), second_reduced.degree());

    if first_degree == 0 && second_degree == 0 {
        return Err(BezierError::PointImplicitization);
    }

    let implicit_first = match (first_degree, second_degree) {
        (1..=2, 1..=2)  => first_degree <= second_degree,
        (1..=2, _)      => true,
        (_, 1..=2)      => false,
        _               => {
            let degree = if first_degree == 0 || second_degree == 0 { first_degree.max(second_degree) } else { first_degree.min(second_degree) };
            return Err(BezierError::UnsupportedDegree { operation: "intersection", degree: degree });
        }
    };

    // Curves sharing an arc would have infinitely many intersections
    if let Some((first_range, second_range)) = overlapping_region(first, second, match_tolerance, param_tolerance) {
        warn!("Curves are coincident for s in {:?} and t in {:?}", first_range, second_range);
        return Err(BezierError::CoincidentCurves { first: first_range, second: second_range });
    }

    // Roots are found as (parametric, implicit) pairs, and swapped back at the end. Reduction keeps the
    // parameterization, so the reduced curve stands in for the implicitized curve throughout
    let (parametric, implicit) = if implicit_first {
        (second, &first_reduced)
    } else {
        (first, &second_reduced)
    };

    // A curve that is really a point meets the other curve at most once, reported at s = 0
    let parametric_degree = if implicit_first { second_degree } else { first_degree };
    if parametric_degree == 0 {
        let roots = implicit.parameter_for_point(&parametric.start_point(), match_tolerance)
            .map(|t| if implicit_first { (t, 0.0) } else { (0.0, t) });

        debug!("Point curve {} the other curve", if roots.is_some() { "lies on" } else { "is not on" });

        return Ok(roots.into_iter()
            .map(|(s, t)| Intersection::new(first, second, s, t))
            .collect());
    }

    let mut roots   = end_point_roots(parametric, implicit, point_tolerance, param_tolerance);
    let finder      = RootFinder::new(parametric, implicit, options);
    let candidates  = candidate_sections(parametric, implicit, options)?;

    for (parametric_section, _) in candidates.iter() {
        let root = refine_candidate(&finder, parametric, implicit, parametric_section.mid_point(), match_tolerance, param_tolerance)?;

        if let Some((s, t)) = root {
            if !roots.iter().any(|(s2, t2)| (s-s2).abs() <= param_tolerance && (t-t2).abs() <= param_tolerance) {
                trace!("Root at s = {}, t = {}", s, t);
                roots.push((s, t));
            }
        }
    }

    // Swap back and sort
    let mut roots = roots.into_iter()
        .map(|(s, t)| if implicit_first { (t, s) } else { (s, t) })
        .collect::<SmallVec<[(f64, f64); 8]>>();
    roots.sort_by(|(s1, t1), (s2, t2)| s1.partial_cmp(s2).unwrap_or(Ordering::Equal).then(t1.partial_cmp(t2).unwrap_or(Ordering::Equal)));

    debug!("Found {} intersections", roots.len());

    Ok(roots.into_iter()
        .map(|(s, t)| Intersection::new(first, second, s, t))
        .collect())
}

///
/// Finds the end points of either curve that lie on the other curve
///
/// End points that are shared by both curves have exact parameters
///
fn end_point_roots<Coord: Coordinate>(parametric: &Curve<Coord>, implicit: &Curve<Coord>, tolerance: f64, param_tolerance: f64) -> SmallVec<[(f64, f64); 8]> {
    let mut roots   = SmallVec::<[(f64, f64); 8]>::new();
    let mut add     = |(s, t): (f64, f64)| {
        if !roots.iter().any(|(s2, t2)| (s-s2).abs() <= param_tolerance && (t-t2).abs() <= param_tolerance) {
            roots.push((s, t));
        }
    };

    for s in [0.0, 1.0].iter() {
        let point = parametric.evaluate(*s);

        if point == implicit.start_point() {
            add((*s, 0.0));
        } else if point == implicit.end_point() {
            add((*s, 1.0));
        } else if let Some(t) = implicit.parameter_for_point(&point, tolerance) {
            add((*s, t));
        }
    }

    for t in [0.0, 1.0].iter() {
        let point = implicit.evaluate(*t);

        if point == parametric.start_point() {
            add((0.0, *t));
        } else if point == parametric.end_point() {
            add((1.0, *t));
        } else if let Some(s) = parametric.parameter_for_point(&point, tolerance) {
            add((s, *t));
        }
    }

    roots
}

///
/// Turns a candidate section into a root, or returns `None` if there's no intersection there
///
fn refine_candidate<Coord>(finder: &RootFinder<Coord>, parametric: &Curve<Coord>, implicit: &Curve<Coord>, start: f64, match_tolerance: f64, param_tolerance: f64) -> BezierResult<Option<(f64, f64)>>
where Coord: Coordinate+Coordinate2D {
    // Find where the parametric curve crosses the algebraic curve
    let s = match finder.newton(start)? {
        Some(s) => s,
        None    => { return Ok(None); }
    };

    // Parameters slightly outside the curve are moved onto its end points
    let s = if s < 0.0 && s >= -param_tolerance { 0.0 } else if s > 1.0 && s <= 1.0+param_tolerance { 1.0 } else { s };
    if s < 0.0 || s > 1.0 {
        trace!("Rejected root at s = {}: outside of the curve", s);
        return Ok(None);
    }

    // Find the matching point on the implicitized curve (the algebraic curve continues past its end points)
    let point = parametric.evaluate(s);
    let t = match implicit.parameter_for_point(&point, match_tolerance) {
        Some(t) => t,
        None    => {
            trace!("Rejected root at s = {}: not on the implicitized curve", s);
            return Ok(None);
        }
    };

    let (s, t) = finder.polish(s, t);
    let s = s.max(0.0).min(1.0);
    let t = t.max(0.0).min(1.0);

    let distance = parametric.evaluate(s).distance_to(&implicit.evaluate(t));
    if distance > match_tolerance {
        if t == 0.0 || t == 1.0 {
            // The root is on the algebraic curve just past the end of the implicitized curve
            trace!("Rejected root at s = {}, t = {}: beyond the end of the curve", s, t);
            return Ok(None);
        }

        warn!("Root at s = {}, t = {} is {} away from the other curve", s, t, distance);
        return Err(BezierError::ToleranceExceeded { s: s, t: t, distance: distance, tolerance: match_tolerance });
    }

    Ok(Some((s, t)))
}
