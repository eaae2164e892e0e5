use super::options::*;
use super::super::geo::*;
use super::super::error::*;
use super::super::shape::*;
use super::super::bezier::*;
use super::super::implicit::*;
use super::super::coordinate::*;

use smallvec::*;

///
/// A section of a curve, along with the range of parameters it covers on the original curve
///
/// The section can also carry the residual of the other curve's implicit equation along it, as Bernstein
/// coefficients that are split along with the nodes.
///
#[derive(Clone, Debug)]
pub(crate) struct CurveSection<Coord: Coordinate> {
    curve:      Curve<Coord>,
    residual:   SmallVec<[f64; 16]>,
    start:      f64,
    end:        f64
}

impl<Coord: Coordinate> CurveSection<Coord> {
    ///
    /// A section covering the whole of a curve
    ///
    pub fn whole(curve: &Curve<Coord>) -> CurveSection<Coord> {
        CurveSection { curve: curve.clone(), residual: smallvec![], start: 0.0, end: 1.0 }
    }

    ///
    /// A section covering the whole of a curve, which tracks the residual of an implicit equation along it
    ///
    pub fn with_residual(curve: &Curve<Coord>, residual: SmallVec<[f64; 16]>) -> CurveSection<Coord> {
        CurveSection { curve: curve.clone(), residual: residual, start: 0.0, end: 1.0 }
    }

    ///
    /// The parameter on the original curve at the middle of this section
    ///
    #[inline]
    pub fn mid_point(&self) -> f64 {
        (self.start + self.end) * 0.5
    }

    #[inline]
    pub fn bounds(&self) -> Bounds<Coord> {
        self.curve.control_bounds()
    }

    ///
    /// False if the residual has the same sign everywhere in this section (so the section can't contain a root)
    ///
    /// Coefficients within `tolerance` of 0 count as either sign. Sections without a residual may always contain a root.
    ///
    pub fn may_contain_root(&self, tolerance: f64) -> bool {
        let all_above = self.residual.iter().all(|coefficient| *coefficient > tolerance);
        let all_below = self.residual.iter().all(|coefficient| *coefficient < -tolerance);

        self.residual.is_empty() || !(all_above || all_below)
    }

    ///
    /// Splits this section in half
    ///
    /// Points have nothing to split, so a degree 0 section is returned unchanged
    ///
    pub fn split(&self) -> SmallVec<[CurveSection<Coord>; 2]> {
        if self.curve.degree() == 0 {
            smallvec![self.clone()]
        } else {
            let (left, right) = self.curve.subdivide();
            let (left_residual, right_residual): (SmallVec<[f64; 16]>, SmallVec<[f64; 16]>) = if self.residual.is_empty() {
                (smallvec![], smallvec![])
            } else {
                let (left, right) = subdivide_nodes(&self.residual[..]);
                (left.into_iter().collect(), right.into_iter().collect())
            };
            let mid_point = self.mid_point();

            smallvec![
                CurveSection { curve: left, residual: left_residual, start: self.start, end: mid_point },
                CurveSection { curve: right, residual: right_residual, start: mid_point, end: self.end }
            ]
        }
    }
}

///
/// Finds the pairs of small sections of two curves that may contain an intersection
///
/// Both curves are halved `max_depth` times. After each level, only the pairs whose control point
/// bounding boxes touch are kept. The residual of the implicit equation of `implicit` is tracked along
/// `parametric`, and sections of `parametric` where it has a single sign are dropped: this is what
/// keeps the number of candidates small when the curves run close to each other.
///
/// `implicit` must have degree 1 or 2.
///
pub(crate) fn candidate_sections<Coord: Coordinate+Coordinate2D>(parametric: &Curve<Coord>, implicit: &Curve<Coord>, options: &IntersectionOptions) -> BezierResult<Vec<(CurveSection<Coord>, CurveSection<Coord>)>> {
    let residual            = implicit_on_curve(implicit.nodes(), parametric.nodes())?;
    let largest_residual    = residual.iter().fold(0.0, |largest: f64, coefficient| largest.max(coefficient.abs()));
    let residual_tolerance  = options.parameter_tolerance() * largest_residual;

    let parametric          = CurveSection::with_residual(parametric, residual);
    let implicit            = CurveSection::whole(implicit);

    if !parametric.may_contain_root(residual_tolerance) || !parametric.bounds().overlaps(&implicit.bounds()) {
        return Ok(vec![]);
    }

    let mut candidates  = vec![(parametric, implicit)];

    for depth in 1..=options.max_depth {
        let mut next_candidates = vec![];

        for (parametric, implicit) in candidates.iter() {
            let parametric_split    = parametric.split();
            let implicit_split      = implicit.split();

            for parametric_section in parametric_split.iter() {
                if !parametric_section.may_contain_root(residual_tolerance) {
                    continue;
                }

                let parametric_bounds = parametric_section.bounds();

                for implicit_section in implicit_split.iter() {
                    if parametric_bounds.overlaps(&implicit_section.bounds()) {
                        next_candidates.push((parametric_section.clone(), implicit_section.clone()));
                    }
                }
            }
        }

        trace!("Subdivision level {}: {} candidates", depth, next_candidates.len());

        if next_candidates.len() > options.max_candidates {
            warn!("{} candidate sections at subdivision level {}: curves may be coincident", next_candidates.len(), depth);
            return Err(BezierError::TooManyCandidates { depth: depth, count: next_candidates.len() });
        }

        candidates = next_candidates;

        if candidates.is_empty() {
            break;
        }
    }

    Ok(candidates)
}
