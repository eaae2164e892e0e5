use super::options::*;
use super::super::error::*;
use super::super::bezier::*;
use super::super::coordinate::*;

/// Step used for the central difference that estimates the derivative of the implicit residual
const DIFFERENCE_STEP: f64 = 1e-6;

/// Newton iterations allowed without the residual improving
const MAX_STALLED_STEPS: usize = 4;

///
/// Finds roots where a parametric curve crosses the algebraic curve of an implicitized curve
///
pub(crate) struct RootFinder<'a, Coord: Coordinate+Coordinate2D> {
    /// The curve that is evaluated parametrically
    parametric: &'a Curve<Coord>,

    /// The curve that is implicitized (reduced so that it's not degree-elevated)
    implicit: &'a Curve<Coord>,

    options: &'a IntersectionOptions
}

impl<'a, Coord: Coordinate+Coordinate2D> RootFinder<'a, Coord> {
    pub fn new(parametric: &'a Curve<Coord>, implicit: &'a Curve<Coord>, options: &'a IntersectionOptions) -> RootFinder<'a, Coord> {
        RootFinder { parametric, implicit, options }
    }

    ///
    /// The value of the implicit equation at the point `s` on the parametric curve
    ///
    #[inline]
    fn residual(&self, s: f64) -> BezierResult<f64> {
        let point = self.parametric.evaluate(s);
        self.implicit.implicit_at(point.x(), point.y())
    }

    ///
    /// Uses Newton's method to find where the implicit residual vanishes, starting at `s`
    ///
    /// Near a multiple root the residual stops improving long before the steps become small, so the
    /// iteration stops after a few steps without improvement and returns the best parameter it found.
    /// Returns `None` if the iteration leaves the area around the curve.
    ///
    pub fn newton(&self, s: f64) -> BezierResult<Option<f64>> {
        let mut s           = s;
        let mut best        = (s, self.residual(s)?.abs());
        let mut stalled     = 0;

        for _ in 0..self.options.max_newton_iterations {
            let residual = self.residual(s)?;
            if residual == 0.0 { return Ok(Some(s)); }

            if residual.abs() < best.1 {
                best    = (s, residual.abs());
                stalled = 0;
            } else {
                stalled += 1;
                if stalled > MAX_STALLED_STEPS { break; }
            }

            let slope = (self.residual(s + DIFFERENCE_STEP)? - self.residual(s - DIFFERENCE_STEP)?) / (2.0*DIFFERENCE_STEP);
            if slope == 0.0 || !slope.is_finite() { break; }

            let step = residual / slope;
            s -= step;

            if !s.is_finite() || s < -1.0 || s > 2.0 {
                return Ok(None);
            }

            if step.abs() <= f64::EPSILON * s.abs().max(1.0) {
                let residual = self.residual(s)?.abs();
                if residual <= best.1 { best = (s, residual); }
                break;
            }
        }

        Ok(Some(best.0))
    }

    ///
    /// Refines a root by using Newton's method to find where the two curves meet
    ///
    /// The refined root is only used if it brings the curves closer together. When the curves meet at a
    /// shallow angle the problem is too badly conditioned to improve on the original root.
    ///
    pub fn polish(&self, s: f64, t: f64) -> (f64, f64) {
        let distance_at = |s: f64, t: f64| self.parametric.evaluate(s).distance_to(&self.implicit.evaluate(t));

        let (mut s, mut t)  = (s, t);
        let original        = (s, t, distance_at(s, t));
        let min_sine        = self.options.parameter_tolerance();

        for _ in 0..self.options.max_newton_iterations {
            let offset          = self.parametric.evaluate(s) - self.implicit.evaluate(t);
            let tangent1        = self.parametric.evaluate_hodograph(s);
            let tangent2        = self.implicit.evaluate_hodograph(t);

            let det             = tangent2.x()*tangent1.y() - tangent1.x()*tangent2.y();
            if det.abs() <= min_sine * tangent1.magnitude() * tangent2.magnitude() { break; }

            let ds              = (offset.x()*tangent2.y() - tangent2.x()*offset.y()) / det;
            let dt              = (offset.x()*tangent1.y() - tangent1.x()*offset.y()) / det;

            s += ds;
            t += dt;

            if !s.is_finite() || !t.is_finite() { return (original.0, original.1); }
            if ds.abs() <= f64::EPSILON && dt.abs() <= f64::EPSILON { break; }
        }

        if distance_at(s, t) <= original.2 {
            (s, t)
        } else {
            (original.0, original.1)
        }
    }
}
