use super::super::consts::*;

///
/// Settings for the intersection engine
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntersectionOptions {
    /// Number of units in the last place that values may differ by and still be considered equal
    pub wiggle: u32,

    /// Number of times the curves are halved while looking for candidate intersections
    pub max_depth: usize,

    /// Number of pairs of curve sections allowed to survive a subdivision level
    pub max_candidates: usize,

    /// Iteration limit when refining a root
    pub max_newton_iterations: usize
}

impl Default for IntersectionOptions {
    fn default() -> IntersectionOptions {
        IntersectionOptions {
            wiggle:                 DEFAULT_WIGGLE,
            max_depth:              DEFAULT_MAX_DEPTH,
            max_candidates:         DEFAULT_MAX_CANDIDATES,
            max_newton_iterations:  DEFAULT_MAX_NEWTON_ITERATIONS
        }
    }
}

impl IntersectionOptions {
    pub fn new() -> IntersectionOptions {
        Self::default()
    }

    pub fn with_wiggle(mut self, wiggle: u32) -> IntersectionOptions {
        self.wiggle = wiggle;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> IntersectionOptions {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_candidates(mut self, max_candidates: usize) -> IntersectionOptions {
        self.max_candidates = max_candidates;
        self
    }

    pub fn with_max_newton_iterations(mut self, max_newton_iterations: usize) -> IntersectionOptions {
        self.max_newton_iterations = max_newton_iterations;
        self
    }

    ///
    /// Distance that two points on curves of the specified scale can be apart and still be considered the same
    ///
    #[inline]
    pub fn point_tolerance(&self, scale: f64) -> f64 {
        (self.wiggle as f64) * f64::EPSILON * scale
    }

    ///
    /// Difference allowed between two parameters that refer to the same intersection
    ///
    /// Multiple roots can only be found to about the square root of the working precision, so this is much
    /// wider than the point tolerance
    ///
    #[inline]
    pub fn parameter_tolerance(&self) -> f64 {
        f64::sqrt((self.wiggle as f64) * f64::EPSILON)
    }
}

///
/// True if `a` and `b` are within `wiggle` units in the last place of each other
///
pub fn approx_equal_ulps(a: f64, b: f64, wiggle: u32) -> bool {
    if a == b {
        true
    } else {
        let largest = a.abs().max(b.abs());
        (a - b).abs() <= (wiggle as f64) * f64::EPSILON * largest
    }
}
