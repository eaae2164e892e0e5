/// Default number of units in the last place two values may differ by and still be considered equal
pub const DEFAULT_WIGGLE: u32 = 8;

/// Default number of times a pair of curves is halved while isolating intersections
pub const DEFAULT_MAX_DEPTH: usize = 12;

/// Default number of candidate pairs that may survive a subdivision level before the curves are treated as coincident
pub const DEFAULT_MAX_CANDIDATES: usize = 1024;

/// Default iteration limit for the Newton iterations used to polish roots
pub const DEFAULT_MAX_NEWTON_ITERATIONS: usize = 100;

/// Absolute tolerance used when checking that barycentric coordinates add up to 1
pub const BARYCENTRIC_TOLERANCE: f64 = 1e-8;

/// Relative tolerance used when checking that barycentric coordinates add up to 1
pub const BARYCENTRIC_RELATIVE_TOLERANCE: f64 = 1e-5;

/// Subdivision matrices up to this degree are built once and kept for the lifetime of the process (implicit residuals along a cubic reach degree 12)
pub const MAX_CACHED_SUBDIVISION_DEGREE: usize = 12;

/// Number of panels used when integrating the length of a curve
pub const LENGTH_PANELS: usize = 16;
