use thiserror::Error;

///
/// The kind of shape an error refers to
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Curve,
    Surface
}

///
/// Separates errors caused by bad input from errors caused by cases the kernel does not handle yet
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied values outside the domain of the operation
    InputDomain,

    /// The input is valid but describes a case that is not implemented (a higher degree, coincident curves...)
    Unsupported
}

///
/// Errors that can result from an operation on a Bezier shape
///
#[derive(Error, Clone, Debug, PartialEq)]
pub enum BezierError {
    /// The number of nodes does not correspond to any degree for this kind of shape
    #[error("{count} nodes is not a valid number of nodes for a {shape:?}")]
    InvalidNodeCount { shape: ShapeKind, count: usize },

    /// Barycentric coordinates must be non-negative and add up to 1
    #[error("invalid barycentric coordinates ({lambda1}, {lambda2}, {lambda3}): {reason}")]
    InvalidBarycentric { lambda1: f64, lambda2: f64, lambda3: f64, reason: &'static str },

    /// A curve of degree 0 has no implicit equation
    #[error("a point cannot be implicitized")]
    PointImplicitization,

    /// A parameter was outside of the range accepted by the operation
    #[error("parameter {value} is outside of the accepted range")]
    InvalidParameter { value: f64 },

    /// The operation only supports some degrees
    #[error("{operation} is not implemented for degree {degree}")]
    UnsupportedDegree { operation: &'static str, degree: usize },

    /// Surface area has not been implemented
    #[error("area computation is not implemented")]
    AreaNotImplemented,

    /// The two curves share an arc, so they have infinitely many intersections
    #[error("curves are coincident over s in {first:?} and t in {second:?}")]
    CoincidentCurves { first: (f64, f64), second: (f64, f64) },

    /// Too many pairs of curve sections stayed close to each other while subdividing
    #[error("{count} candidate intersections at subdivision depth {depth}: the curves may be coincident")]
    TooManyCandidates { depth: usize, count: usize },

    /// A root was found but the two curves do not agree closely enough there
    #[error("root at s = {s}, t = {t} is {distance} apart, more than the tolerance of {tolerance}")]
    ToleranceExceeded { s: f64, t: f64, distance: f64, tolerance: f64 }
}

impl BezierError {
    ///
    /// Whether this error is caused by bad input or by a known gap in what the kernel supports
    ///
    pub fn kind(&self) -> ErrorKind {
        use self::BezierError::*;

        match self {
            InvalidNodeCount { .. }
            | InvalidBarycentric { .. }
            | PointImplicitization
            | InvalidParameter { .. }       => ErrorKind::InputDomain,

            UnsupportedDegree { .. }
            | AreaNotImplemented
            | CoincidentCurves { .. }
            | TooManyCandidates { .. }
            | ToleranceExceeded { .. }      => ErrorKind::Unsupported
        }
    }

    #[inline]
    pub fn is_input_domain(&self) -> bool {
        self.kind() == ErrorKind::InputDomain
    }

    #[inline]
    pub fn is_unsupported(&self) -> bool {
        self.kind() == ErrorKind::Unsupported
    }
}

/// Result type for operations on Bezier shapes
pub type BezierResult<T> = Result<T, BezierError>;
