//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from interpolation kernels and dispatch
//! - `SolverError`: Errors from root-finding and layer searches
//! - `DataError`: Errors from dataset and spectrum construction

use thiserror::Error;

/// Interpolation-related errors.
///
/// Provides structured error handling for interpolation operations
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `OutOfBounds`: Query point outside valid interpolation domain
/// - `InsufficientData`: Not enough data points for the requested method
/// - `NonMonotonicData`: Repeated abscissa after sorting
/// - `NonFiniteData`: NaN or infinite value in the data
/// - `InvalidLogDomain`: Non-positive value where a logarithm is required
/// - `UnknownMethod`: Method name not recognised
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use spectro_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Abscissae are not strictly increasing once sorted.
    #[error("Data is not strictly increasing at index {index}")]
    NonMonotonicData {
        /// Index (in sorted order) of the repeated abscissa
        index: usize,
    },

    /// Data contains NaN or infinite values.
    #[error("Array must not contain infs or nans (index {index})")]
    NonFiniteData {
        /// Index of the first offending point
        index: usize,
    },

    /// A value that must be log-transformed is not strictly positive.
    #[error("Logarithmic scale requires positive values: {axis}[{index}] = {value}")]
    InvalidLogDomain {
        /// Which array held the value (`x`, `y` or `x_new`)
        axis: String,
        /// Position of the value in that array
        index: usize,
        /// The offending value
        value: f64,
    },

    /// Unrecognised interpolation method name.
    #[error(
        "Unknown method '{0}'. Interpolation methods: PiecewiseLinear, CubicSpline, Pchip, Akima1D, B-splines"
    )]
    UnknownMethod(String),

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Root-finding solver errors.
///
/// # Examples
/// ```
/// use spectro_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Search steps exhausted without reaching the goal.
    #[error("No convergence: stopped at t = {t} with residual {residual}")]
    NoConvergence {
        /// Last point visited
        t: f64,
        /// `f(t) - goal` at that point
        residual: f64,
    },
}

/// Dataset and spectrum construction errors.
///
/// The constructor messages keep the wording users of the interpolation
/// front end already match on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// Neither or both of the `x`/`y` pair and `data` were supplied.
    #[error("Interpolator constructor failed. Provide either 'x' and 'y' or 'data'.")]
    ArgumentCombination,

    /// A text element could not be parsed as a number.
    #[error("Interpolator constructor failed. Elements of arguments must be numerical. Got '{value}'.")]
    NonNumeric {
        /// The raw element
        value: String,
    },

    /// `x` and `y` have different lengths.
    #[error("x and y must have same length: got {x} and {y}")]
    LengthMismatch {
        /// Length of x
        x: usize,
        /// Length of y
        y: usize,
    },

    /// A named column is missing from column-keyed input.
    #[error("Interpolator constructor failed. Data is missing the '{0}' column.")]
    MissingColumn(String),

    /// Interpolation failed on validated data.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}
