//! Bisection settings.

use crate::types::SolverError;
use num_traits::Float;

/// Stopping rule of [`BisectionSolver`](super::BisectionSolver).
///
/// The search ends when `|f(x)| < tolerance`, when the bracket half-width
/// falls below `tolerance`, or with `SolverError::MaxIterationsExceeded`
/// after `max_iterations` halvings.
///
/// ```
/// use spectro_core::math::solvers::SolverConfig;
///
/// let config = SolverConfig::new(1e-12, 200).unwrap();
/// assert_eq!(config.max_iterations, 200);
/// assert!(SolverConfig::new(0.0, 10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Residual and bracket tolerance.
    pub tolerance: T,
    /// Halvings allowed before giving up.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// `1e-10` and 100 iterations.
    fn default() -> Self {
        Self::preset(1e-10, 100)
    }
}

impl<T: Float> SolverConfig<T> {
    fn preset(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance: T::from(tolerance).unwrap_or_else(T::epsilon),
            max_iterations,
        }
    }

    /// Validated settings.
    ///
    /// # Errors
    ///
    /// `SolverError::NumericalInstability` unless `tolerance` is positive
    /// and finite and `max_iterations` is non-zero.
    pub fn new(tolerance: T, max_iterations: usize) -> Result<Self, SolverError> {
        if !(tolerance > T::zero() && tolerance.is_finite()) {
            return Err(SolverError::NumericalInstability(
                "tolerance must be a positive finite number".to_string(),
            ));
        }
        if max_iterations == 0 {
            return Err(SolverError::NumericalInstability(
                "max_iterations must be non-zero".to_string(),
            ));
        }
        Ok(Self {
            tolerance,
            max_iterations,
        })
    }

    /// `1e-14` and 500 iterations.
    pub fn high_precision() -> Self {
        Self::preset(1e-14, 500)
    }

    /// `1e-6` and 50 iterations.
    pub fn fast() -> Self {
        Self::preset(1e-6, 50)
    }
}
