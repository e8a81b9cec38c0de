//! Bisection root finder.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Bisection root finder.
///
/// Halves a sign-changing bracket until `|f(x)| < tolerance` or the bracket
/// half-width falls below the tolerance.
///
/// # Example
///
/// ```
/// use spectro_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::default());
///
/// // Thickness at which exp(-2 t) = 0.5
/// let root = solver.find_root(|t: f64| (-2.0 * t).exp() - 0.5, 0.0, 5.0).unwrap();
/// assert!((root - std::f64::consts::LN_2 / 2.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` in the bracket `[a, b]`.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Approximate root
    /// * `Err(SolverError::NoBracket)` - `f(a)` and `f(b)` have same sign
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let (mut lo, mut hi) = if a <= b { (a, b) } else { (b, a) };
        let mut f_lo = f(lo);
        let f_hi = f(hi);

        if f_lo == T::zero() {
            return Ok(lo);
        }
        if f_hi == T::zero() {
            return Ok(hi);
        }
        if f_lo * f_hi > T::zero() {
            return Err(SolverError::NoBracket {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }

        let two = T::one() + T::one();
        for _ in 0..self.config.max_iterations {
            let mid = (lo + hi) / two;
            let f_mid = f(mid);

            if f_mid.abs() < self.config.tolerance || (hi - lo) / two < self.config.tolerance {
                return Ok(mid);
            }

            if f_lo * f_mid < T::zero() {
                hi = mid;
            } else {
                lo = mid;
                f_lo = f_mid;
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }
}
