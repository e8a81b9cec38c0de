//! Step-halving search for decreasing response curves.

use crate::types::SolverError;
use num_traits::Float;
use tracing::{debug, warn};

/// Step-halving search for `f(t) = goal` with `f` decreasing in `t`.
///
/// Starting at `initial` with step `initial`, every iteration halves the
/// step, evaluates `f` and moves up while `f(t)` lies above the goal and down
/// otherwise. The search stops once `|f(t) - goal| < goal_tolerance` or the
/// step falls to `step_tolerance`; `t` never goes below zero.
///
/// This is the search used to locate attenuation layers: with the defaults
/// (`initial = 20`, `step_tolerance = 1e-6`, `goal_tolerance = 5e-6`) the
/// reachable range is `(0, 40)`.
///
/// # Example
///
/// ```
/// use spectro_core::math::solvers::HalvingSearch;
///
/// let search = HalvingSearch::default();
/// let t = search.find(|t: f64| (-3.0 * t).exp(), 0.5).unwrap();
/// assert!((t - std::f64::consts::LN_2 / 3.0).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HalvingSearch<T: Float> {
    /// Starting point and first step.
    pub initial: T,
    /// Smallest step before the search stops.
    pub step_tolerance: T,
    /// Accepted distance between `f(t)` and the goal.
    pub goal_tolerance: T,
}

impl<T: Float> Default for HalvingSearch<T> {
    fn default() -> Self {
        Self {
            initial: T::from(20.0).unwrap_or_else(T::one),
            step_tolerance: T::from(1e-6).unwrap_or_else(T::epsilon),
            goal_tolerance: T::from(5e-6).unwrap_or_else(T::epsilon),
        }
    }
}

impl<T: Float> HalvingSearch<T> {
    /// Create a search with explicit parameters.
    ///
    /// # Errors
    ///
    /// `SolverError::NumericalInstability` if any parameter is not a
    /// positive finite number.
    pub fn new(initial: T, step_tolerance: T, goal_tolerance: T) -> Result<Self, SolverError> {
        for (name, value) in [
            ("initial", initial),
            ("step_tolerance", step_tolerance),
            ("goal_tolerance", goal_tolerance),
        ] {
            if !(value > T::zero()) || !value.is_finite() {
                return Err(SolverError::NumericalInstability(format!(
                    "{} must be a positive finite number",
                    name
                )));
            }
        }
        Ok(Self {
            initial,
            step_tolerance,
            goal_tolerance,
        })
    }

    /// Search for the point where the decreasing function `f` meets `goal`.
    ///
    /// When the step tolerance is exhausted before the goal tolerance is met,
    /// the last visited point is returned only if the search has seen `f` on
    /// both sides of the goal, which pins the crossing to within the final
    /// step.
    ///
    /// # Errors
    ///
    /// * `SolverError::NumericalInstability` - `f` returns NaN
    /// * `SolverError::NoConvergence` - The crossing lies outside the
    ///   reachable range `[0, 2 * initial)`
    pub fn find<F>(&self, f: F, goal: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let two = T::one() + T::one();
        let mut t = self.initial;
        let mut step = self.initial;
        let mut iterations = 0usize;
        let mut seen_above = false;
        let mut seen_below = false;
        let mut residual = T::nan();

        while step > self.step_tolerance {
            step = step / two;
            iterations += 1;

            let value = f(t);
            if value.is_nan() {
                return Err(SolverError::NumericalInstability(format!(
                    "response is NaN at t = {}",
                    t.to_f64().unwrap_or(f64::NAN)
                )));
            }

            residual = value - goal;
            if residual.abs() < self.goal_tolerance {
                debug!(iterations, "halving search converged");
                return Ok(t);
            }

            if value > goal {
                seen_above = true;
                t = t + step;
            } else {
                seen_below = true;
                t = (t - step).max(T::zero());
            }
        }

        if seen_above && seen_below {
            debug!(iterations, "halving search reached step tolerance");
            return Ok(t);
        }

        let t = t.to_f64().unwrap_or(f64::NAN);
        let residual = residual.to_f64().unwrap_or(f64::NAN);
        warn!(t, residual, "halving search left its reachable range");
        Err(SolverError::NoConvergence { t, residual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_parameters() {
        let search: HalvingSearch<f64> = HalvingSearch::default();
        assert_eq!(search.initial, 20.0);
        assert_relative_eq!(search.step_tolerance, 1e-6);
        assert_relative_eq!(search.goal_tolerance, 5e-6);
    }

    #[test]
    fn test_finds_half_value_of_exponential() {
        let mu = 1.7;
        let search = HalvingSearch::default();
        let t = search.find(|t: f64| (-mu * t).exp(), 0.5).unwrap();
        assert!(((-mu * t).exp() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_quarter_value_is_twice_half_value() {
        let search = HalvingSearch::default();
        let half = search.find(|t: f64| (-0.8 * t).exp(), 0.5).unwrap();
        let quarter = search.find(|t: f64| (-0.8 * t).exp(), 0.25).unwrap();
        assert_relative_eq!(quarter, 2.0 * half, epsilon = 1e-4);
    }

    #[test]
    fn test_goal_above_start_never_goes_negative() {
        // f(0) = 1 < goal: the search slides down to zero and reports failure
        let search = HalvingSearch::default();
        match search.find(|t: f64| (-t).exp(), 2.0) {
            Err(SolverError::NoConvergence { t, residual }) => {
                assert!(t >= 0.0);
                assert!(t < 1e-4);
                assert!(residual < 0.0);
            }
            other => panic!("expected NoConvergence, got {:?}", other),
        }
    }

    // ========================================
    // Reachable Range Tests
    // ========================================

    #[test]
    fn test_crossing_beyond_range_is_error() {
        // True crossing at ln 2 / 0.01 = 69.3, beyond the reachable 40
        let search = HalvingSearch::default();
        let result = search.find(|t: f64| (-0.01 * t).exp(), 0.5);
        match result {
            Err(SolverError::NoConvergence { t, residual }) => {
                assert_relative_eq!(t, 40.0, epsilon = 1e-5);
                assert!(residual > 0.1);
            }
            other => panic!("expected NoConvergence, got {:?}", other),
        }
    }

    #[test]
    fn test_larger_initial_reaches_far_crossing() {
        let search = HalvingSearch::new(100.0, 1e-7, 5e-7).unwrap();
        let t = search.find(|t: f64| (-0.01 * t).exp(), 0.5).unwrap();
        assert_relative_eq!(t, std::f64::consts::LN_2 / 0.01, epsilon = 1e-4);
    }

    #[test]
    fn test_bracketed_steep_crossing_is_accepted() {
        // Steep enough that the goal tolerance cannot be met at the final step
        let search = HalvingSearch::new(1.0, 1e-6, 1e-12).unwrap();
        let t = search.find(|t: f64| (-1000.0 * t).exp(), 0.5).unwrap();
        assert_relative_eq!(t, std::f64::consts::LN_2 / 1000.0, epsilon = 2e-6);
    }

    #[test]
    fn test_nan_response_is_error() {
        let search = HalvingSearch::default();
        assert!(search.find(|_t: f64| f64::NAN, 0.5).is_err());
    }

    #[test]
    fn test_new_rejects_non_positive() {
        assert!(HalvingSearch::new(0.0, 1e-6, 1e-6).is_err());
        assert!(HalvingSearch::new(1.0, -1.0, 1e-6).is_err());
        assert!(HalvingSearch::new(1.0, 1e-6, f64::INFINITY).is_err());
        assert!(HalvingSearch::new(1.0, 1e-6, 1e-6).is_ok());
    }
}
