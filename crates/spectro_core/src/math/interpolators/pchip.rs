//! PCHIP (Piecewise Cubic Hermite Interpolating Polynomial) interpolation.
//!
//! A shape-preserving interpolant:
//! - Passes through all data points
//! - Preserves monotonicity of the data (no overshoot)
//! - Has continuous first derivative only
//!
//! # Algorithm
//!
//! 1. Where adjacent secants share a sign, the knot slope is their weighted
//!    harmonic mean (Fritsch–Butland weights `2h_k + h_{k-1}` and
//!    `h_k + 2h_{k-1}`)
//! 2. Where the secants differ in sign or either is zero, the slope is zero
//! 3. End slopes use a one-sided three-point formula, limited so that the
//!    end segments do not overshoot

use super::hermite::{evaluate_segments, hermite_coefficients, secants, SplineCoeffs};
use super::traits::prepare_samples;
use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Monotone piecewise cubic Hermite interpolator.
///
/// # Example
///
/// ```
/// use spectro_core::math::interpolators::{Interpolator, PchipInterpolator};
///
/// let interp = PchipInterpolator::new(&[0.0, 1.0, 2.0, 3.0], &[0.0, 0.1, 0.9, 1.0]).unwrap();
/// let y = interp.interpolate(1.5).unwrap();
/// assert!(y > 0.1 && y < 0.9);
/// ```
#[derive(Debug, Clone)]
pub struct PchipInterpolator<T: Float> {
    xs: Vec<T>,
    slopes: Vec<T>,
    coeffs: Vec<SplineCoeffs<T>>,
}

impl<T: Float> PchipInterpolator<T> {
    /// Construct a Pchip interpolator. Requires at least 2 points.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::InvalidInput` - Mismatched array lengths
    /// * `InterpolationError::InsufficientData` - Fewer than 2 points
    /// * `InterpolationError::NonFiniteData` - NaN or infinite value
    /// * `InterpolationError::NonMonotonicData` - Repeated abscissa
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        let (xs, ys) = prepare_samples(xs, ys, 2)?;
        let slopes = Self::compute_slopes(&xs, &ys);
        let coeffs = hermite_coefficients(&xs, &ys, &slopes);
        Ok(Self { xs, slopes, coeffs })
    }

    fn compute_slopes(xs: &[T], ys: &[T]) -> Vec<T> {
        let n = xs.len();
        let (h, m) = secants(xs, ys);

        if n == 2 {
            return vec![m[0], m[0]];
        }

        let two = T::one() + T::one();
        let mut slopes = vec![T::zero(); n];

        for k in 1..n - 1 {
            let m0 = m[k - 1];
            let m1 = m[k];
            if m0 == T::zero() || m1 == T::zero() || m0.signum() != m1.signum() {
                continue;
            }
            let w1 = two * h[k] + h[k - 1];
            let w2 = h[k] + two * h[k - 1];
            slopes[k] = (w1 + w2) / (w1 / m0 + w2 / m1);
        }

        slopes[0] = Self::endpoint_slope(h[0], h[1], m[0], m[1]);
        slopes[n - 1] = Self::endpoint_slope(h[n - 2], h[n - 3], m[n - 2], m[n - 3]);

        slopes
    }

    /// One-sided three-point end slope with the shape-preserving limiter.
    fn endpoint_slope(h0: T, h1: T, m0: T, m1: T) -> T {
        let two = T::one() + T::one();
        let three = two + T::one();

        let d = ((two * h0 + h1) * m0 - h0 * m1) / (h0 + h1);

        if d.signum() != m0.signum() || d == T::zero() {
            T::zero()
        } else if m0.signum() != m1.signum() && d.abs() > three * m0.abs() {
            three * m0
        } else {
            d
        }
    }

    /// Returns a reference to the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Slopes at the knots.
    #[inline]
    pub fn slopes(&self) -> &[T] {
        &self.slopes
    }
}

impl<T: Float> Interpolator<T> for PchipInterpolator<T> {
    #[inline]
    fn evaluate(&self, x: T) -> T {
        evaluate_segments(&self.xs, &self.coeffs, x)
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reproduces_straight_line() {
        let xs = [0.0, 1.0, 3.0, 4.0];
        let ys = [1.0, 3.0, 7.0, 9.0];
        let interp = PchipInterpolator::new(&xs, &ys).unwrap();
        for x in [0.5, 2.0, 3.7] {
            assert_relative_eq!(interp.interpolate(x).unwrap(), 1.0 + 2.0 * x, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_two_points_is_linear() {
        let interp = PchipInterpolator::new(&[1.0, 3.0], &[2.0, 6.0]).unwrap();
        assert_relative_eq!(interp.interpolate(2.0).unwrap(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_local_extremum_has_zero_slope() {
        let interp = PchipInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
        assert_eq!(interp.slopes()[1], 0.0);
    }

    #[test]
    fn test_no_overshoot_on_step_data() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [0.0, 0.0, 1.0, 1.0, 1.0];
        let interp = PchipInterpolator::new(&xs, &ys).unwrap();
        let mut prev = f64::NEG_INFINITY;
        for i in 0..=400 {
            let x = i as f64 * 0.01;
            let y = interp.interpolate(x).unwrap();
            assert!(y >= -1e-12 && y <= 1.0 + 1e-12);
            assert!(y >= prev - 1e-12);
            prev = y;
        }
    }

    #[test]
    fn test_endpoint_slope_matches_three_point_formula() {
        // h0 = 1, h1 = 1, m0 = 1, m1 = 2: d = (3*1 - 1*2) / 2 = 0.5
        let interp = PchipInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 3.0]).unwrap();
        assert_relative_eq!(interp.slopes()[0], 0.5, epsilon = 1e-12);
        // interior: w1 = w2 = 3, harmonic mean of 1 and 2 = 4/3
        assert_relative_eq!(interp.slopes()[1], 4.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_endpoint_slope_sign_limiter() {
        // d = (3*1 - 1*(-5)) / 2 = 4 > 3*|m0| with m0, m1 of opposite sign
        let interp = PchipInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, -4.0]).unwrap();
        assert_relative_eq!(interp.slopes()[0], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_extrapolates_with_end_cubic() {
        let interp = PchipInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]).unwrap();
        assert_relative_eq!(interp.evaluate(3.0), 3.0, epsilon = 1e-12);
    }
}
