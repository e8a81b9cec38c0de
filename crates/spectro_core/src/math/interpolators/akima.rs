//! Akima and modified Akima (makima) interpolation.

use super::hermite::{evaluate_segments, hermite_coefficients, secants, SplineCoeffs};
use super::traits::prepare_samples;
use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Slope weighting used by [`AkimaInterpolator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AkimaVariant {
    /// Weights `|m[i+1] - m[i]|` and `|m[i-1] - m[i-2]|`.
    #[default]
    Akima,
    /// Adds `|m[i+1] + m[i]| / 2` and `|m[i-1] + m[i-2]| / 2` to the weights,
    /// which suppresses overshoot on flat stretches.
    Makima,
}

/// Akima piecewise cubic interpolator.
///
/// Knot slopes are weighted averages of the neighbouring secants, which
/// keeps the curve insensitive to isolated outliers. The secant sequence is
/// extended by two ghost secants at each end:
///
/// ```text
/// m[-1] = 2*m[0] - m[1]        m[n-1] = 2*m[n-2] - m[n-3]
/// m[-2] = 3*m[0] - 2*m[1]      m[n]   = 3*m[n-2] - 2*m[n-3]
/// ```
///
/// Requires at least 3 points.
///
/// # Example
///
/// ```
/// use spectro_core::math::interpolators::{AkimaInterpolator, Interpolator};
///
/// let xs: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let ys = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let interp = AkimaInterpolator::new(&xs, &ys).unwrap();
/// assert!((interp.interpolate(2.5).unwrap() - 2.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct AkimaInterpolator<T: Float> {
    xs: Vec<T>,
    slopes: Vec<T>,
    coeffs: Vec<SplineCoeffs<T>>,
    variant: AkimaVariant,
}

impl<T: Float> AkimaInterpolator<T> {
    /// Construct a classic Akima interpolator.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::InvalidInput` - Mismatched array lengths
    /// * `InterpolationError::InsufficientData` - Fewer than 3 points
    /// * `InterpolationError::NonFiniteData` - NaN or infinite value
    /// * `InterpolationError::NonMonotonicData` - Repeated abscissa
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        Self::with_variant(xs, ys, AkimaVariant::Akima)
    }

    /// Construct an Akima interpolator with the given slope weighting.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_variant(
        xs: &[T],
        ys: &[T],
        variant: AkimaVariant,
    ) -> Result<Self, InterpolationError> {
        let (xs, ys) = prepare_samples(xs, ys, 3)?;
        let slopes = Self::compute_slopes(&xs, &ys, variant);
        let coeffs = hermite_coefficients(&xs, &ys, &slopes);
        Ok(Self {
            xs,
            slopes,
            coeffs,
            variant,
        })
    }

    fn compute_slopes(xs: &[T], ys: &[T], variant: AkimaVariant) -> Vec<T> {
        let n = xs.len();
        let (_, m) = secants(xs, ys);
        let two = T::one() + T::one();
        let three = two + T::one();
        let half = T::one() / two;

        // Extended secants: ext[j + 2] = m[j]
        let mut ext = Vec::with_capacity(n + 3);
        let first_ghost = two * m[0] - m[1];
        ext.push(three * m[0] - two * m[1]);
        ext.push(first_ghost);
        ext.extend_from_slice(&m);
        let last_ghost = two * m[n - 2] - m[n - 3];
        ext.push(last_ghost);
        ext.push(three * m[n - 2] - two * m[n - 3]);

        let weights: Vec<(T, T)> = (0..n)
            .map(|i| {
                let mut f1 = (ext[i + 3] - ext[i + 2]).abs();
                let mut f2 = (ext[i + 1] - ext[i]).abs();
                if variant == AkimaVariant::Makima {
                    f1 = f1 + half * (ext[i + 3] + ext[i + 2]).abs();
                    f2 = f2 + half * (ext[i + 1] + ext[i]).abs();
                }
                (f1, f2)
            })
            .collect();

        let max_sum = weights
            .iter()
            .map(|(f1, f2)| *f1 + *f2)
            .fold(T::zero(), T::max);
        let threshold = T::from(1e-9).unwrap_or_else(T::epsilon) * max_sum;

        weights
            .iter()
            .enumerate()
            .map(|(i, &(f1, f2))| {
                let sum = f1 + f2;
                if sum > threshold {
                    (f1 * ext[i + 1] + f2 * ext[i + 2]) / sum
                } else {
                    half * (ext[i + 3] + ext[i])
                }
            })
            .collect()
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

    /// Slope weighting in use.
    #[inline]
    pub fn variant(&self) -> AkimaVariant {
        self.variant
    }
}

impl<T: Float> Interpolator<T> for AkimaInterpolator<T> {
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
    fn test_requires_three_points() {
        let result = AkimaInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]);
        assert_eq!(
            result.unwrap_err(),
            InterpolationError::InsufficientData { got: 2, need: 3 }
        );
    }

    #[test]
    fn test_reproduces_straight_line() {
        let xs = [0.0, 0.5, 2.0, 3.0, 5.0];
        let ys: Vec<f64> = xs.iter().map(|x| 4.0 - 0.5 * x).collect();
        for variant in [AkimaVariant::Akima, AkimaVariant::Makima] {
            let interp = AkimaInterpolator::with_variant(&xs, &ys, variant).unwrap();
            for x in [0.25, 1.0, 2.5, 4.9] {
                assert_relative_eq!(interp.interpolate(x).unwrap(), 4.0 - 0.5 * x, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_matches_knots() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [0.0, 2.0, 1.0, 3.0, 2.0, 6.0];
        let interp = AkimaInterpolator::new(&xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(interp.interpolate(*x).unwrap(), *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_flat_neighbourhood_keeps_flat_segment() {
        // Secants 0, 0, 1, 0, 0: the slope at x=1 is pulled to the flat side
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
        let interp = AkimaInterpolator::new(&xs, &ys).unwrap();
        assert_relative_eq!(interp.slopes()[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_weighted_slope_value() {
        // Secants m = [1, 0, 0, 3] at unit spacing, ghosts [3, 2] and [6, 9].
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [0.0, 1.0, 1.0, 1.0, 4.0];
        let interp = AkimaInterpolator::new(&xs, &ys).unwrap();
        // x=0: f1 = |m0 - m(-1)| = 1, f2 = |m(-1) - m(-2)| = 1 => (2 + 1) / 2
        assert_relative_eq!(interp.slopes()[0], 1.5, epsilon = 1e-12);
        // x=2: f1 = |m3 - m2| = 3, f2 = |m1 - m0| = 1 => (3*m1 + 1*m2) / 4
        assert_relative_eq!(interp.slopes()[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_makima_stays_within_step() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [1.0, 1.0, 1.0, 2.0, 2.0, 2.0];
        let akima = AkimaInterpolator::new(&xs, &ys).unwrap();
        let makima = AkimaInterpolator::with_variant(&xs, &ys, AkimaVariant::Makima).unwrap();
        assert_eq!(makima.variant(), AkimaVariant::Makima);
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(makima.interpolate(*x).unwrap(), *y, epsilon = 1e-12);
        }
        // Both stay inside [1, 2] on the step
        for i in 0..=50 {
            let x = 2.0 + i as f64 * 0.02;
            let a = akima.interpolate(x).unwrap();
            let b = makima.interpolate(x).unwrap();
            assert!((1.0 - 1e-12..=2.0 + 1e-12).contains(&a));
            assert!((1.0 - 1e-12..=2.0 + 1e-12).contains(&b));
        }
    }
}
