//! Piecewise linear interpolation.

use super::traits::{find_segment, prepare_samples};
use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear interpolator.
///
/// Stores sorted (x, y) samples and joins adjacent points with straight
/// lines. Outside the data range [`evaluate`](Interpolator::evaluate) continues
/// the first or last segment; clamping to the boundary values (the
/// `np.interp` convention) is applied by the dispatch layer.
///
/// # Example
///
/// ```
/// use spectro_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(&[1.0f64, 2.0, 3.0], &[10.0, 20.0, 30.0]).unwrap();
/// assert_eq!(interp.domain(), (1.0, 3.0));
/// assert!((interp.interpolate(1.5).unwrap() - 15.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    /// Sorted x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values (in same order as xs after sorting)
    ys: Vec<T>,
}

impl<T: Float> LinearInterpolator<T> {
    /// Construct a linear interpolator from x and y samples.
    ///
    /// Samples are sorted by x. Requires at least 2 finite points with
    /// distinct abscissae.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::InvalidInput` - Mismatched array lengths
    /// * `InterpolationError::InsufficientData` - Fewer than 2 points
    /// * `InterpolationError::NonFiniteData` - NaN or infinite value
    /// * `InterpolationError::NonMonotonicData` - Repeated abscissa
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        let (xs, ys) = prepare_samples(xs, ys, 2)?;
        Ok(Self { xs, ys })
    }

    /// Returns a reference to the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-values (in sorted x order).
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no data points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Value at the first sample.
    #[inline]
    pub fn first_value(&self) -> T {
        self.ys[0]
    }

    /// Value at the last sample.
    #[inline]
    pub fn last_value(&self) -> T {
        self.ys[self.ys.len() - 1]
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    /// Evaluate `y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)` on the segment
    /// containing `x`.
    fn evaluate(&self, x: T) -> T {
        let i = find_segment(&self.xs, x);

        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        let t = (x - x0) / (x1 - x0);
        y0 + (y1 - y0) * t
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
