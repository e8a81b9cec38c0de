//! Core interpolation trait.

use crate::types::InterpolationError;
use num_traits::Float;

/// A one-dimensional interpolant built from tabulated `(x, y)` samples.
///
/// Implementors provide [`evaluate`](Interpolator::evaluate), which evaluates the
/// underlying piecewise polynomial everywhere (the first and last pieces are
/// continued outside the data range), and [`domain`](Interpolator::domain).
/// The provided [`interpolate`](Interpolator::interpolate) restricts evaluation to
/// the domain and reports out-of-range queries as errors.
pub trait Interpolator<T: Float> {
    /// Evaluate the interpolant at `x`, extending the boundary pieces when
    /// `x` lies outside the domain.
    fn evaluate(&self, x: T) -> T;

    /// Return the valid interpolation range `(x_min, x_max)`.
    fn domain(&self) -> (T, T);

    /// Interpolate value at point `x`.
    ///
    /// # Returns
    ///
    /// * `Ok(y)` - The interpolated value
    /// * `Err(InterpolationError::OutOfBounds)` - If `x` is outside the domain
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let (x_min, x_max) = self.domain();
        if x < x_min || x > x_max {
            return Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(self.evaluate(x))
    }

    /// Whether `x` lies inside the closed domain.
    #[inline]
    fn contains(&self, x: T) -> bool {
        let (x_min, x_max) = self.domain();
        x >= x_min && x <= x_max
    }
}

/// Validate raw samples and return them sorted by x.
///
/// Shared by every kernel: lengths must match, at least `need` points must be
/// supplied, all values must be finite and the sorted abscissae must be
/// strictly increasing.
pub(crate) fn prepare_samples<T: Float>(
    xs: &[T],
    ys: &[T],
    need: usize,
) -> Result<(Vec<T>, Vec<T>), InterpolationError> {
    if xs.len() != ys.len() {
        return Err(InterpolationError::InvalidInput(format!(
            "xs and ys must have same length: got {} and {}",
            xs.len(),
            ys.len()
        )));
    }

    if xs.len() < need {
        return Err(InterpolationError::InsufficientData {
            got: xs.len(),
            need,
        });
    }

    if let Some(index) = xs
        .iter()
        .zip(ys.iter())
        .position(|(x, y)| !x.is_finite() || !y.is_finite())
    {
        return Err(InterpolationError::NonFiniteData { index });
    }

    let mut pairs: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    if let Some(index) = pairs.windows(2).position(|w| w[1].0 <= w[0].0) {
        return Err(InterpolationError::NonMonotonicData { index: index + 1 });
    }

    Ok(pairs.into_iter().unzip())
}

/// Find the segment index for interpolation using binary search.
///
/// Returns the index `i` such that `xs[i] <= x < xs[i+1]`,
/// clamped to valid segment range [0, n-2].
#[inline]
pub(crate) fn find_segment<T: Float>(xs: &[T], x: T) -> usize {
    let pos = xs.partition_point(|&xi| xi <= x);
    if pos == 0 {
        0
    } else if pos >= xs.len() {
        xs.len() - 2
    } else {
        pos - 1
    }
}
