//! Interpolating B-splines of arbitrary degree.
//!
//! Knot vectors:
//!
//! | degree `k` | knots                                                        |
//! |------------|--------------------------------------------------------------|
//! | odd        | `x0` × (k+1), `x[m+1 .. n-m-1]`, `xn` × (k+1), `m = (k-1)/2` |
//! | 2          | `x0` × 3, interior midpoints except the first and last, `xn` × 3 |
//! | 3, clamped | `x0` × 4, `x[1 .. n-1]`, `xn` × 4                            |
//!
//! Coefficients are found by solving the banded collocation system; basis
//! functions are evaluated with the Cox–de Boor recursion, which continues
//! the first and last polynomial pieces outside the knot span.

use super::traits::prepare_samples;
use super::Interpolator;
use crate::math::linear_systems::{solve_banded, BandMatrix};
use crate::types::InterpolationError;
use num_traits::Float;

/// End condition of an interpolating B-spline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BSplineBoundary {
    /// Knot placement as tabulated in the module docs, no extra conditions.
    #[default]
    NotAKnot,
    /// Zero first derivative at both ends (cubic only).
    Clamped,
}

/// Default degree used by the dispatch layer.
pub const DEFAULT_BSPLINE_DEGREE: usize = 2;

/// Interpolating B-spline.
///
/// # Example
///
/// ```
/// use spectro_core::math::interpolators::{BSplineInterpolator, Interpolator};
///
/// let xs: [f64; 5] = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let ys = [0.0, 1.0, 4.0, 9.0, 16.0];
/// let spline = BSplineInterpolator::new(&xs, &ys, 2).unwrap();
/// assert!((spline.interpolate(2.5).unwrap() - 6.25).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BSplineInterpolator<T: Float> {
    knots: Vec<T>,
    coeffs: Vec<T>,
    degree: usize,
    x_min: T,
    x_max: T,
}

impl<T: Float> BSplineInterpolator<T> {
    /// Construct a B-spline of degree `k` with the default knot placement.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::InvalidInput` - Mismatched lengths, `k = 0` or
    ///   an even degree above 2
    /// * `InterpolationError::InsufficientData` - Fewer than `k + 1` points
    /// * `InterpolationError::NonFiniteData` - NaN or infinite value
    /// * `InterpolationError::NonMonotonicData` - Repeated abscissa
    pub fn new(xs: &[T], ys: &[T], k: usize) -> Result<Self, InterpolationError> {
        Self::with_boundary(xs, ys, k, BSplineBoundary::NotAKnot)
    }

    /// Construct a B-spline with an explicit end condition.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new); `Clamped` is only accepted for `k = 3`.
    pub fn with_boundary(
        xs: &[T],
        ys: &[T],
        k: usize,
        boundary: BSplineBoundary,
    ) -> Result<Self, InterpolationError> {
        if k == 0 {
            return Err(InterpolationError::InvalidInput(
                "B-spline degree must be at least 1".to_string(),
            ));
        }
        if boundary == BSplineBoundary::NotAKnot && k % 2 == 0 && k != 2 {
            return Err(InterpolationError::InvalidInput(format!(
                "B-spline knots for even degree {} are not supported",
                k
            )));
        }
        if boundary == BSplineBoundary::Clamped && k != 3 {
            return Err(InterpolationError::InvalidInput(format!(
                "clamped B-splines require degree 3, got {}",
                k
            )));
        }

        let need = match boundary {
            BSplineBoundary::NotAKnot => k + 1,
            BSplineBoundary::Clamped => 2,
        };
        let (xs, ys) = prepare_samples(xs, ys, need)?;

        let knots = Self::build_knots(&xs, k, boundary);
        let coeffs = Self::solve_coefficients(&xs, &ys, &knots, k, boundary)?;

        Ok(Self {
            knots,
            coeffs,
            degree: k,
            x_min: xs[0],
            x_max: xs[xs.len() - 1],
        })
    }

    fn build_knots(xs: &[T], k: usize, boundary: BSplineBoundary) -> Vec<T> {
        let n = xs.len();
        let first = xs[0];
        let last = xs[n - 1];
        let mut knots = Vec::with_capacity(n + 2 * k + 2);
        knots.extend(std::iter::repeat(first).take(k + 1));

        match boundary {
            BSplineBoundary::Clamped => knots.extend_from_slice(&xs[1..n - 1]),
            BSplineBoundary::NotAKnot if k == 2 => {
                let two = T::one() + T::one();
                knots.extend((1..n - 2).map(|i| (xs[i] + xs[i + 1]) / two));
            }
            BSplineBoundary::NotAKnot => {
                let m = (k - 1) / 2;
                knots.extend_from_slice(&xs[m + 1..n - m - 1]);
            }
        }

        knots.extend(std::iter::repeat(last).take(k + 1));
        knots
    }

    fn solve_coefficients(
        xs: &[T],
        ys: &[T],
        knots: &[T],
        k: usize,
        boundary: BSplineBoundary,
    ) -> Result<Vec<T>, InterpolationError> {
        let nc = knots.len() - k - 1;
        let mut entries = Vec::with_capacity(xs.len() * (k + 1) + 4);
        let mut rhs = vec![T::zero(); nc];

        let offset = match boundary {
            BSplineBoundary::Clamped => {
                // c1 - c0 = 0 and c[nc-1] - c[nc-2] = 0
                let last = nc - 1;
                entries.push((0, 0, -T::one()));
                entries.push((0, 1, T::one()));
                entries.push((last, last - 1, -T::one()));
                entries.push((last, last, T::one()));
                1
            }
            BSplineBoundary::NotAKnot => 0,
        };

        for (i, (&x, &y)) in xs.iter().zip(ys.iter()).enumerate() {
            let row = i + offset;
            let span = find_span(knots, k, x);
            let basis = basis_functions(knots, k, span, x);
            entries.extend(
                basis
                    .into_iter()
                    .enumerate()
                    .map(|(r, value)| (row, span - k + r, value)),
            );
            rhs[row] = y;
        }

        BandMatrix::from_entries(nc, &entries)
            .and_then(|matrix| solve_banded(matrix, rhs))
            .map_err(|e| InterpolationError::InvalidInput(e.to_string()))
    }

    /// Degree of the spline.
    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Knot vector.
    #[inline]
    pub fn knots(&self) -> &[T] {
        &self.knots
    }

    /// B-spline coefficients.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }
}

impl<T: Float> Interpolator<T> for BSplineInterpolator<T> {
    fn evaluate(&self, x: T) -> T {
        let k = self.degree;
        let span = find_span(&self.knots, k, x);
        basis_functions(&self.knots, k, span, x)
            .into_iter()
            .enumerate()
            .fold(T::zero(), |acc, (r, b)| acc + b * self.coeffs[span - k + r])
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.x_min, self.x_max)
    }
}

/// Knot span `mu` with `t[mu] <= x < t[mu+1]`, clamped to `[k, nc - 1]`.
fn find_span<T: Float>(knots: &[T], k: usize, x: T) -> usize {
    let nc = knots.len() - k - 1;
    let pos = knots.partition_point(|&t| t <= x);
    pos.saturating_sub(1).clamp(k, nc - 1)
}

/// Non-zero basis functions `B[span-k ..= span]` at `x` (Cox–de Boor).
fn basis_functions<T: Float>(knots: &[T], k: usize, span: usize, x: T) -> Vec<T> {
    let mut n = vec![T::zero(); k + 1];
    let mut left = vec![T::zero(); k + 1];
    let mut right = vec![T::zero(); k + 1];
    n[0] = T::one();

    for j in 1..=k {
        left[j] = x - knots[span + 1 - j];
        right[j] = knots[span + j] - x;
        let mut saved = T::zero();
        for r in 0..j {
            let temp = n[r] / (right[r + 1] + left[j - r]);
            n[r] = saved + right[r + 1] * temp;
            saved = left[j - r] * temp;
        }
        n[j] = saved;
    }

    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::interpolators::{CubicSplineInterpolator, LinearInterpolator, SplineBoundary};
    use approx::assert_relative_eq;

    // ========================================
    // Knot Vector Tests
    // ========================================

    #[test]
    fn test_quadratic_knots() {
        let spline =
            BSplineInterpolator::new(&[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0; 5], 2).unwrap();
        assert_eq!(
            spline.knots(),
            &[0.0, 0.0, 0.0, 1.5, 2.5, 4.0, 4.0, 4.0]
        );
        assert_eq!(spline.coefficients().len(), 5);
    }

    #[test]
    fn test_cubic_knots_skip_second_and_penultimate_points() {
        let spline =
            BSplineInterpolator::new(&[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0; 5], 3).unwrap();
        assert_eq!(
            spline.knots(),
            &[0.0, 0.0, 0.0, 0.0, 2.0, 4.0, 4.0, 4.0, 4.0]
        );
    }

    #[test]
    fn test_basis_partition_of_unity() {
        let knots = [0.0, 0.0, 0.0, 0.0, 1.0, 2.5, 3.0, 3.0, 3.0, 3.0];
        for x in [0.0, 0.3, 1.7, 2.9, 3.0] {
            let span = find_span(&knots, 3, x);
            let sum: f64 = basis_functions(&knots, 3, span, x).iter().sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
        }
    }

    // ========================================
    // Interpolation Tests
    // ========================================

    #[test]
    fn test_linear_bspline_matches_piecewise_linear() {
        let xs = [0.0, 1.0, 2.5, 4.0];
        let ys = [1.0, -1.0, 2.0, 0.5];
        let spline = BSplineInterpolator::new(&xs, &ys, 1).unwrap();
        let linear = LinearInterpolator::new(&xs, &ys).unwrap();
        for x in [0.2, 1.3, 3.9] {
            assert_relative_eq!(spline.evaluate(x), linear.evaluate(x), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_quadratic_reproduces_parabola() {
        let xs = [0.0, 0.5, 1.5, 3.0, 4.0];
        let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x * x - x + 1.0).collect();
        let spline = BSplineInterpolator::new(&xs, &ys, 2).unwrap();
        for x in [0.25, 1.0, 2.2, 3.5, 5.0] {
            assert_relative_eq!(spline.evaluate(x), 2.0 * x * x - x + 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_cubic_matches_not_a_knot_spline() {
        let xs = [0.0, 1.0, 2.0, 3.5, 4.0, 6.0];
        let ys = [1.0, 3.0, 2.0, 0.5, 1.5, 4.0];
        let bspline = BSplineInterpolator::new(&xs, &ys, 3).unwrap();
        let cubic = CubicSplineInterpolator::new(&xs, &ys).unwrap();
        for x in [0.5, 1.5, 3.0, 3.8, 5.0, 6.5] {
            assert_relative_eq!(bspline.evaluate(x), cubic.evaluate(x), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_clamped_cubic_matches_clamped_spline() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [0.0, 2.0, 1.0, 3.0, 2.0];
        let bspline =
            BSplineInterpolator::with_boundary(&xs, &ys, 3, BSplineBoundary::Clamped).unwrap();
        let cubic =
            CubicSplineInterpolator::with_boundary(&xs, &ys, SplineBoundary::Clamped).unwrap();
        assert_eq!(bspline.coefficients().len(), 7);
        for x in [0.5, 1.5, 2.5, 3.5] {
            assert_relative_eq!(bspline.evaluate(x), cubic.evaluate(x), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_reproduces_knots_for_all_degrees() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let ys = [0.0, 0.8, 0.9, 0.1, -0.8, -1.0, -0.3];
        for k in [1, 2, 3, 5] {
            let spline = BSplineInterpolator::new(&xs, &ys, k).unwrap();
            assert_eq!(spline.degree(), k);
            for (x, y) in xs.iter().zip(ys.iter()) {
                assert_relative_eq!(spline.interpolate(*x).unwrap(), *y, epsilon = 1e-10);
            }
        }
    }

    // ========================================
    // Error Tests
    // ========================================

    #[test]
    fn test_rejects_degree_zero_and_even_degree() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [0.0; 6];
        assert!(BSplineInterpolator::new(&xs, &ys, 0).is_err());
        assert!(BSplineInterpolator::new(&xs, &ys, 4).is_err());
        assert!(BSplineInterpolator::with_boundary(&xs, &ys, 2, BSplineBoundary::Clamped).is_err());
    }

    #[test]
    fn test_insufficient_points_for_degree() {
        let result = BSplineInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0], 3);
        assert_eq!(
            result.unwrap_err(),
            InterpolationError::InsufficientData { got: 3, need: 4 }
        );
    }
}
