//! Cubic spline interpolation with selectable end conditions.

use super::hermite::{evaluate_segments, hermite_coefficients, secants, SplineCoeffs};
use super::traits::prepare_samples;
use super::Interpolator;
use crate::math::linear_systems::solve_tridiagonal;
use crate::types::InterpolationError;
use num_traits::Float;

/// End condition of a cubic spline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SplineBoundary {
    /// Third derivative continuous across the second and penultimate knots.
    #[default]
    NotAKnot,
    /// Zero second derivative at both ends.
    Natural,
    /// Zero first derivative at both ends.
    Clamped,
}

/// Cubic spline interpolator with C² continuity.
///
/// The spline is found by solving a tridiagonal system for the knot slopes;
/// the segment polynomials are then stored as Hermite coefficients. Outside
/// the data range [`evaluate`](Interpolator::evaluate) continues the first or
/// last cubic.
///
/// # Construction
///
/// Data points are sorted by x-coordinate during construction and at least
/// 2 points are required. Two points give a straight line; with the default
/// not-a-knot condition three points give the interpolating parabola.
///
/// # Example
///
/// ```
/// use spectro_core::math::interpolators::{CubicSplineInterpolator, Interpolator};
///
/// let xs: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 4.0, 9.0];
///
/// let interp = CubicSplineInterpolator::new(&xs, &ys).unwrap();
/// // not-a-knot reproduces the parabola
/// assert!((interp.interpolate(1.5).unwrap() - 2.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSplineInterpolator<T: Float> {
    /// Sorted x-coordinates
    xs: Vec<T>,
    /// Slopes at the knots
    slopes: Vec<T>,
    /// Polynomial coefficients for each segment
    coeffs: Vec<SplineCoeffs<T>>,
    boundary: SplineBoundary,
}

impl<T: Float> CubicSplineInterpolator<T> {
    /// Construct a not-a-knot cubic spline from x and y samples.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::InvalidInput` - Mismatched array lengths
    /// * `InterpolationError::InsufficientData` - Fewer than 2 points
    /// * `InterpolationError::NonFiniteData` - NaN or infinite value
    /// * `InterpolationError::NonMonotonicData` - Repeated abscissa
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        Self::with_boundary(xs, ys, SplineBoundary::NotAKnot)
    }

    /// Construct a cubic spline with the given end condition.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_boundary(
        xs: &[T],
        ys: &[T],
        boundary: SplineBoundary,
    ) -> Result<Self, InterpolationError> {
        let (xs, ys) = prepare_samples(xs, ys, 2)?;
        let slopes = Self::compute_slopes(&xs, &ys, boundary)?;
        let coeffs = hermite_coefficients(&xs, &ys, &slopes);

        Ok(Self {
            xs,
            slopes,
            coeffs,
            boundary,
        })
    }

    /// Solve for the knot slopes.
    ///
    /// Interior rows enforce continuity of the second derivative:
    ///
    /// ```text
    /// h[i]*s[i-1] + 2*(h[i-1]+h[i])*s[i] + h[i-1]*s[i+1] = 3*(h[i]*m[i-1] + h[i-1]*m[i])
    /// ```
    ///
    /// The first and last rows carry the end condition.
    fn compute_slopes(
        xs: &[T],
        ys: &[T],
        boundary: SplineBoundary,
    ) -> Result<Vec<T>, InterpolationError> {
        let n = xs.len();
        let (h, m) = secants(xs, ys);
        let zero = T::zero();
        let one = T::one();
        let two = one + one;
        let three = two + one;

        if n == 2 && boundary == SplineBoundary::NotAKnot {
            return Ok(vec![m[0], m[0]]);
        }

        let mut sub = vec![zero; n];
        let mut diag = vec![zero; n];
        let mut sup = vec![zero; n];
        let mut rhs = vec![zero; n];

        for i in 1..n - 1 {
            sub[i] = h[i];
            diag[i] = two * (h[i - 1] + h[i]);
            sup[i] = h[i - 1];
            rhs[i] = three * (h[i] * m[i - 1] + h[i - 1] * m[i]);
        }

        match boundary {
            SplineBoundary::NotAKnot if n == 3 => {
                // A single cubic through three points: the parabola
                diag[0] = one;
                sup[0] = one;
                rhs[0] = two * m[0];
                sub[2] = one;
                diag[2] = one;
                rhs[2] = two * m[1];
            }
            SplineBoundary::NotAKnot => {
                let d0 = h[0] + h[1];
                diag[0] = h[1];
                sup[0] = d0;
                rhs[0] = ((h[0] + two * d0) * h[1] * m[0] + h[0] * h[0] * m[1]) / d0;

                let hl = h[n - 2];
                let hp = h[n - 3];
                let dn = hp + hl;
                sub[n - 1] = dn;
                diag[n - 1] = hp;
                rhs[n - 1] = (hl * hl * m[n - 3] + (two * dn + hl) * hp * m[n - 2]) / dn;
            }
            SplineBoundary::Natural => {
                diag[0] = two;
                sup[0] = one;
                rhs[0] = three * m[0];
                sub[n - 1] = one;
                diag[n - 1] = two;
                rhs[n - 1] = three * m[n - 2];
            }
            SplineBoundary::Clamped => {
                diag[0] = one;
                diag[n - 1] = one;
            }
        }

        solve_tridiagonal(&sub, &diag, &sup, &rhs)
            .map_err(|e| InterpolationError::InvalidInput(e.to_string()))
    }

    /// Returns a reference to the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Slopes of the spline at the knots.
    #[inline]
    pub fn slopes(&self) -> &[T] {
        &self.slopes
    }

    /// End condition used to build the spline.
    #[inline]
    pub fn boundary(&self) -> SplineBoundary {
        self.boundary
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
}

impl<T: Float> Interpolator<T> for CubicSplineInterpolator<T> {
    /// Evaluate `y = a + b*(x-xi) + c*(x-xi)² + d*(x-xi)³` on the segment
    /// containing `x`.
    #[inline]
    fn evaluate(&self, x: T) -> T {
        evaluate_segments(&self.xs, &self.coeffs, x)
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
