//! Piecewise cubic Hermite representation shared by the C¹ kernels.
//!
//! Given knot values `y_i` and slopes `s_i`, the cubic on segment `i` is
//!
//! ```text
//! p(x) = a + b*dx + c*dx² + d*dx³,   dx = x - x_i
//! a = y_i
//! b = s_i
//! c = (3m - 2s_i - s_{i+1}) / h
//! d = (s_i + s_{i+1} - 2m) / h²
//! ```
//!
//! with `h = x_{i+1} - x_i` and secant `m = (y_{i+1} - y_i) / h`.

use super::traits::find_segment;
use num_traits::Float;

/// Polynomial coefficients for a cubic segment.
///
/// Represents a cubic polynomial: `y = a + b*(x-xi) + c*(x-xi)² + d*(x-xi)³`
#[derive(Debug, Clone, Copy)]
pub(crate) struct SplineCoeffs<T: Float> {
    /// Constant term (y value at segment start)
    pub a: T,
    /// Linear coefficient
    pub b: T,
    /// Quadratic coefficient
    pub c: T,
    /// Cubic coefficient
    pub d: T,
}

impl<T: Float> SplineCoeffs<T> {
    /// Horner evaluation at offset `dx` from the segment start.
    #[inline]
    pub fn eval(&self, dx: T) -> T {
        self.a + dx * (self.b + dx * (self.c + dx * self.d))
    }
}

/// Secants `(y_{i+1} - y_i) / (x_{i+1} - x_i)` and widths of each segment.
pub(crate) fn secants<T: Float>(xs: &[T], ys: &[T]) -> (Vec<T>, Vec<T>) {
    let h: Vec<T> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let m = ys
        .windows(2)
        .zip(h.iter())
        .map(|(w, &hi)| (w[1] - w[0]) / hi)
        .collect();
    (h, m)
}

/// Build per-segment coefficients from knot values and slopes.
pub(crate) fn hermite_coefficients<T: Float>(
    xs: &[T],
    ys: &[T],
    slopes: &[T],
) -> Vec<SplineCoeffs<T>> {
    let two = T::one() + T::one();
    let three = two + T::one();

    (0..xs.len() - 1)
        .map(|i| {
            let h = xs[i + 1] - xs[i];
            let m = (ys[i + 1] - ys[i]) / h;
            let s0 = slopes[i];
            let s1 = slopes[i + 1];
            SplineCoeffs {
                a: ys[i],
                b: s0,
                c: (three * m - two * s0 - s1) / h,
                d: (s0 + s1 - two * m) / (h * h),
            }
        })
        .collect()
}

/// Evaluate a piecewise cubic at `x`, continuing the boundary segments.
#[inline]
pub(crate) fn evaluate_segments<T: Float>(xs: &[T], coeffs: &[SplineCoeffs<T>], x: T) -> T {
    let i = find_segment(xs, x);
    coeffs[i].eval(x - xs[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_secants() {
        let (h, m) = secants(&[0.0, 1.0, 3.0], &[0.0, 2.0, 3.0]);
        assert_eq!(h, vec![1.0, 2.0]);
        assert_eq!(m, vec![2.0, 0.5]);
    }

    #[test]
    fn test_hermite_reproduces_cubic() {
        // y = x³ with exact derivatives 3x²
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 1.0, 8.0];
        let slopes = [0.0, 3.0, 12.0];
        let coeffs = hermite_coefficients(&xs, &ys, &slopes);
        for x in [0.25, 0.5, 1.5, 1.9] {
            assert_relative_eq!(
                evaluate_segments(&xs, &coeffs, x),
                x * x * x,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_hermite_matches_knots() {
        let xs = [0.0, 0.5, 2.0, 3.0];
        let ys = [1.0, -1.0, 4.0, 2.0];
        let slopes = [0.3, -0.2, 1.5, 0.0];
        let coeffs = hermite_coefficients(&xs, &ys, &slopes);
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(evaluate_segments(&xs, &coeffs, *x), *y, epsilon = 1e-12);
        }
    }
}
