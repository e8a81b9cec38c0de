//! One-dimensional interpolation kernels.
//!
//! All interpolators are generic over `T: num_traits::Float` and share the
//! same construction rules: samples are sorted by x, values must be finite
//! and abscissae must be distinct.
//!
//! ## Available Interpolators
//!
//! - [`LinearInterpolator`]: Piecewise linear interpolation between data points
//! - [`CubicSplineInterpolator`]: C² cubic spline, not-a-knot / natural / clamped
//! - [`PchipInterpolator`]: Monotonicity-preserving cubic Hermite
//! - [`AkimaInterpolator`]: Akima and modified Akima cubic Hermite
//! - [`BSplineInterpolator`]: Interpolating B-spline of degree `k`
//!
//! ## Core Trait
//!
//! All interpolators implement the [`Interpolator`] trait, which defines:
//! - `evaluate(x: T) -> T`: Piecewise polynomial value, boundary pieces extended
//! - `domain() -> (T, T)`: Valid interpolation range
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: Value inside the domain
//!
//! ## Example
//!
//! ```
//! use spectro_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let xs: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 4.0, 9.0];
//!
//! let interp = LinearInterpolator::new(&xs, &ys).unwrap();
//! let (x_min, x_max) = interp.domain();
//! assert_eq!(x_min, 0.0);
//! assert_eq!(x_max, 3.0);
//!
//! // Interpolate at x = 1.5 (between y=1.0 and y=4.0)
//! let y = interp.interpolate(1.5).unwrap();
//! assert!((y - 2.5).abs() < 1e-10);
//! ```
//!
//! [`InterpolationError`]: crate::types::InterpolationError

mod akima;
mod bspline;
mod cubic_spline;
mod hermite;
mod linear;
mod pchip;
mod traits;

// Re-export public types at module level
pub use akima::{AkimaInterpolator, AkimaVariant};
pub use bspline::{BSplineBoundary, BSplineInterpolator, DEFAULT_BSPLINE_DEGREE};
pub use cubic_spline::{CubicSplineInterpolator, SplineBoundary};
pub use linear::LinearInterpolator;
pub use pchip::PchipInterpolator;
pub use traits::Interpolator;
