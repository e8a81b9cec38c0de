//! Method dispatch, extrapolation and axis scaling.
//!
//! This layer turns a [`Method`] and [`MethodOptions`] into a concrete
//! kernel from [`crate::math::interpolators`], applies the extrapolation
//! rule for query points outside the data and optionally wraps the call in
//! a [`LogTransform`].
//!
//! # Example
//!
//! ```
//! use spectro_core::interpolation::{interpolate_with, Method, MethodOptions};
//!
//! let xs = [1.0, 2.0, 3.0];
//! let ys = [10.0, 20.0, 30.0];
//!
//! let y = interpolate_with(Method::PiecewiseLinear, &MethodOptions::default(), &xs, &ys, &[1.5, 5.0])
//!     .unwrap();
//! assert_eq!(y, vec![15.0, 30.0]); // clamped outside the data
//! ```

mod method;
mod options;
mod scale;
mod table;

pub use method::Method;
pub use options::{Extrapolation, LogDomainPolicy, MethodOptions, Scale};
pub use scale::LogTransform;
pub use table::InterpolationTable;

use crate::math::interpolators::{
    AkimaInterpolator, BSplineInterpolator, CubicSplineInterpolator, Interpolator,
    LinearInterpolator, PchipInterpolator,
};
use crate::types::InterpolationError;
use tracing::debug;

/// Build the kernel for `method` from raw samples.
///
/// # Errors
///
/// Any construction error of the selected kernel.
pub fn build_interpolator(
    method: Method,
    options: &MethodOptions,
    xs: &[f64],
    ys: &[f64],
) -> Result<Box<dyn Interpolator<f64>>, InterpolationError> {
    let kernel: Box<dyn Interpolator<f64>> = match method {
        Method::PiecewiseLinear => Box::new(LinearInterpolator::new(xs, ys)?),
        Method::CubicSpline => Box::new(CubicSplineInterpolator::with_boundary(
            xs,
            ys,
            options.spline_boundary,
        )?),
        Method::Pchip => Box::new(PchipInterpolator::new(xs, ys)?),
        Method::Akima1D => Box::new(AkimaInterpolator::with_variant(
            xs,
            ys,
            options.akima_variant,
        )?),
        Method::BSpline => Box::new(BSplineInterpolator::with_boundary(
            xs,
            ys,
            options.bspline_degree,
            options.bspline_boundary,
        )?),
    };
    Ok(kernel)
}

/// Evaluate one point with an extrapolation rule.
fn evaluate_point(
    kernel: &dyn Interpolator<f64>,
    extrapolation: Extrapolation,
    x: f64,
) -> Result<f64, InterpolationError> {
    if x.is_nan() {
        return Ok(f64::NAN);
    }
    let (x_min, x_max) = kernel.domain();
    if x >= x_min && x <= x_max {
        return Ok(kernel.evaluate(x));
    }

    let below = x < x_min;
    match extrapolation {
        Extrapolation::Extend => Ok(kernel.evaluate(x)),
        Extrapolation::Clamp => Ok(kernel.evaluate(if below { x_min } else { x_max })),
        Extrapolation::Nan => Ok(f64::NAN),
        Extrapolation::Error => kernel.interpolate(x),
        Extrapolation::Fill { left, right } => Ok(if below { left } else { right }),
    }
}

/// Interpolate `x_new` with `method` on a linear scale.
///
/// Samples need not be sorted. Points outside the data follow
/// `options.extrapolation`, or the method's default when unset.
///
/// # Errors
///
/// * Construction errors of the selected kernel
/// * `InterpolationError::OutOfBounds` with [`Extrapolation::Error`]
pub fn interpolate_with(
    method: Method,
    options: &MethodOptions,
    xs: &[f64],
    ys: &[f64],
    x_new: &[f64],
) -> Result<Vec<f64>, InterpolationError> {
    let kernel = build_interpolator(method, options, xs, ys)?;
    let extrapolation = options
        .extrapolation
        .unwrap_or_else(|| method.default_extrapolation());

    debug!(
        method = method.name(),
        samples = xs.len(),
        queries = x_new.len(),
        "interpolating"
    );

    x_new
        .iter()
        .map(|&x| evaluate_point(kernel.as_ref(), extrapolation, x))
        .collect()
}

/// Interpolate `x_new` with `method` on the given scale.
///
/// On [`Scale::Log`] samples and query points are log-transformed following
/// `options.log_policy` and the results are exponentiated.
///
/// # Errors
///
/// Same as [`interpolate_with`], plus `InterpolationError::InvalidLogDomain`
/// under [`LogDomainPolicy::Reject`].
pub fn interpolate_on_scale(
    method: Method,
    options: &MethodOptions,
    scale: Scale,
    xs: &[f64],
    ys: &[f64],
    x_new: &[f64],
) -> Result<Vec<f64>, InterpolationError> {
    match scale {
        Scale::Linear => interpolate_with(method, options, xs, ys, x_new),
        Scale::Log => {
            let transform = LogTransform::new(options.log_policy);
            let (lx, ly) = transform.forward_samples(xs, ys)?;
            let lq = transform.forward_queries(x_new)?;
            let mut values = interpolate_with(method, options, &lx, &ly, &lq)?;
            transform.inverse(&mut values);
            Ok(values)
        }
    }
}
