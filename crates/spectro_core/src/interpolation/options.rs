//! Per-call interpolation options.

use crate::math::interpolators::{
    AkimaVariant, BSplineBoundary, SplineBoundary, DEFAULT_BSPLINE_DEGREE,
};

/// Behaviour for query points outside the data range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extrapolation {
    /// Continue the first or last polynomial piece.
    Extend,
    /// Return the first or last data value.
    Clamp,
    /// Return NaN.
    Nan,
    /// Fail with `InterpolationError::OutOfBounds`.
    Error,
    /// Return fixed values to the left and right of the data.
    Fill {
        /// Value below the first abscissa
        left: f64,
        /// Value above the last abscissa
        right: f64,
    },
}

/// Axis scale used for interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scale {
    /// Interpolate the raw values.
    #[default]
    Linear,
    /// Interpolate `ln y` against `ln x` and exponentiate the result.
    Log,
}

/// Treatment of values that have no logarithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogDomainPolicy {
    /// Fail with `InterpolationError::InvalidLogDomain`.
    #[default]
    Reject,
    /// Discard offending samples; offending query points yield NaN.
    Drop,
}

/// Options shared by every dispatch call.
///
/// # Examples
///
/// ```
/// use spectro_core::interpolation::{Extrapolation, MethodOptions};
/// use spectro_core::math::interpolators::SplineBoundary;
///
/// let options = MethodOptions::default()
///     .with_extrapolation(Extrapolation::Nan)
///     .with_spline_boundary(SplineBoundary::Natural);
/// assert_eq!(options.extrapolation, Some(Extrapolation::Nan));
/// assert_eq!(options.bspline_degree, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodOptions {
    /// Override of the method's native extrapolation.
    pub extrapolation: Option<Extrapolation>,
    /// End condition for `CubicSpline`.
    pub spline_boundary: SplineBoundary,
    /// Slope weighting for `Akima1D`.
    pub akima_variant: AkimaVariant,
    /// Degree for `B-splines`.
    pub bspline_degree: usize,
    /// End condition for `B-splines`.
    pub bspline_boundary: BSplineBoundary,
    /// Treatment of non-positive values on a log scale.
    pub log_policy: LogDomainPolicy,
}

impl Default for MethodOptions {
    fn default() -> Self {
        Self {
            extrapolation: None,
            spline_boundary: SplineBoundary::default(),
            akima_variant: AkimaVariant::default(),
            bspline_degree: DEFAULT_BSPLINE_DEGREE,
            bspline_boundary: BSplineBoundary::default(),
            log_policy: LogDomainPolicy::default(),
        }
    }
}

impl MethodOptions {
    /// Override extrapolation.
    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = Some(extrapolation);
        self
    }

    /// Set the cubic spline end condition.
    pub fn with_spline_boundary(mut self, boundary: SplineBoundary) -> Self {
        self.spline_boundary = boundary;
        self
    }

    /// Set the Akima slope weighting.
    pub fn with_akima_variant(mut self, variant: AkimaVariant) -> Self {
        self.akima_variant = variant;
        self
    }

    /// Set the B-spline degree and end condition.
    pub fn with_bspline(mut self, degree: usize, boundary: BSplineBoundary) -> Self {
        self.bspline_degree = degree;
        self.bspline_boundary = boundary;
        self
    }

    /// Set the log-domain policy.
    pub fn with_log_policy(mut self, policy: LogDomainPolicy) -> Self {
        self.log_policy = policy;
        self
    }
}
