//! Interpolation method names.

use crate::types::InterpolationError;
use std::fmt;
use std::str::FromStr;

use super::Extrapolation;

/// Interpolation method selectable by name.
///
/// # Examples
///
/// ```
/// use spectro_core::interpolation::Method;
///
/// let method: Method = "Akima1D".parse().unwrap();
/// assert_eq!(method, Method::Akima1D);
/// assert_eq!(Method::BSpline.to_string(), "B-splines");
/// assert!("Quintic".parse::<Method>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Piecewise linear, clamped to the end values outside the data.
    PiecewiseLinear,
    /// C² cubic spline.
    CubicSpline,
    /// Monotone cubic Hermite.
    #[cfg_attr(feature = "serde", serde(alias = "PchipInterpolator"))]
    Pchip,
    /// Akima cubic Hermite.
    Akima1D,
    /// Interpolating B-spline.
    #[cfg_attr(feature = "serde", serde(rename = "B-splines"))]
    BSpline,
}

impl Method {
    /// All methods in canonical order.
    pub const ALL: [Method; 5] = [
        Method::PiecewiseLinear,
        Method::CubicSpline,
        Method::Pchip,
        Method::Akima1D,
        Method::BSpline,
    ];

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Method::PiecewiseLinear => "PiecewiseLinear",
            Method::CubicSpline => "CubicSpline",
            Method::Pchip => "Pchip",
            Method::Akima1D => "Akima1D",
            Method::BSpline => "B-splines",
        }
    }

    /// Behaviour outside the data range when no override is given.
    ///
    /// Piecewise linear clamps to the end values, Akima yields NaN and the
    /// remaining methods continue their end polynomials.
    pub fn default_extrapolation(&self) -> Extrapolation {
        match self {
            Method::PiecewiseLinear => Extrapolation::Clamp,
            Method::Akima1D => Extrapolation::Nan,
            Method::CubicSpline | Method::Pchip | Method::BSpline => Extrapolation::Extend,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "PiecewiseLinear" => Ok(Method::PiecewiseLinear),
            "CubicSpline" => Ok(Method::CubicSpline),
            "Pchip" | "PchipInterpolator" => Ok(Method::Pchip),
            "Akima1D" => Ok(Method::Akima1D),
            "B-splines" => Ok(Method::BSpline),
            other => Err(InterpolationError::UnknownMethod(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for method in Method::ALL {
            assert_eq!(method.name().parse::<Method>().unwrap(), method);
        }
    }

    #[test]
    fn test_pchip_alias() {
        assert_eq!("PchipInterpolator".parse::<Method>().unwrap(), Method::Pchip);
    }

    #[test]
    fn test_unknown_method_message() {
        let err = "Spline".parse::<Method>().unwrap_err();
        assert!(err
            .to_string()
            .contains("Interpolation methods: PiecewiseLinear, CubicSpline, Pchip, Akima1D, B-splines"));
    }

    #[test]
    fn test_default_extrapolation() {
        assert_eq!(
            Method::PiecewiseLinear.default_extrapolation(),
            Extrapolation::Clamp
        );
        assert_eq!(Method::Akima1D.default_extrapolation(), Extrapolation::Nan);
        assert_eq!(Method::Pchip.default_extrapolation(), Extrapolation::Extend);
    }
}
