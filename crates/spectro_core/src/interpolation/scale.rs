//! Logarithmic transforms around interpolation.

use super::LogDomainPolicy;
use crate::types::InterpolationError;
use tracing::warn;

/// Natural-log transform of samples and query points.
///
/// # Examples
///
/// ```
/// use spectro_core::interpolation::{LogDomainPolicy, LogTransform};
///
/// let transform = LogTransform::new(LogDomainPolicy::Drop);
/// let (lx, ly) = transform.forward_samples(&[0.0, 1.0, 10.0], &[5.0, 1.0, 2.0]).unwrap();
/// assert_eq!(lx.len(), 2);
/// assert_eq!(lx[0], 0.0);
/// assert!((ly[1] - 2.0_f64.ln()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogTransform {
    policy: LogDomainPolicy,
}

fn has_log(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

impl LogTransform {
    /// Create a transform with the given policy.
    pub fn new(policy: LogDomainPolicy) -> Self {
        Self { policy }
    }

    /// Policy in use.
    pub fn policy(&self) -> LogDomainPolicy {
        self.policy
    }

    /// Take `ln` of every sample pair.
    ///
    /// # Errors
    ///
    /// With `Reject`, `InterpolationError::InvalidLogDomain` for the first
    /// value that is not strictly positive and finite.
    pub fn forward_samples(
        &self,
        xs: &[f64],
        ys: &[f64],
    ) -> Result<(Vec<f64>, Vec<f64>), InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        let mut lx = Vec::with_capacity(xs.len());
        let mut ly = Vec::with_capacity(ys.len());
        let mut dropped = 0usize;

        for (index, (&x, &y)) in xs.iter().zip(ys.iter()).enumerate() {
            if has_log(x) && has_log(y) {
                lx.push(x.ln());
                ly.push(y.ln());
                continue;
            }
            match self.policy {
                LogDomainPolicy::Reject => {
                    let (axis, value) = if has_log(x) { ("y", y) } else { ("x", x) };
                    return Err(InterpolationError::InvalidLogDomain {
                        axis: axis.to_string(),
                        index,
                        value,
                    });
                }
                LogDomainPolicy::Drop => dropped += 1,
            }
        }

        if dropped > 0 {
            warn!(dropped, "dropped samples without a logarithm");
        }
        Ok((lx, ly))
    }

    /// Take `ln` of every query point.
    ///
    /// With `Drop`, points without a logarithm become NaN so that the
    /// output keeps its length.
    ///
    /// # Errors
    ///
    /// With `Reject`, `InterpolationError::InvalidLogDomain` on axis `x_new`.
    pub fn forward_queries(&self, x_new: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        x_new
            .iter()
            .enumerate()
            .map(|(index, &x)| {
                if has_log(x) {
                    Ok(x.ln())
                } else {
                    match self.policy {
                        LogDomainPolicy::Reject => Err(InterpolationError::InvalidLogDomain {
                            axis: "x_new".to_string(),
                            index,
                            value: x,
                        }),
                        LogDomainPolicy::Drop => Ok(f64::NAN),
                    }
                }
            })
            .collect()
    }

    /// Exponentiate interpolated values in place.
    pub fn inverse(&self, values: &mut [f64]) {
        for v in values.iter_mut() {
            *v = v.exp();
        }
    }
}
