//! Energy spectra.

use crate::interpolation::{interpolate_on_scale, LogTransform, Method, MethodOptions, Scale};
use crate::types::{DataError, InterpolationError};

/// Values tabulated against photon energy (fluence, kerma, coefficients).
///
/// # Examples
///
/// ```
/// use spectro_core::interpolation::Scale;
/// use spectro_core::spectrum::Spectrum;
///
/// let spectrum = Spectrum::new(vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0]).unwrap();
/// let fine = spectrum
///     .interpolate(&[1.5, 2.5], Scale::Linear, Spectrum::DEFAULT_METHOD)
///     .unwrap();
/// assert!((fine.values()[0] - 15.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    energy: Vec<f64>,
    values: Vec<f64>,
}

impl Spectrum {
    /// Method used when none is requested.
    pub const DEFAULT_METHOD: Method = Method::Akima1D;

    /// Pair energies with values.
    ///
    /// # Errors
    ///
    /// `DataError::LengthMismatch` if the columns differ in length.
    pub fn new(energy: Vec<f64>, values: Vec<f64>) -> Result<Self, DataError> {
        if energy.len() != values.len() {
            return Err(DataError::LengthMismatch {
                x: energy.len(),
                y: values.len(),
            });
        }
        Ok(Self { energy, values })
    }

    /// Energies.
    pub fn energy(&self) -> &[f64] {
        &self.energy
    }

    /// Values per energy.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of energy bins.
    pub fn len(&self) -> usize {
        self.energy.len()
    }

    /// Whether the spectrum has no bins.
    pub fn is_empty(&self) -> bool {
        self.energy.is_empty()
    }

    /// Natural logarithms of energies and values.
    ///
    /// # Errors
    ///
    /// `InterpolationError::InvalidLogDomain` for a non-positive entry.
    pub fn log_transform(&self) -> Result<(Vec<f64>, Vec<f64>), InterpolationError> {
        LogTransform::default().forward_samples(&self.energy, &self.values)
    }

    /// Resample the spectrum at `new_energies`.
    ///
    /// # Errors
    ///
    /// `DataError::Interpolation` when the kernel cannot be built or a log
    /// transform fails.
    pub fn interpolate(
        &self,
        new_energies: &[f64],
        scale: Scale,
        method: Method,
    ) -> Result<Spectrum, DataError> {
        self.interpolate_with(new_energies, scale, method, &MethodOptions::default())
    }

    /// Resample with explicit options.
    ///
    /// # Errors
    ///
    /// Same as [`interpolate`](Self::interpolate).
    pub fn interpolate_with(
        &self,
        new_energies: &[f64],
        scale: Scale,
        method: Method,
        options: &MethodOptions,
    ) -> Result<Spectrum, DataError> {
        let values = interpolate_on_scale(
            method,
            options,
            scale,
            &self.energy,
            &self.values,
            new_energies,
        )?;
        Ok(Spectrum {
            energy: new_energies.to_vec(),
            values,
        })
    }

    /// Mean energy `Σ E Φ / Σ Φ`, `None` when the values sum to zero.
    pub fn fluence_weighted_energy(&self) -> Option<f64> {
        let total: f64 = self.values.iter().sum();
        if total == 0.0 || !total.is_finite() {
            return None;
        }
        let weighted: f64 = self
            .energy
            .iter()
            .zip(self.values.iter())
            .map(|(e, v)| e * v)
            .sum();
        Some(weighted / total)
    }
}
