//! Attenuation coefficient tables.
//!
//! Coefficients span several decades, so every table is interpolated with
//! Akima in log-log space over the points where both energy and value are
//! positive.

use crate::error::{DosimetryError, DosimetryResult};
use adapter_tables::read_whitespace_table;
use spectro_core::interpolation::{LogDomainPolicy, LogTransform};
use spectro_core::math::interpolators::{AkimaInterpolator, Interpolator};
use std::path::Path;
use tracing::debug;

/// Density of aluminium in g/cm³.
pub const ALUMINIUM_DENSITY: f64 = 2.699;

/// Log-log Akima curve over the positive support of a table.
#[derive(Debug, Clone)]
pub struct LogLogCurve {
    kernel: AkimaInterpolator<f64>,
    min: f64,
    max: f64,
}

impl LogLogCurve {
    /// Build from tabulated `(energy, value)` pairs.
    ///
    /// Pairs with a non-positive or non-finite member are left out.
    ///
    /// # Errors
    ///
    /// * `DosimetryError::InsufficientSupport` - Fewer than 3 usable pairs
    /// * `DosimetryError::Interpolation` - Repeated energies
    pub fn new(label: &str, energy: &[f64], values: &[f64]) -> DosimetryResult<Self> {
        let (support_e, support_v): (Vec<f64>, Vec<f64>) = energy
            .iter()
            .zip(values)
            .filter(|(e, v)| e.is_finite() && v.is_finite() && **e > 0.0 && **v > 0.0)
            .map(|(e, v)| (*e, *v))
            .unzip();

        if support_e.len() < 3 {
            return Err(DosimetryError::InsufficientSupport {
                label: label.to_string(),
            });
        }

        let (lx, ly) =
            LogTransform::new(LogDomainPolicy::Reject).forward_samples(&support_e, &support_v)?;
        let kernel = AkimaInterpolator::new(&lx, &ly)?;
        let min = support_e.iter().copied().fold(f64::INFINITY, f64::min);
        let max = support_e.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        debug!(
            label = label,
            points = support_e.len(),
            dropped = energy.len() - support_e.len(),
            "Log-log curve built"
        );
        Ok(Self { kernel, min, max })
    }

    /// Energy range of the positive support.
    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// True if `energy` lies in the positive support.
    pub fn contains(&self, energy: f64) -> bool {
        energy >= self.min && energy <= self.max
    }

    /// Value at `energy`, `None` outside the support.
    pub fn value(&self, energy: f64) -> Option<f64> {
        if self.contains(energy) {
            Some(self.kernel.evaluate(energy.ln()).exp())
        } else {
            None
        }
    }

    /// Value at `energy`.
    ///
    /// # Errors
    ///
    /// `DosimetryError::OutsideTable` outside the support.
    pub fn require(&self, energy: f64) -> DosimetryResult<f64> {
        self.value(energy).ok_or(DosimetryError::OutsideTable {
            energy,
            min: self.min,
            max: self.max,
        })
    }
}

/// Mass attenuation and mass energy-transfer coefficients of an absorber.
///
/// # Examples
///
/// ```
/// use spectro_dosimetry::{AttenuationData, ALUMINIUM_DENSITY};
///
/// let energy = [10.0, 20.0, 40.0, 80.0];
/// let mu = [26.0, 3.4, 0.57, 0.2];
/// let mutr = [25.0, 3.0, 0.4, 0.05];
/// let data = AttenuationData::new(&energy, &mu, &energy, &mutr, ALUMINIUM_DENSITY).unwrap();
/// let linear = data.linear_attenuation(20.0).unwrap();
/// assert!((linear - 3.4 * ALUMINIUM_DENSITY).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct AttenuationData {
    mu: LogLogCurve,
    mutr: LogLogCurve,
    density: f64,
}

impl AttenuationData {
    /// Build from μ/ρ and μtr/ρ tables (cm²/g) and the absorber density (g/cm³).
    ///
    /// # Errors
    ///
    /// * `DosimetryError::InvalidDensity` - `density` not positive and finite
    /// * Any [`LogLogCurve::new`] error
    pub fn new(
        mu_energy: &[f64],
        mu: &[f64],
        mutr_energy: &[f64],
        mutr: &[f64],
        density: f64,
    ) -> DosimetryResult<Self> {
        if !(density > 0.0 && density.is_finite()) {
            return Err(DosimetryError::InvalidDensity(density));
        }
        Ok(Self {
            mu: LogLogCurve::new("mu/rho", mu_energy, mu)?,
            mutr: LogLogCurve::new("mutr/rho", mutr_energy, mutr)?,
            density,
        })
    }

    /// Read both tables from whitespace separated text files.
    ///
    /// # Errors
    ///
    /// `DosimetryError::InvalidDensity` before any file is read, file errors
    /// from [`read_whitespace_table`], then as [`new`](Self::new).
    pub fn load(
        mu_path: impl AsRef<Path>,
        mutr_path: impl AsRef<Path>,
        density: f64,
    ) -> DosimetryResult<Self> {
        if !(density > 0.0 && density.is_finite()) {
            return Err(DosimetryError::InvalidDensity(density));
        }
        let mu = read_whitespace_table(mu_path, 2)?;
        let mutr = read_whitespace_table(mutr_path, 2)?;
        Self::new(
            mu.column(0).unwrap_or_default(),
            mu.column(1).unwrap_or_default(),
            mutr.column(0).unwrap_or_default(),
            mutr.column(1).unwrap_or_default(),
            density,
        )
    }

    /// Absorber density in g/cm³.
    pub fn density(&self) -> f64 {
        self.density
    }

    /// The μtr/ρ curve.
    pub fn mutr_curve(&self) -> &LogLogCurve {
        &self.mutr
    }

    /// Linear attenuation coefficient μ = μ/ρ · ρ in 1/cm.
    ///
    /// # Errors
    ///
    /// `DosimetryError::OutsideTable` outside the μ/ρ table.
    pub fn linear_attenuation(&self, energy: f64) -> DosimetryResult<f64> {
        Ok(self.mu.require(energy)? * self.density)
    }

    /// Mass energy-transfer coefficient μtr/ρ in cm²/g.
    ///
    /// # Errors
    ///
    /// `DosimetryError::OutsideTable` outside the μtr/ρ table.
    pub fn mass_energy_transfer(&self, energy: f64) -> DosimetryResult<f64> {
        self.mutr.require(energy)
    }
}
