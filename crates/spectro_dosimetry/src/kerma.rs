//! Air-kerma weighting of spectra.

use crate::attenuation::LogLogCurve;
use crate::error::{DosimetryError, DosimetryResult};
use spectro_core::spectrum::Spectrum;
use spectro_core::types::DataError;

/// Per-bin kerma weights `w_i = E_i · Φ_i · (μtr/ρ)(E_i)`.
///
/// The factors are kept separately so Monte Carlo runs can perturb each of
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct KermaWeights {
    energy: Vec<f64>,
    fluence: Vec<f64>,
    mutr: Vec<f64>,
}

impl KermaWeights {
    /// Combine a spectrum with μtr/ρ values at its energies.
    ///
    /// # Errors
    ///
    /// * `DosimetryError::Data` - `mutr` differs in length from the spectrum
    /// * `DosimetryError::ZeroKerma` - All weights vanish
    pub fn new(spectrum: &Spectrum, mutr: Vec<f64>) -> DosimetryResult<Self> {
        if mutr.len() != spectrum.len() {
            return Err(DataError::LengthMismatch {
                x: spectrum.len(),
                y: mutr.len(),
            }
            .into());
        }
        let weights = Self {
            energy: spectrum.energy().to_vec(),
            fluence: spectrum.values().to_vec(),
            mutr,
        };
        if weights.air_kerma() == 0.0 {
            return Err(DosimetryError::ZeroKerma);
        }
        Ok(weights)
    }

    /// Interpolate μtr/ρ at the spectrum energies.
    ///
    /// # Errors
    ///
    /// `DosimetryError::OutsideTable` if a bin lies outside the table, then
    /// as [`new`](Self::new).
    pub fn from_curve(spectrum: &Spectrum, mutr: &LogLogCurve) -> DosimetryResult<Self> {
        let values = spectrum
            .energy()
            .iter()
            .map(|&e| mutr.require(e))
            .collect::<DosimetryResult<Vec<f64>>>()?;
        Self::new(spectrum, values)
    }

    /// Bin energies.
    pub fn energy(&self) -> &[f64] {
        &self.energy
    }

    /// Bin fluences.
    pub fn fluence(&self) -> &[f64] {
        &self.fluence
    }

    /// μtr/ρ at the bin energies.
    pub fn mutr(&self) -> &[f64] {
        &self.mutr
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.energy.len()
    }

    /// True if there are no bins.
    pub fn is_empty(&self) -> bool {
        self.energy.is_empty()
    }

    /// The weights `E · Φ · μtr/ρ`.
    pub fn weights(&self) -> Vec<f64> {
        self.energy
            .iter()
            .zip(&self.fluence)
            .zip(&self.mutr)
            .map(|((e, f), m)| e * f * m)
            .collect()
    }

    /// Air kerma up to a constant factor, `Σ w_i`.
    pub fn air_kerma(&self) -> f64 {
        self.weights().iter().sum()
    }
}

/// Kerma transmission through `thickness` cm of absorber,
/// `Σ w_i exp(-μ_i t) / Σ w_i`.
///
/// `mu` holds the linear attenuation coefficients at the bin energies.
///
/// # Examples
///
/// ```
/// use spectro_core::spectrum::Spectrum;
/// use spectro_dosimetry::{transmission, KermaWeights};
///
/// let spectrum = Spectrum::new(vec![30.0], vec![1.0]).unwrap();
/// let weights = KermaWeights::new(&spectrum, vec![0.5]).unwrap();
/// let t = transmission(&weights, &[2.0_f64.ln()], 1.0);
/// assert!((t - 0.5).abs() < 1e-12);
/// ```
pub fn transmission(weights: &KermaWeights, mu: &[f64], thickness: f64) -> f64 {
    let w = weights.weights();
    let total: f64 = w.iter().sum();
    let attenuated: f64 = w
        .iter()
        .zip(mu)
        .map(|(w, mu)| w * (-mu * thickness).exp())
        .sum();
    attenuated / total
}
