//! Half-value layers.

use crate::attenuation::AttenuationData;
use crate::error::{DosimetryError, DosimetryResult};
use crate::kerma::{transmission, KermaWeights};
use spectro_core::math::solvers::HalvingSearch;
use spectro_core::spectrum::Spectrum;
use tracing::info;

/// First and second half-value layers of a beam, in cm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HvlResult {
    /// Thickness halving the air kerma
    pub first: f64,
    /// Additional thickness halving it again
    pub second: f64,
    /// `first / second`
    pub homogeneity: f64,
}

/// Finds absorber thicknesses that reach a target kerma transmission.
///
/// # Examples
///
/// ```
/// use spectro_core::spectrum::Spectrum;
/// use spectro_dosimetry::{AttenuationData, HvlCalculator};
///
/// // Flat μ/ρ = 1 cm²/g at density 1: a single line gives HVL = ln 2
/// let table = [10.0, 20.0, 30.0, 40.0];
/// let data = AttenuationData::new(&table, &[1.0; 4], &table, &[1.0; 4], 1.0).unwrap();
/// let spectrum = Spectrum::new(vec![25.0], vec![1.0]).unwrap();
/// let hvl = HvlCalculator::new(&spectrum, &data).unwrap().compute().unwrap();
/// assert!((hvl.first - 2.0_f64.ln()).abs() < 1e-4);
/// assert!((hvl.homogeneity - 1.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct HvlCalculator {
    weights: KermaWeights,
    mu: Vec<f64>,
    search: HalvingSearch<f64>,
}

impl HvlCalculator {
    /// Prepare the kerma weights and attenuation coefficients of `spectrum`.
    ///
    /// # Errors
    ///
    /// `DosimetryError::OutsideTable` if a bin lies outside either table,
    /// `DosimetryError::ZeroKerma` for an empty beam.
    pub fn new(spectrum: &Spectrum, data: &AttenuationData) -> DosimetryResult<Self> {
        let weights = KermaWeights::from_curve(spectrum, data.mutr_curve())?;
        let mu = spectrum
            .energy()
            .iter()
            .map(|&e| data.linear_attenuation(e))
            .collect::<DosimetryResult<Vec<f64>>>()?;
        Ok(Self {
            weights,
            mu,
            search: HalvingSearch::default(),
        })
    }

    /// Replace the default search settings.
    pub fn with_search(mut self, search: HalvingSearch<f64>) -> Self {
        self.search = search;
        self
    }

    /// Kerma weights of the beam.
    pub fn weights(&self) -> &KermaWeights {
        &self.weights
    }

    /// Transmission through `thickness` cm.
    pub fn transmission(&self, thickness: f64) -> f64 {
        transmission(&self.weights, &self.mu, thickness)
    }

    /// Thickness with transmission `ratio`.
    ///
    /// # Errors
    ///
    /// * `DosimetryError::InvalidRatio` - `ratio` outside (0, 1)
    /// * `DosimetryError::Solver` - Search failure, including
    ///   `SolverError::NoConvergence` when the layer lies beyond the search
    ///   range
    pub fn layer(&self, ratio: f64) -> DosimetryResult<f64> {
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(DosimetryError::InvalidRatio(ratio));
        }
        Ok(self.search.find(|t| self.transmission(t), ratio)?)
    }

    /// First half-value layer.
    ///
    /// # Errors
    ///
    /// Same as [`layer`](Self::layer).
    pub fn first_hvl(&self) -> DosimetryResult<f64> {
        self.layer(0.5)
    }

    /// First and second half-value layers and the homogeneity coefficient.
    ///
    /// # Errors
    ///
    /// Same as [`layer`](Self::layer).
    pub fn compute(&self) -> DosimetryResult<HvlResult> {
        let first = self.first_hvl()?;
        let quarter = self.layer(0.25)?;
        let second = quarter - first;
        let result = HvlResult {
            first,
            second,
            homogeneity: first / second,
        };
        info!(
            hvl1 = result.first,
            hvl2 = result.second,
            homogeneity = result.homogeneity,
            "Half-value layers"
        );
        Ok(result)
    }
}
