//! Monte Carlo uncertainty of spectrum-averaged coefficients.
//!
//! Every sample perturbs the bin energies, fluences and μtr/ρ values with
//! independent normal noise of the configured relative widths and recomputes
//! the kerma-weighted mean. Sample `j` draws from its own generator seeded
//! with `seed + j`, so results do not depend on the thread schedule.

use crate::conversion::weighted_mean;
use crate::error::{DosimetryError, DosimetryResult};
use crate::kerma::KermaWeights;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;
use spectro_core::types::DataError;
use tracing::debug;

/// Monte Carlo settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UncertaintyConfig {
    /// Number of samples
    pub samples: usize,
    /// Relative standard uncertainty of the bin energies
    pub u_energy: f64,
    /// Relative standard uncertainty of the fluences
    pub u_fluence: f64,
    /// Relative standard uncertainty of μtr/ρ
    pub u_mutr: f64,
    /// Base seed
    pub seed: u64,
}

impl Default for UncertaintyConfig {
    fn default() -> Self {
        Self {
            samples: 100,
            u_energy: 0.01,
            u_fluence: 0.01,
            u_mutr: 0.017,
            seed: 42,
        }
    }
}

impl UncertaintyConfig {
    /// Check the settings.
    ///
    /// # Errors
    ///
    /// `DosimetryError::InvalidConfig` for zero samples or a negative or
    /// non-finite relative uncertainty.
    pub fn validate(&self) -> DosimetryResult<()> {
        if self.samples == 0 {
            return Err(DosimetryError::InvalidConfig(
                "samples must be positive".to_string(),
            ));
        }
        for (name, u) in [
            ("u_energy", self.u_energy),
            ("u_fluence", self.u_fluence),
            ("u_mutr", self.u_mutr),
        ] {
            if !(u.is_finite() && u >= 0.0) {
                return Err(DosimetryError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, u
                )));
            }
        }
        Ok(())
    }
}

/// Mean, population standard deviation and coefficient of variation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStatistics {
    /// Sample mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// `100 · std_dev / mean`
    pub cv_percent: f64,
}

impl SampleStatistics {
    /// Summarise `samples`; `None` when empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use spectro_dosimetry::SampleStatistics;
    ///
    /// let stats = SampleStatistics::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    /// assert_eq!(stats.mean, 5.0);
    /// assert_eq!(stats.std_dev, 2.0);
    /// assert_eq!(stats.cv_percent, 40.0);
    /// ```
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();
        Some(Self {
            mean,
            std_dev,
            cv_percent: std_dev * 100.0 / mean,
        })
    }
}

/// Runs the Monte Carlo loop for one spectrum.
#[derive(Debug, Clone, Copy)]
pub struct MonteCarloEstimator {
    config: UncertaintyConfig,
}

impl MonteCarloEstimator {
    /// Estimator with validated settings.
    ///
    /// # Errors
    ///
    /// Same as [`UncertaintyConfig::validate`].
    pub fn new(config: UncertaintyConfig) -> DosimetryResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Settings in use.
    pub fn config(&self) -> &UncertaintyConfig {
        &self.config
    }

    /// Statistics of the weighted mean of `coefficients`.
    ///
    /// # Errors
    ///
    /// Same as [`run_many`](Self::run_many).
    pub fn run(
        &self,
        weights: &KermaWeights,
        coefficients: &[f64],
    ) -> DosimetryResult<SampleStatistics> {
        let mut stats = self.run_many(weights, &[coefficients.to_vec()])?;
        stats.pop().ok_or(DosimetryError::ZeroKerma)
    }

    /// Statistics for several coefficient columns sharing the same
    /// perturbed weights.
    ///
    /// # Errors
    ///
    /// * `DosimetryError::Data` - A column differs in length from the weights
    /// * `DosimetryError::ZeroKerma` - A perturbed sample carries no positive
    ///   air kerma
    pub fn run_many(
        &self,
        weights: &KermaWeights,
        columns: &[Vec<f64>],
    ) -> DosimetryResult<Vec<SampleStatistics>> {
        if let Some(column) = columns.iter().find(|c| c.len() != weights.len()) {
            return Err(DataError::LengthMismatch {
                x: weights.len(),
                y: column.len(),
            }
            .into());
        }

        let cfg = self.config;
        let per_sample: Vec<Vec<f64>> = (0..cfg.samples)
            .into_par_iter()
            .map(|j| {
                let mut rng = StdRng::seed_from_u64(cfg.seed.wrapping_add(j as u64));
                let perturbed = perturbed_weights(weights, &cfg, &mut rng)?;
                Ok(columns
                    .iter()
                    .map(|column| weighted_mean(&perturbed, column))
                    .collect())
            })
            .collect::<DosimetryResult<Vec<Vec<f64>>>>()?;

        debug!(samples = cfg.samples, columns = columns.len(), "Monte Carlo run finished");

        (0..columns.len())
            .map(|c| {
                let samples: Vec<f64> = per_sample.iter().map(|row| row[c]).collect();
                SampleStatistics::from_samples(&samples).ok_or(DosimetryError::ZeroKerma)
            })
            .collect()
    }
}

fn perturbed_weights(
    weights: &KermaWeights,
    cfg: &UncertaintyConfig,
    rng: &mut StdRng,
) -> DosimetryResult<Vec<f64>> {
    let mut draw = |value: f64, u: f64| -> DosimetryResult<f64> {
        let normal = Normal::new(value, u * value.abs())
            .map_err(|e| DosimetryError::InvalidConfig(e.to_string()))?;
        Ok(normal.sample(rng))
    };

    let perturbed = weights
        .energy()
        .iter()
        .zip(weights.fluence())
        .zip(weights.mutr())
        .map(|((&e, &f), &m)| {
            let e = draw(e, cfg.u_energy)?;
            let f = draw(f, cfg.u_fluence)?;
            let m = draw(m, cfg.u_mutr)?;
            Ok(e * f * m)
        })
        .collect::<DosimetryResult<Vec<f64>>>()?;

    let total: f64 = perturbed.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        return Err(DosimetryError::ZeroKerma);
    }
    Ok(perturbed)
}
