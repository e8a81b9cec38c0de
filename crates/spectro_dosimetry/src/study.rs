//! Batch conversion coefficient studies.

use crate::attenuation::LogLogCurve;
use crate::conversion::{weighted_mean, ConversionTable};
use crate::error::DosimetryResult;
use crate::kerma::KermaWeights;
use crate::uncertainty::{MonteCarloEstimator, SampleStatistics, UncertaintyConfig};
use spectro_core::spectrum::Spectrum;
use tracing::info;

/// Result for one (table, spectrum, angle) combination.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRecord {
    /// Conversion table name
    pub table: String,
    /// Spectrum name
    pub spectrum: String,
    /// Angle of incidence in degrees
    pub angle: u32,
    /// Report file stem, see [`ConversionTable::report_stem`]
    pub report: String,
    /// Kerma-weighted coefficient at the nominal spectrum
    pub nominal: f64,
    /// Monte Carlo statistics
    pub stats: SampleStatistics,
}

/// Runs every coefficient table against every spectrum.
///
/// Records come out grouped by table, then spectrum, then angle.
#[derive(Debug, Clone)]
pub struct ConversionStudy {
    mutr: LogLogCurve,
    estimator: MonteCarloEstimator,
}

impl ConversionStudy {
    /// Study using the μtr/ρ curve of air and the given Monte Carlo settings.
    ///
    /// # Errors
    ///
    /// `DosimetryError::InvalidConfig` for invalid settings.
    pub fn new(mutr: LogLogCurve, config: UncertaintyConfig) -> DosimetryResult<Self> {
        Ok(Self {
            mutr,
            estimator: MonteCarloEstimator::new(config)?,
        })
    }

    /// Evaluate one spectrum against one table, one record per angle.
    ///
    /// # Errors
    ///
    /// `DosimetryError::OutsideTable` if a bin lies outside the μtr/ρ table.
    pub fn evaluate(
        &self,
        table: &ConversionTable,
        name: &str,
        spectrum: &Spectrum,
    ) -> DosimetryResult<Vec<ConversionRecord>> {
        let weights = KermaWeights::from_curve(spectrum, &self.mutr)?;
        let nominal_weights = weights.weights();
        let columns = (0..table.columns().len())
            .map(|c| table.coefficients(c, weights.energy()))
            .collect::<DosimetryResult<Vec<_>>>()?;
        let stats = self.estimator.run_many(&weights, &columns)?;

        Ok(table
            .columns()
            .iter()
            .enumerate()
            .zip(stats)
            .map(|((c, column), stats)| ConversionRecord {
                table: table.name().to_string(),
                spectrum: name.to_string(),
                angle: column.angle(),
                report: table.report_stem(c),
                nominal: weighted_mean(&nominal_weights, &columns[c]),
                stats,
            })
            .collect())
    }

    /// Evaluate every (table, spectrum) pair.
    ///
    /// # Errors
    ///
    /// The first failure of [`evaluate`](Self::evaluate).
    pub fn run(
        &self,
        tables: &[ConversionTable],
        spectra: &[(String, Spectrum)],
    ) -> DosimetryResult<Vec<ConversionRecord>> {
        let mut records = Vec::with_capacity(tables.len() * spectra.len());
        for table in tables {
            for (name, spectrum) in spectra {
                let batch = self.evaluate(table, name, spectrum)?;
                for record in &batch {
                    info!(
                        table = %record.table,
                        spectrum = %record.spectrum,
                        angle = record.angle,
                        mean = record.stats.mean,
                        cv_percent = record.stats.cv_percent,
                        "Conversion coefficient"
                    );
                }
                records.extend(batch);
            }
        }
        Ok(records)
    }
}
