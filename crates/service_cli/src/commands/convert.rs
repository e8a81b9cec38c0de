//! Convert command implementation
//!
//! Averages monoenergetic conversion coefficients over spectra and writes one
//! report per (table, angle).

use clap::Args;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::info;

use adapter_tables::{read_spectrum_csv, read_whitespace_table, ReportRow, ReportWriter};
use spectro_core::spectrum::Spectrum;
use spectro_dosimetry::{ConversionRecord, ConversionStudy, ConversionTable, LogLogCurve};

use crate::config::SpectroConfig;
use crate::error::require_file;
use crate::Result;

/// Arguments of `spectro convert`
#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// `;` separated coefficient tables
    #[arg(long, num_args = 1.., required = true)]
    pub coefficients: Vec<PathBuf>,

    /// Spectra as CSV: energy, fluence
    #[arg(long, num_args = 1.., required = true)]
    pub spectra: Vec<PathBuf>,

    /// μtr/ρ table of air (whitespace separated)
    #[arg(long)]
    pub mutr: PathBuf,

    /// Directory for the reports
    #[arg(short, long, default_value = "./reports")]
    pub output_dir: PathBuf,

    /// Monte Carlo samples (defaults to the configured value)
    #[arg(long)]
    pub samples: Option<usize>,

    /// Base seed (defaults to the configured value)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Run the convert command
pub fn run(args: &ConvertArgs, config: &SpectroConfig) -> Result<Vec<ConversionRecord>> {
    for path in args.coefficients.iter().chain(&args.spectra).chain([&args.mutr]) {
        require_file(path)?;
    }

    let mut uncertainty = config.uncertainty_config();
    if let Some(samples) = args.samples {
        uncertainty.samples = samples;
    }
    if let Some(seed) = args.seed {
        uncertainty.seed = seed;
    }

    let tables = args
        .coefficients
        .iter()
        .map(ConversionTable::load)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let spectra = args
        .spectra
        .iter()
        .map(|path| Ok((file_name(path), read_spectrum_csv(path)?)))
        .collect::<Result<Vec<(String, Spectrum)>>>()?;

    let mutr = read_whitespace_table(&args.mutr, 2)?;
    let curve = LogLogCurve::new(
        "mutr/rho",
        mutr.column(0).unwrap_or_default(),
        mutr.column(1).unwrap_or_default(),
    )?;

    info!(
        tables = tables.len(),
        spectra = spectra.len(),
        samples = uncertainty.samples,
        seed = uncertainty.seed,
        "Starting conversion study"
    );
    let records = ConversionStudy::new(curve, uncertainty)?.run(&tables, &spectra)?;

    write_reports(&args.output_dir, &records)?;
    for record in &records {
        println!(
            "{:<20} {:<24} {:>4}  mean {:.6}  sd {:.6}  cv {:.3}%",
            record.report,
            record.spectrum,
            record.angle,
            record.stats.mean,
            record.stats.std_dev,
            record.stats.cv_percent
        );
    }
    Ok(records)
}

/// Replace previous reports and append one row per record.
fn write_reports(dir: &Path, records: &[ConversionRecord]) -> Result<()> {
    std::fs::create_dir_all(dir)?;

    let stems: BTreeSet<&str> = records.iter().map(|r| r.report.as_str()).collect();
    for stem in &stems {
        ReportWriter::new(report_path(dir, stem)).reset()?;
    }

    for record in records {
        ReportWriter::new(report_path(dir, &record.report)).append(&ReportRow {
            name: record.spectrum.clone(),
            mean: record.stats.mean,
            std_dev: record.stats.std_dev,
            cv_percent: record.stats.cv_percent,
        })?;
    }
    info!(dir = %dir.display(), reports = stems.len(), "Reports written");
    Ok(())
}

fn report_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{}.txt", stem))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
