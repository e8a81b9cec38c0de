//! HVL command implementation
//!
//! Computes the first and second half-value layers of a spectrum.

use clap::Args;
use std::path::PathBuf;
use tracing::info;

use adapter_tables::read_spectrum;
use spectro_dosimetry::{AttenuationData, HvlCalculator, HvlResult};

use crate::config::SpectroConfig;
use crate::error::require_file;
use crate::Result;

/// Arguments of `spectro hvl`
#[derive(Args, Debug, Clone)]
pub struct HvlArgs {
    /// Spectrum: energy and fluence (CSV with header, or whitespace separated text)
    #[arg(short, long)]
    pub spectrum: PathBuf,

    /// μ/ρ table of the absorber (whitespace separated)
    #[arg(long)]
    pub mu: PathBuf,

    /// μtr/ρ table of air (whitespace separated)
    #[arg(long)]
    pub mutr: PathBuf,

    /// Absorber density in g/cm³ (defaults to the configured value)
    #[arg(long)]
    pub density: Option<f64>,
}

/// Run the hvl command
pub fn run(args: &HvlArgs, config: &SpectroConfig) -> Result<HvlResult> {
    for path in [&args.spectrum, &args.mu, &args.mutr] {
        require_file(path)?;
    }

    let density = args.density.unwrap_or(config.hvl.density);
    info!("Computing half-value layers...");
    info!("  Spectrum: {}", args.spectrum.display());
    info!("  Density: {} g/cm3", density);

    let data = AttenuationData::load(&args.mu, &args.mutr, density)?;
    let spectrum = read_spectrum(&args.spectrum)?;
    let result = HvlCalculator::new(&spectrum, &data)?
        .with_search(config.halving_search()?)
        .compute()?;

    println!("HVL1:        {:.6} cm", result.first);
    println!("HVL2:        {:.6} cm", result.second);
    println!("Homogeneity: {:.6}", result.homogeneity);
    Ok(result)
}
