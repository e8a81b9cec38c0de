//! Spectro CLI - Command Line Operations for X-ray Spectrometry
//!
//! This is the operational entry point for the spectrometry toolkit.
//!
//! # Commands
//!
//! - `spectro interpolate --input <file>` - Resample tabulated data with one or more methods
//! - `spectro hvl --spectrum <file> --mu <file> --mutr <file>` - Half-value layers of a spectrum
//! - `spectro convert --coefficients <files> --spectra <files> --mutr <file>` - Spectrum-averaged conversion coefficients
//! - `spectro check` - Show the effective configuration
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate orchestrates the core,
//! table adapter and dosimetry crates behind a single command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::convert::ConvertArgs;
use commands::hvl::HvlArgs;
use commands::interpolate::InterpolateArgs;
use config::SpectroConfig;

/// X-ray spectrometry toolkit CLI
#[derive(Parser)]
#[command(name = "spectro")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "spectro.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpolate a two-column table
    Interpolate(InterpolateArgs),

    /// Compute half-value layers of a spectrum
    Hvl(HvlArgs),

    /// Average conversion coefficients over spectra with uncertainties
    Convert(ConvertArgs),

    /// Check configuration
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SpectroConfig::load_or_default(&cli.config)?.with_env_override();

    // Initialise tracing
    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_level.to_lowercase()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(config = %cli.config.display(), "Configuration loaded");

    if let Commands::Check = cli.command {
        return commands::check::run(&config);
    }
    config.validate()?;

    match cli.command {
        Commands::Interpolate(args) => commands::interpolate::run(&args, &config).map(|_| ()),
        Commands::Hvl(args) => commands::hvl::run(&args, &config).map(|_| ()),
        Commands::Convert(args) => commands::convert::run(&args, &config).map(|_| ()),
        Commands::Check => commands::check::run(&config),
    }
}
