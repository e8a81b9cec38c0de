//! Check command implementation
//!
//! Prints the effective configuration and the available methods.

use spectro_core::interpolation::Method;
use tracing::info;

use crate::config::SpectroConfig;
use crate::error::CliError;
use crate::Result;

/// Run the check command
pub fn run(config: &SpectroConfig) -> Result<()> {
    info!("Checking configuration...");

    println!("spectro {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Interpolation methods:");
    for method in Method::ALL {
        println!("  {}", method.name());
    }
    println!();
    println!("Effective configuration:");
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| CliError::invalid_argument(format!("cannot render configuration: {}", e)))?;
    println!("{}", rendered);

    config.validate()?;
    println!("Configuration OK");
    Ok(())
}
