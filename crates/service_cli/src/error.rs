//! CLI error types.

use adapter_tables::TableError;
use spectro_core::types::{DataError, InterpolationError, SolverError};
use spectro_dosimetry::DosimetryError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid command line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Table reading or writing error
    #[error(transparent)]
    Table(#[from] TableError),

    /// Dataset error
    #[error(transparent)]
    Data(#[from] DataError),

    /// Interpolation error
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    /// Search parameter error
    #[error(transparent)]
    Solver(#[from] SolverError),

    /// Dosimetry error
    #[error(transparent)]
    Dosimetry(#[from] DosimetryError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Fail with `CliError::FileNotFound` unless `path` exists.
pub fn require_file(path: &std::path::Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(CliError::FileNotFound(path.display().to_string()))
    }
}
