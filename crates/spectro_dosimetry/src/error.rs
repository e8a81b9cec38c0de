//! Error types for dosimetry computations.

use adapter_tables::TableError;
use spectro_core::types::{DataError, InterpolationError, SolverError};
use thiserror::Error;

/// Dosimetry errors.
#[derive(Error, Debug)]
pub enum DosimetryError {
    /// Spectrum energy not covered by a coefficient table.
    #[error("Energy {energy} outside the tabulated range [{min}, {max}]")]
    OutsideTable {
        /// Requested energy
        energy: f64,
        /// Lowest tabulated energy
        min: f64,
        /// Highest tabulated energy
        max: f64,
    },

    /// Coefficient table width without an angle layout.
    #[error("Unsupported coefficient table layout: {columns} value columns (expected 1, 6, 7 or 8)")]
    UnsupportedLayout {
        /// Number of value columns
        columns: usize,
    },

    /// Too few positive values to interpolate in log-log space.
    #[error("Column '{label}' has fewer than 3 positive values")]
    InsufficientSupport {
        /// Column label
        label: String,
    },

    /// Target transmission outside (0, 1).
    #[error("Transmission ratio must lie in (0, 1), got {0}")]
    InvalidRatio(f64),

    /// Absorber density not a positive finite number.
    #[error("Absorber density must be a positive finite number, got {0}")]
    InvalidDensity(f64),

    /// Spectrum weights sum to zero.
    #[error("Spectrum carries no air kerma")]
    ZeroKerma,

    /// Invalid Monte Carlo settings.
    #[error("Invalid uncertainty configuration: {0}")]
    InvalidConfig(String),

    /// Interpolation failure.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    /// Layer search failure.
    #[error(transparent)]
    Solver(#[from] SolverError),

    /// Invalid spectrum or table data.
    #[error(transparent)]
    Data(#[from] DataError),

    /// File reading failure.
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Result alias for dosimetry operations.
pub type DosimetryResult<T> = Result<T, DosimetryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_table_message() {
        let err = DosimetryError::OutsideTable {
            energy: 200.0,
            min: 1.0,
            max: 150.0,
        };
        assert_eq!(err.to_string(), "Energy 200 outside the tabulated range [1, 150]");
    }

    #[test]
    fn test_from_solver_error() {
        let err: DosimetryError = SolverError::NumericalInstability("nan".to_string()).into();
        assert!(matches!(err, DosimetryError::Solver(_)));
    }
}
