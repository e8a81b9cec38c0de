//! Error types for table I/O.

use spectro_core::types::DataError;
use thiserror::Error;

/// Table reading and writing errors.
///
/// The messages of the first three variants are user facing and kept
/// stable.
///
/// # Examples
/// ```
/// use adapter_tables::TableError;
///
/// let err = TableError::UnsupportedFileType;
/// assert_eq!(err.to_string(), "Unsupported file type. Must be a CSV or Excel file.");
/// ```
#[derive(Error, Debug)]
pub enum TableError {
    /// Requested column index beyond the table width.
    #[error("Specified columns are not found in the file.")]
    MissingColumns,

    /// Extension is neither CSV nor a spreadsheet format.
    #[error("Unsupported file type. Must be a CSV or Excel file.")]
    UnsupportedFileType,

    /// I/O or parse failure while reading.
    #[error("Error reading file: {0}")]
    Read(String),

    /// I/O or encoding failure while writing.
    #[error("Error writing file: {0}")]
    Write(String),

    /// Table width outside the accepted range.
    #[error("Expected between {min} and {max} columns, found {found}")]
    ColumnCount {
        /// Columns in the file
        found: usize,
        /// Minimum accepted
        min: usize,
        /// Maximum accepted
        max: usize,
    },

    /// Cell contents rejected by dataset validation.
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Result alias for table operations.
pub type TableResult<T> = Result<T, TableError>;

impl TableError {
    pub(crate) fn read(cause: impl std::fmt::Display) -> Self {
        TableError::Read(cause.to_string())
    }

    pub(crate) fn write(cause: impl std::fmt::Display) -> Self {
        TableError::Write(cause.to_string())
    }
}
