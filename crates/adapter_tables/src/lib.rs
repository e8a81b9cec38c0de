//! # adapter_tables: Table I/O for Spectrometry Data
//!
//! ## Adapter Layer Role
//!
//! adapter_tables turns files on disk into `spectro_core` values and back:
//! - Two-column datasets from CSV or Excel workbooks ([`read_file`])
//! - Interpolation result tables to CSV or Excel ([`write_table`])
//! - Whitespace separated attenuation tables ([`read_whitespace_table`])
//! - Comma separated spectra ([`read_spectrum_csv`])
//! - `;` separated conversion coefficient tables ([`read_coefficient_table`])
//! - Append-only statistics reports ([`ReportWriter`])
//!
//! The file kind is chosen from the extension; see [`FileKind`].
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use adapter_tables::{read_file, ReadOptions};
//! use spectro_core::interpolation::Method;
//!
//! let data = read_file("samples.xlsx", &ReadOptions::default())?;
//! let y = data.interpolate_one(2.5, Method::Pchip)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod error;
mod options;
mod reader;
mod report;
mod writer;

pub use error::{TableError, TableResult};
pub use options::{FileKind, ReadOptions, SheetRef};
pub use reader::{
    read_coefficient_table, read_file, read_spectrum, read_spectrum_csv, read_whitespace_table,
    NumericTable,
};
pub use report::{ReportRow, ReportWriter};
pub use writer::write_table;
