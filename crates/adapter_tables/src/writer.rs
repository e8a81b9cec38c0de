//! Interpolation table writers.

use crate::error::{TableError, TableResult};
use crate::options::FileKind;
use rust_xlsxwriter::Workbook;
use spectro_core::interpolation::InterpolationTable;
use std::path::Path;
use tracing::info;

/// Write `table` as CSV or Excel, chosen by the extension of `path`.
///
/// The header row is `x` followed by the method names. Non-finite values
/// (NaN and infinities) are written as empty cells in both formats, so the
/// file reads back with NaN.
///
/// # Errors
///
/// * `TableError::UnsupportedFileType` - Extension is not CSV or Excel
/// * `TableError::Write` - I/O or encoding failure
pub fn write_table(path: impl AsRef<Path>, table: &InterpolationTable) -> TableResult<()> {
    let path = path.as_ref();
    match FileKind::from_path(path)? {
        FileKind::Csv => write_csv(path, table)?,
        FileKind::Excel => write_xlsx(path, table)?,
    }
    info!(path = %path.display(), rows = table.len(), "Interpolation table written");
    Ok(())
}

fn write_csv(path: &Path, table: &InterpolationTable) -> TableResult<()> {
    let mut writer = csv::Writer::from_path(path).map_err(TableError::write)?;
    writer
        .write_record(table.headers())
        .map_err(TableError::write)?;
    for row in table.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|&v| finite(v).map(|v| v.to_string()).unwrap_or_default())
            .collect();
        writer.write_record(&cells).map_err(TableError::write)?;
    }
    writer.flush().map_err(TableError::write)
}

fn write_xlsx(path: &Path, table: &InterpolationTable) -> TableResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in table.headers().iter().enumerate() {
        worksheet
            .write_string(0, col as u16, header.as_str())
            .map_err(TableError::write)?;
    }
    for (r, row) in table.rows().enumerate() {
        for (col, value) in row.iter().enumerate() {
            if let Some(value) = finite(*value) {
                worksheet
                    .write_number(r as u32 + 1, col as u16, value)
                    .map_err(TableError::write)?;
            }
        }
    }

    workbook.save(path).map_err(TableError::write)
}

/// Value to write, `None` for an empty cell.
fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
