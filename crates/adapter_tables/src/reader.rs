//! Table readers.

use crate::error::{TableError, TableResult};
use crate::options::{FileKind, ReadOptions, SheetRef};
use calamine::{open_workbook_auto, Data, Reader};
use spectro_core::dataset::Dataset;
use spectro_core::spectrum::Spectrum;
use spectro_core::types::DataError;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Coefficient tables carry an energy column plus 1 to 8 value columns.
const COEFFICIENT_COLUMNS: (usize, usize) = (2, 9);

/// Column-major numeric table with optional header names.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericTable {
    headers: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl NumericTable {
    /// Wrap columns of equal length.
    ///
    /// # Errors
    ///
    /// `DataError::LengthMismatch` if the columns differ in length.
    pub fn new(headers: Vec<String>, columns: Vec<Vec<f64>>) -> Result<Self, DataError> {
        if let Some(first) = columns.first() {
            if let Some(other) = columns.iter().find(|c| c.len() != first.len()) {
                return Err(DataError::LengthMismatch {
                    x: first.len(),
                    y: other.len(),
                });
            }
        }
        Ok(Self { headers, columns })
    }

    /// Header names; empty for headerless input.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All columns.
    pub fn columns(&self) -> &[Vec<f64>] {
        &self.columns
    }

    /// Column `index`, if present.
    pub fn column(&self, index: usize) -> Option<&[f64]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// True if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read an (x, y) dataset from a CSV file or a spreadsheet.
///
/// Empty cells become NaN, so callers usually follow with
/// [`Dataset::dropna`].
///
/// # Errors
///
/// * `TableError::UnsupportedFileType` - Extension is not CSV or Excel
/// * `TableError::MissingColumns` - `x_col` or `y_col` beyond the table width
/// * `TableError::Read` - I/O, CSV or workbook failure
/// * `TableError::Data` - Non-numeric cell
pub fn read_file(path: impl AsRef<Path>, options: &ReadOptions) -> TableResult<Dataset> {
    let path = path.as_ref();
    let kind = FileKind::from_path(path)?;
    let wanted = [options.x_col, options.y_col];

    let mut columns = match kind {
        FileKind::Csv => {
            let file = fs::File::open(path).map_err(TableError::read)?;
            read_delimited(file, b',', options.header, Some(&wanted))?.1
        }
        FileKind::Excel => read_sheet(path, &options.sheet, options.header, &wanted)?,
    };

    let y = columns.pop().unwrap_or_default();
    let x = columns.pop().unwrap_or_default();
    info!(path = %path.display(), rows = x.len(), ?kind, "Dataset read");
    Ok(Dataset::new(x, y)?)
}

/// Read a comma separated spectrum: energy, fluence and an optional
/// third column that is ignored. The first row is a header.
///
/// # Errors
///
/// * `TableError::MissingColumns` - Fewer than two columns
/// * `TableError::Read` - I/O or CSV failure
/// * `TableError::Data` - Non-numeric cell
pub fn read_spectrum_csv(path: impl AsRef<Path>) -> TableResult<Spectrum> {
    let path = path.as_ref();
    let text = read_text(path)?;
    let (_, mut columns) = read_delimited(text.as_bytes(), b',', true, Some(&[0, 1]))?;
    let values = columns.pop().unwrap_or_default();
    let energy = columns.pop().unwrap_or_default();
    debug!(path = %path.display(), bins = energy.len(), "Spectrum read");
    Ok(Spectrum::new(energy, values)?)
}

/// Read a spectrum from `.csv` or from a whitespace separated text file.
///
/// # Errors
///
/// Same as [`read_spectrum_csv`] or [`read_whitespace_table`].
pub fn read_spectrum(path: impl AsRef<Path>) -> TableResult<Spectrum> {
    let path = path.as_ref();
    match FileKind::from_path(path) {
        Ok(FileKind::Csv) => read_spectrum_csv(path),
        _ => {
            let table = read_whitespace_table(path, 2)?;
            let mut columns = table.columns;
            let values = columns.pop().unwrap_or_default();
            let energy = columns.pop().unwrap_or_default();
            Ok(Spectrum::new(energy, values)?)
        }
    }
}

/// Read a `;` separated conversion coefficient table.
///
/// The first row holds the headers, the first column the energies and the
/// remaining 1 to 8 columns the coefficients. Files that are not valid UTF-8
/// are decoded as Latin-1.
///
/// # Errors
///
/// * `TableError::ColumnCount` - Fewer than 2 or more than 9 columns
/// * `TableError::Read` - I/O or CSV failure
/// * `TableError::Data` - Non-numeric cell
pub fn read_coefficient_table(path: impl AsRef<Path>) -> TableResult<NumericTable> {
    let path = path.as_ref();
    let text = read_text(path)?;
    let (headers, columns) = read_delimited(text.as_bytes(), b';', true, None)?;

    let (min, max) = COEFFICIENT_COLUMNS;
    if columns.len() < min || columns.len() > max {
        return Err(TableError::ColumnCount {
            found: columns.len(),
            min,
            max,
        });
    }

    debug!(
        path = %path.display(),
        rows = columns[0].len(),
        columns = columns.len(),
        "Coefficient table read"
    );
    Ok(NumericTable::new(headers, columns)?)
}

/// Read the first `columns` numbers of every line of a whitespace
/// separated table.
///
/// Lines that do not start with `columns` numbers (headers, comments,
/// absorption edge labels) are skipped with a warning.
///
/// # Errors
///
/// * `TableError::Read` - I/O failure, or no numeric line at all
pub fn read_whitespace_table(path: impl AsRef<Path>, columns: usize) -> TableResult<NumericTable> {
    let path = path.as_ref();
    let text = read_text(path)?;
    let mut data = vec![Vec::new(); columns];
    let mut skipped = 0usize;

    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let parsed: Option<Vec<f64>> = line
            .split_whitespace()
            .take(columns)
            .map(|token| token.parse::<f64>().ok())
            .collect();
        match parsed {
            Some(values) if values.len() == columns => {
                for (column, value) in data.iter_mut().zip(values) {
                    column.push(value);
                }
            }
            _ => {
                skipped += 1;
                warn!(path = %path.display(), line = number + 1, content = line, "Skipping non-numeric line");
            }
        }
    }

    if data.first().map_or(true, Vec::is_empty) {
        return Err(TableError::read(format!(
            "{}: no numeric rows",
            path.display()
        )));
    }

    debug!(path = %path.display(), rows = data[0].len(), skipped, "Whitespace table read");
    Ok(NumericTable::new(Vec::new(), data)?)
}

/// Read file contents as UTF-8, falling back to Latin-1.
fn read_text(path: &Path) -> TableResult<String> {
    let bytes = fs::read(path).map_err(|e| TableError::read(format!("{}: {}", path.display(), e)))?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().into_iter().map(char::from).collect(),
    };
    Ok(text.trim_start_matches('\u{feff}').to_string())
}

/// Parse a delimited table into columns.
///
/// `wanted` selects columns by index; `None` keeps all of them. Short rows
/// are padded with NaN.
fn read_delimited<R: std::io::Read>(
    source: R,
    delimiter: u8,
    header: bool,
    wanted: Option<&[usize]>,
) -> TableResult<(Vec<String>, Vec<Vec<f64>>)> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(header)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers: Vec<String> = if header {
        reader
            .headers()
            .map_err(TableError::read)?
            .iter()
            .map(str::to_string)
            .collect()
    } else {
        Vec::new()
    };

    let records = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(TableError::read)?;

    let width = if header {
        headers.len()
    } else {
        records.first().map_or(0, |r| r.len())
    };

    let indices: Vec<usize> = match wanted {
        Some(indices) => {
            if indices.iter().any(|&i| i >= width) {
                return Err(TableError::MissingColumns);
            }
            indices.to_vec()
        }
        None => (0..width).collect(),
    };

    let mut columns = vec![Vec::with_capacity(records.len()); indices.len()];
    for record in &records {
        for (column, &index) in columns.iter_mut().zip(&indices) {
            column.push(parse_cell(record.get(index).unwrap_or(""))?);
        }
    }

    let headers = if header {
        indices.iter().map(|&i| headers[i].clone()).collect()
    } else {
        headers
    };
    Ok((headers, columns))
}

/// Read the selected columns of a worksheet.
fn read_sheet(
    path: &Path,
    sheet: &SheetRef,
    header: bool,
    wanted: &[usize],
) -> TableResult<Vec<Vec<f64>>> {
    let mut workbook = open_workbook_auto(path).map_err(TableError::read)?;
    let names = workbook.sheet_names();
    let name = match sheet {
        SheetRef::Index(index) => names
            .get(*index)
            .cloned()
            .ok_or_else(|| TableError::read(format!("worksheet index {} out of range", index)))?,
        SheetRef::Name(name) => {
            if !names.contains(name) {
                return Err(TableError::read(format!("worksheet named '{}' not found", name)));
            }
            name.clone()
        }
    };
    let range = workbook.worksheet_range(&name).map_err(TableError::read)?;

    if wanted.iter().any(|&i| i >= range.width()) {
        return Err(TableError::MissingColumns);
    }

    let skip = usize::from(header);
    let mut columns = vec![Vec::new(); wanted.len()];
    for row in range.rows().skip(skip) {
        for (column, &index) in columns.iter_mut().zip(wanted) {
            column.push(cell_value(row.get(index).unwrap_or(&Data::Empty))?);
        }
    }
    debug!(sheet = %name, rows = columns[0].len(), "Worksheet read");
    Ok(columns)
}

fn parse_cell(cell: &str) -> Result<f64, DataError> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(f64::NAN);
    }
    cell.parse::<f64>().map_err(|_| DataError::NonNumeric {
        value: cell.to_string(),
    })
}

fn cell_value(cell: &Data) -> Result<f64, DataError> {
    match cell {
        Data::Float(value) => Ok(*value),
        Data::Int(value) => Ok(*value as f64),
        Data::Empty => Ok(f64::NAN),
        Data::String(text) => parse_cell(text),
        other => Err(DataError::NonNumeric {
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    // ========================================
    // CSV datasets
    // ========================================

    #[test]
    fn test_read_csv_with_header() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "data.csv", b"x,y\n1,10\n2,20\n3,30\n");
        let data = read_file(&path, &ReadOptions::default()).unwrap();
        assert_eq!(data.x(), &[1.0, 2.0, 3.0]);
        assert_eq!(data.y(), &[10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_read_csv_without_header_and_swapped_columns() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "data.csv", b"5,1,0.5\n6,2,0.25\n");
        let options = ReadOptions::default().with_header(false).with_columns(2, 0);
        let data = read_file(&path, &options).unwrap();
        assert_eq!(data.x(), &[0.5, 0.25]);
        assert_eq!(data.y(), &[5.0, 6.0]);
    }

    #[test]
    fn test_empty_cells_read_as_nan() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "data.csv", b"x,y\n1,\n2,4\n3\n");
        let data = read_file(&path, &ReadOptions::default()).unwrap();
        assert!(data.y()[0].is_nan());
        assert!(data.y()[2].is_nan());
        assert_eq!(data.dropna().len(), 1);
    }

    #[test]
    fn test_missing_column() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "data.csv", b"x,y\n1,2\n");
        let err = read_file(&path, &ReadOptions::default().with_columns(0, 2)).unwrap_err();
        assert!(matches!(err, TableError::MissingColumns));
    }

    #[test]
    fn test_non_numeric_cell() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "data.csv", b"x,y\n1,abc\n");
        let err = read_file(&path, &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, TableError::Data(DataError::NonNumeric { .. })));
    }

    #[test]
    fn test_unsupported_and_missing_files() {
        let dir = TempDir::new().unwrap();
        let txt = write_file(&dir, "data.txt", b"1 2\n");
        assert!(matches!(
            read_file(&txt, &ReadOptions::default()),
            Err(TableError::UnsupportedFileType)
        ));
        let missing = dir.path().join("absent.csv");
        let err = read_file(&missing, &ReadOptions::default()).unwrap_err();
        assert!(err.to_string().starts_with("Error reading file: "));
    }

    // ========================================
    // Spectra and coefficient tables
    // ========================================

    #[test]
    fn test_read_spectrum_csv_ignores_third_column() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "spec.csv", b"E,fluence,kerma\n10,100,1\n20,50,2\n");
        let spectrum = read_spectrum_csv(&path).unwrap();
        assert_eq!(spectrum.energy(), &[10.0, 20.0]);
        assert_eq!(spectrum.values(), &[100.0, 50.0]);
    }

    #[test]
    fn test_read_spectrum_text() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "spec30.txt", b"10\t100\n20 50\n");
        let spectrum = read_spectrum(&path).unwrap();
        assert_eq!(spectrum.len(), 2);
        assert_relative_eq!(spectrum.values()[1], 50.0);
    }

    #[test]
    fn test_read_coefficient_table_latin1() {
        let dir = TempDir::new().unwrap();
        // 0xB0 is the degree sign in Latin-1 and invalid as UTF-8
        let mut bytes = b"E (keV);0\xB0;15\xB0\n".to_vec();
        bytes.extend_from_slice(b"10;0.5;0.4\n20;0.9;0.8\n");
        let path = write_file(&dir, "hp_slab.csv", &bytes);
        let table = read_coefficient_table(&path).unwrap();
        assert_eq!(table.width(), 3);
        assert_eq!(table.len(), 2);
        assert_eq!(table.headers()[1], "0\u{b0}");
        assert_eq!(table.column(2), Some(&[0.4, 0.8][..]));
    }

    #[test]
    fn test_coefficient_table_needs_values() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "h.csv", b"E\n10\n");
        assert!(matches!(
            read_coefficient_table(&path),
            Err(TableError::ColumnCount { found: 1, .. })
        ));
    }

    // ========================================
    // Whitespace tables
    // ========================================

    #[test]
    fn test_whitespace_table_skips_headers() {
        let dir = TempDir::new().unwrap();
        let text = b"Energy mu/rho\n(MeV) (cm2/g)\n1.0E-03 1.185E+03\n\n1.5E-03\t4.022E+02 extra\nK 1.5596E-03 3.621E+02\n";
        let path = write_file(&dir, "muAl.txt", text);
        let table = read_whitespace_table(&path, 2).unwrap();
        assert_eq!(table.len(), 2);
        assert_relative_eq!(table.column(0).unwrap()[1], 1.5e-3);
        assert_relative_eq!(table.column(1).unwrap()[0], 1185.0);
        assert!(table.headers().is_empty());
    }

    #[test]
    fn test_whitespace_table_without_numbers() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.txt", b"just text\n");
        assert!(matches!(read_whitespace_table(&path, 2), Err(TableError::Read(_))));
    }

    #[test]
    fn test_numeric_table_length_check() {
        let result = NumericTable::new(vec![], vec![vec![1.0], vec![1.0, 2.0]]);
        assert!(result.is_err());
    }
}
