//! File kinds and read options.

use crate::error::{TableError, TableResult};
use std::path::Path;

/// File format inferred from the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Comma separated values (`.csv`)
    Csv,
    /// Spreadsheet (`.xlsx`, `.xlsm`, `.xls`, `.xlsb`, `.ods`)
    Excel,
}

impl FileKind {
    /// Infer the kind from the (case-insensitive) extension of `path`.
    ///
    /// # Errors
    ///
    /// `TableError::UnsupportedFileType` for any other extension.
    ///
    /// # Examples
    /// ```
    /// use adapter_tables::FileKind;
    ///
    /// assert_eq!(FileKind::from_path("a/b.CSV").unwrap(), FileKind::Csv);
    /// assert_eq!(FileKind::from_path("data.xlsx").unwrap(), FileKind::Excel);
    /// assert!(FileKind::from_path("notes.txt").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> TableResult<Self> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(FileKind::Csv),
            Some("xlsx" | "xlsm" | "xls" | "xlsb" | "ods") => Ok(FileKind::Excel),
            _ => Err(TableError::UnsupportedFileType),
        }
    }
}

/// Worksheet selector for spreadsheet input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetRef {
    /// Zero-based worksheet position
    Index(usize),
    /// Worksheet name
    Name(String),
}

impl Default for SheetRef {
    fn default() -> Self {
        SheetRef::Index(0)
    }
}

impl From<&str> for SheetRef {
    /// Digits select by position, anything else by name.
    fn from(value: &str) -> Self {
        match value.parse::<usize>() {
            Ok(index) => SheetRef::Index(index),
            Err(_) => SheetRef::Name(value.to_string()),
        }
    }
}

/// Options for [`read_file`](crate::read_file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    /// Worksheet for spreadsheet input, ignored for CSV
    pub sheet: SheetRef,
    /// Zero-based column holding x
    pub x_col: usize,
    /// Zero-based column holding y
    pub y_col: usize,
    /// Whether the first row is a header
    pub header: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            sheet: SheetRef::default(),
            x_col: 0,
            y_col: 1,
            header: true,
        }
    }
}

impl ReadOptions {
    /// Select the worksheet.
    pub fn with_sheet(mut self, sheet: SheetRef) -> Self {
        self.sheet = sheet;
        self
    }

    /// Select the x and y columns.
    pub fn with_columns(mut self, x_col: usize, y_col: usize) -> Self {
        self.x_col = x_col;
        self.y_col = y_col;
        self
    }

    /// Set whether the first row is a header.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Number of columns the file must have.
    pub(crate) fn required_width(&self) -> usize {
        self.x_col.max(self.y_col) + 1
    }
}
