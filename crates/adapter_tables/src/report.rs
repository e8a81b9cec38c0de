//! Append-only statistics reports.

use crate::error::{TableError, TableResult};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

const REPORT_HEADER: [&str; 4] = ["name", "mean", "std_dev", "cv_percent"];

/// One line of a report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Row label, usually the spectrum file name
    pub name: String,
    /// Sample mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Coefficient of variation in percent
    pub cv_percent: f64,
}

/// Appends [`ReportRow`]s to a CSV file.
///
/// The header is written only while the file is empty, so several runs can
/// share one report.
///
/// # Examples
///
/// ```no_run
/// use adapter_tables::{ReportRow, ReportWriter};
///
/// let writer = ReportWriter::new("H_AMB_10.txt");
/// writer.reset()?;
/// writer.append(&ReportRow { name: "N30.csv".into(), mean: 1.2, std_dev: 0.01, cv_percent: 0.8 })?;
/// # Ok::<(), adapter_tables::TableError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    /// Report at `path`; nothing is touched until the first write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Report location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove an existing report.
    ///
    /// # Errors
    ///
    /// `TableError::Write` if the file exists and cannot be removed.
    pub fn reset(&self) -> TableResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(TableError::write)?;
            debug!(path = %self.path.display(), "Previous report removed");
        }
        Ok(())
    }

    /// Append one row, writing the header first if the file is empty.
    ///
    /// # Errors
    ///
    /// `TableError::Write` on I/O failure.
    pub fn append(&self, row: &ReportRow) -> TableResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(TableError::write)?;
        let empty = file.metadata().map_err(TableError::write)?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if empty {
            writer.write_record(REPORT_HEADER).map_err(TableError::write)?;
        }
        writer
            .write_record([
                row.name.clone(),
                row.mean.to_string(),
                row.std_dev.to_string(),
                row.cv_percent.to_string(),
            ])
            .map_err(TableError::write)?;
        writer.flush().map_err(TableError::write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn row(name: &str) -> ReportRow {
        ReportRow {
            name: name.to_string(),
            mean: 1.5,
            std_dev: 0.25,
            cv_percent: 0.5,
        }
    }

    #[test]
    fn test_header_written_once() {
        let dir = TempDir::new().unwrap();
        let writer = ReportWriter::new(dir.path().join("R.txt"));
        writer.append(&row("a.csv")).unwrap();
        writer.append(&row("b.csv")).unwrap();
        let text = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(
            text,
            "name,mean,std_dev,cv_percent\na.csv,1.5,0.25,0.5\nb.csv,1.5,0.25,0.5\n"
        );
    }

    #[test]
    fn test_reset_starts_fresh() {
        let dir = TempDir::new().unwrap();
        let writer = ReportWriter::new(dir.path().join("R.txt"));
        writer.reset().unwrap();
        writer.append(&row("a.csv")).unwrap();
        writer.reset().unwrap();
        assert!(!writer.path().exists());
        writer.append(&row("c.csv")).unwrap();
        let text = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
