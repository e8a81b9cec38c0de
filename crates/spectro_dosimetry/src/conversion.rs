//! Monoenergetic conversion coefficient tables.
//!
//! A table lists energies in its first column and one coefficient column
//! per angle of incidence. The number of columns fixes the angles:
//!
//! | value columns | angles (degrees)             |
//! |---------------|------------------------------|
//! | 1             | 0                            |
//! | 6             | 0, 15, 30, 45, 60, 75        |
//! | 7             | 0, 15, 30, 45, 60, 75, 90    |
//! | 8             | 0, 15, 30, 45, 60, 75, 90, 180 |

use crate::attenuation::LogLogCurve;
use crate::error::{DosimetryError, DosimetryResult};
use crate::kerma::KermaWeights;
use adapter_tables::read_coefficient_table;
use std::path::Path;
use tracing::debug;

const ANGLES: [u32; 8] = [0, 15, 30, 45, 60, 75, 90, 180];

/// Angles of incidence for a table with `columns` value columns.
pub fn angles_for(columns: usize) -> Option<&'static [u32]> {
    match columns {
        1 => Some(&ANGLES[..1]),
        6..=8 => Some(&ANGLES[..columns]),
        _ => None,
    }
}

/// One angle of a conversion coefficient table.
#[derive(Debug, Clone)]
pub struct ConversionColumn {
    angle: u32,
    curve: LogLogCurve,
}

impl ConversionColumn {
    /// Angle of incidence in degrees.
    pub fn angle(&self) -> u32 {
        self.angle
    }

    /// Coefficient at `energy`; zero outside the positive support.
    pub fn coefficient(&self, energy: f64) -> f64 {
        self.curve.value(energy).unwrap_or(0.0)
    }
}

/// Conversion coefficients `h_K(E, angle)` per unit air kerma.
///
/// # Examples
///
/// ```
/// use spectro_dosimetry::ConversionTable;
///
/// let energy = vec![10.0, 20.0, 40.0, 80.0];
/// let h = vec![0.01, 0.6, 1.5, 1.7];
/// let table = ConversionTable::new("h_amb_10", energy, vec![h]).unwrap();
/// assert_eq!(table.report_stem(0), "H_AMB_10");
/// assert!((table.column(0).unwrap().coefficient(40.0) - 1.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct ConversionTable {
    name: String,
    columns: Vec<ConversionColumn>,
}

impl ConversionTable {
    /// Build from energies and value columns.
    ///
    /// # Errors
    ///
    /// * `DosimetryError::UnsupportedLayout` - Column count without an angle layout
    /// * `DosimetryError::InsufficientSupport` - Column with fewer than 3 positive values
    pub fn new(name: &str, energy: Vec<f64>, values: Vec<Vec<f64>>) -> DosimetryResult<Self> {
        let angles = angles_for(values.len()).ok_or(DosimetryError::UnsupportedLayout {
            columns: values.len(),
        })?;
        let columns = angles
            .iter()
            .zip(&values)
            .map(|(&angle, column)| {
                let label = format!("{} {}", name, angle);
                Ok(ConversionColumn {
                    angle,
                    curve: LogLogCurve::new(&label, &energy, column)?,
                })
            })
            .collect::<DosimetryResult<Vec<_>>>()?;

        debug!(table = name, angles = columns.len(), "Conversion table built");
        Ok(Self {
            name: name.to_string(),
            columns,
        })
    }

    /// Read a `;` separated table; the name is the file stem.
    ///
    /// # Errors
    ///
    /// File errors from [`read_coefficient_table`], then as [`new`](Self::new).
    pub fn load(path: impl AsRef<Path>) -> DosimetryResult<Self> {
        let path = path.as_ref();
        let table = read_coefficient_table(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut columns = table.columns().to_vec();
        let energy = columns.remove(0);
        Self::new(&name, energy, columns)
    }

    /// Table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Angle columns in table order.
    pub fn columns(&self) -> &[ConversionColumn] {
        &self.columns
    }

    /// Column `index`, if present.
    pub fn column(&self, index: usize) -> Option<&ConversionColumn> {
        self.columns.get(index)
    }

    /// Report file stem: `NAME` for single-angle tables, `NAME_<angle>`
    /// otherwise.
    pub fn report_stem(&self, index: usize) -> String {
        let upper = self.name.to_uppercase();
        match (self.columns.len(), self.columns.get(index)) {
            (1, _) | (_, None) => upper,
            (_, Some(column)) => format!("{}_{}", upper, column.angle),
        }
    }

    /// Coefficients of column `index` at `energies`.
    ///
    /// # Errors
    ///
    /// `DosimetryError::InvalidConfig` if the column does not exist.
    pub fn coefficients(&self, index: usize, energies: &[f64]) -> DosimetryResult<Vec<f64>> {
        let column = self.column(index).ok_or_else(|| {
            DosimetryError::InvalidConfig(format!(
                "table {} has no column {}",
                self.name, index
            ))
        })?;
        Ok(energies.iter().map(|&e| column.coefficient(e)).collect())
    }
}

/// Weighted mean `Σ w h / Σ w`.
pub fn weighted_mean(weights: &[f64], values: &[f64]) -> f64 {
    let (numerator, denominator) = weights
        .iter()
        .zip(values)
        .fold((0.0, 0.0), |(n, d), (w, h)| (n + w * h, d + w));
    numerator / denominator
}

/// Air-kerma weighted conversion coefficient of a spectrum for one angle.
///
/// # Errors
///
/// `DosimetryError::InvalidConfig` if the column does not exist.
pub fn mean_conversion_coefficient(
    weights: &KermaWeights,
    table: &ConversionTable,
    column: usize,
) -> DosimetryResult<f64> {
    let coefficients = table.coefficients(column, weights.energy())?;
    Ok(weighted_mean(&weights.weights(), &coefficients))
}
