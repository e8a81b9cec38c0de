//! Validated `(x, y)` samples and the front end for interpolating them.

use crate::interpolation::{
    interpolate_on_scale, InterpolationTable, Method, MethodOptions, Scale,
};
use crate::types::DataError;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Tabulated data held by a [`DatasetBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub enum DataInput {
    /// A list of `(x, y)` points.
    Pairs(Vec<(f64, f64)>),
    /// Two columns, x first.
    Columns([Vec<f64>; 2]),
    /// Columns keyed by name; `x` and `y` are read.
    Named(HashMap<String, Vec<f64>>),
}

/// Paired samples in their original order.
///
/// Samples are only required to pair up; sorting and finiteness checks
/// happen when an interpolant is built, so a dataset can carry missing
/// values until [`dropna`](Dataset::dropna) is applied.
///
/// # Examples
///
/// ```
/// use spectro_core::dataset::Dataset;
/// use spectro_core::interpolation::Method;
///
/// let data = Dataset::new(vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(data.to_string(), "Dataset with:\nx: [1 2 3]\ny: [4 5 6]");
///
/// let y = data.interpolate(&[1.5, 2.5], Method::PiecewiseLinear).unwrap();
/// assert_eq!(y, vec![4.5, 5.5]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Dataset {
    /// Pair `x` with `y`.
    ///
    /// # Errors
    ///
    /// `DataError::LengthMismatch` if the columns differ in length.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, DataError> {
        if x.len() != y.len() {
            return Err(DataError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// Build from a list of points.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        let (x, y) = pairs.iter().copied().unzip();
        Self { x, y }
    }

    /// Build from columns keyed `"x"` and `"y"`.
    ///
    /// # Errors
    ///
    /// `DataError::MissingColumn` or `DataError::LengthMismatch`.
    pub fn from_named_columns(columns: &HashMap<String, Vec<f64>>) -> Result<Self, DataError> {
        let x = columns
            .get("x")
            .ok_or_else(|| DataError::MissingColumn("x".to_string()))?;
        let y = columns
            .get("y")
            .ok_or_else(|| DataError::MissingColumn("y".to_string()))?;
        Self::new(x.clone(), y.clone())
    }

    /// Parse text cells into numbers.
    ///
    /// # Errors
    ///
    /// `DataError::NonNumeric` for the first cell that is not a number.
    ///
    /// # Examples
    ///
    /// ```
    /// use spectro_core::dataset::Dataset;
    ///
    /// assert!(Dataset::from_text(&["1", "2"], &["3", "4.5"]).is_ok());
    /// assert!(Dataset::from_text(&["1", "invalid"], &["3", "4"]).is_err());
    /// ```
    pub fn from_text(x: &[&str], y: &[&str]) -> Result<Self, DataError> {
        Self::new(parse_cells(x)?, parse_cells(y)?)
    }

    /// Start a builder.
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::default()
    }

    /// Abscissae in original order.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Ordinates in original order.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether there are no samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Copy of the dataset without rows holding a NaN or infinite value.
    pub fn dropna(&self) -> Self {
        let (x, y): (Vec<f64>, Vec<f64>) = self
            .x
            .iter()
            .zip(self.y.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(x, y)| (*x, *y))
            .unzip();
        let removed = self.len() - x.len();
        if removed > 0 {
            debug!(removed, "dropped rows with missing values");
        }
        Self { x, y }
    }

    /// Interpolate with default options on a linear scale.
    ///
    /// # Errors
    ///
    /// `DataError::Interpolation` when the kernel cannot be built.
    pub fn interpolate(&self, x_new: &[f64], method: Method) -> Result<Vec<f64>, DataError> {
        self.interpolate_with(x_new, method, &MethodOptions::default(), Scale::Linear)
    }

    /// Interpolate a single point.
    ///
    /// # Errors
    ///
    /// Same as [`interpolate`](Self::interpolate).
    pub fn interpolate_one(&self, x: f64, method: Method) -> Result<f64, DataError> {
        let values = self.interpolate(&[x], method)?;
        Ok(values[0])
    }

    /// Interpolate with explicit options and scale.
    ///
    /// # Errors
    ///
    /// `DataError::Interpolation` for kernel, extrapolation or log-domain
    /// failures.
    pub fn interpolate_with(
        &self,
        x_new: &[f64],
        method: Method,
        options: &MethodOptions,
        scale: Scale,
    ) -> Result<Vec<f64>, DataError> {
        Ok(interpolate_on_scale(
            method, options, scale, &self.x, &self.y, x_new,
        )?)
    }

    /// Interpolate with several methods and collect the results.
    ///
    /// # Errors
    ///
    /// The first failure among `methods`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spectro_core::dataset::Dataset;
    /// use spectro_core::interpolation::{Method, Scale};
    ///
    /// let data = Dataset::new(vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 4.0, 9.0, 16.0]).unwrap();
    /// let table = data
    ///     .interpolate_many(&[2.5], &[Method::PiecewiseLinear, Method::CubicSpline], Scale::Linear)
    ///     .unwrap();
    /// assert_eq!(table.column(Method::PiecewiseLinear), Some(&[6.5][..]));
    /// ```
    pub fn interpolate_many(
        &self,
        x_new: &[f64],
        methods: &[Method],
        scale: Scale,
    ) -> Result<InterpolationTable, DataError> {
        let options = MethodOptions::default();
        let mut table = InterpolationTable::new(x_new.to_vec());
        for &method in methods {
            let values = self.interpolate_with(x_new, method, &options, scale)?;
            table.push(method, values);
        }
        Ok(table)
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dataset with:\nx: {}\ny: {}",
            format_array(&self.x),
            format_array(&self.y)
        )
    }
}

fn format_array(values: &[f64]) -> String {
    let cells: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", cells.join(" "))
}

fn parse_cells(cells: &[&str]) -> Result<Vec<f64>, DataError> {
    cells
        .iter()
        .map(|cell| {
            cell.trim().parse::<f64>().map_err(|_| DataError::NonNumeric {
                value: cell.to_string(),
            })
        })
        .collect()
}

/// Builder accepting either `x` and `y` or `data`.
///
/// # Examples
///
/// ```
/// use spectro_core::dataset::{DataInput, Dataset};
///
/// let a = Dataset::builder().x(vec![1.0, 2.0]).y(vec![3.0, 4.0]).build().unwrap();
/// let b = Dataset::builder()
///     .data(DataInput::Pairs(vec![(1.0, 3.0), (2.0, 4.0)]))
///     .build()
///     .unwrap();
/// assert_eq!(a, b);
///
/// // Mixing both forms is rejected
/// assert!(Dataset::builder()
///     .x(vec![1.0])
///     .y(vec![2.0])
///     .data(DataInput::Pairs(vec![(1.0, 2.0)]))
///     .build()
///     .is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DatasetBuilder {
    x: Option<Vec<f64>>,
    y: Option<Vec<f64>>,
    data: Option<DataInput>,
}

impl DatasetBuilder {
    /// Set the abscissae.
    pub fn x(mut self, x: Vec<f64>) -> Self {
        self.x = Some(x);
        self
    }

    /// Set the ordinates.
    pub fn y(mut self, y: Vec<f64>) -> Self {
        self.y = Some(y);
        self
    }

    /// Set tabulated data.
    pub fn data(mut self, data: DataInput) -> Self {
        self.data = Some(data);
        self
    }

    /// Validate the argument combination and build the dataset.
    ///
    /// # Errors
    ///
    /// * `DataError::ArgumentCombination` unless exactly one of `x` and `y`
    ///   together, or `data`, was given
    /// * `DataError::LengthMismatch` / `DataError::MissingColumn`
    pub fn build(self) -> Result<Dataset, DataError> {
        match (self.x, self.y, self.data) {
            (Some(x), Some(y), None) => Dataset::new(x, y),
            (None, None, Some(data)) => match data {
                DataInput::Pairs(pairs) => Ok(Dataset::from_pairs(&pairs)),
                DataInput::Columns([x, y]) => Dataset::new(x, y),
                DataInput::Named(map) => Dataset::from_named_columns(&map),
            },
            _ => Err(DataError::ArgumentCombination),
        }
    }
}
