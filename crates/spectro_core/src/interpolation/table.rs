//! Results of interpolating with several methods at once.

use super::Method;
use std::fmt;

/// Query points with one result column per method.
///
/// Columns keep the order in which they were added.
///
/// # Examples
///
/// ```
/// use spectro_core::interpolation::{InterpolationTable, Method};
///
/// let mut table = InterpolationTable::new(vec![1.5, 2.5]);
/// table.push(Method::PiecewiseLinear, vec![15.0, 25.0]);
/// assert_eq!(table.headers(), vec!["x", "PiecewiseLinear"]);
/// assert_eq!(table.column(Method::PiecewiseLinear), Some(&[15.0, 25.0][..]));
/// assert_eq!(table.row(1), Some(vec![2.5, 25.0]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationTable {
    x: Vec<f64>,
    columns: Vec<(Method, Vec<f64>)>,
}

impl InterpolationTable {
    /// Create an empty table over the query points.
    pub fn new(x: Vec<f64>) -> Self {
        Self {
            x,
            columns: Vec::new(),
        }
    }

    /// Append a result column.
    ///
    /// # Panics
    ///
    /// Panics if `values` and the query points differ in length.
    pub fn push(&mut self, method: Method, values: Vec<f64>) {
        assert_eq!(
            values.len(),
            self.x.len(),
            "column length must match the number of query points"
        );
        self.columns.push((method, values));
    }

    /// Query points.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Result columns in insertion order.
    pub fn columns(&self) -> &[(Method, Vec<f64>)] {
        &self.columns
    }

    /// Values of the first column produced by `method`.
    pub fn column(&self, method: Method) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(m, _)| *m == method)
            .map(|(_, v)| v.as_slice())
    }

    /// Column names, starting with `x`.
    pub fn headers(&self) -> Vec<String> {
        std::iter::once("x".to_string())
            .chain(self.columns.iter().map(|(m, _)| m.name().to_string()))
            .collect()
    }

    /// Values of row `i`: the query point followed by every column.
    pub fn row(&self, i: usize) -> Option<Vec<f64>> {
        let x = *self.x.get(i)?;
        Some(
            std::iter::once(x)
                .chain(self.columns.iter().map(|(_, v)| v[i]))
                .collect(),
        )
    }

    /// Iterate over all rows.
    pub fn rows(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        (0..self.x.len()).filter_map(move |i| self.row(i))
    }

    /// Number of query points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the table has no query points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

impl fmt::Display for InterpolationTable {
    /// Tab separated, header first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headers().join("\t"))?;
        for row in self.rows() {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", cells.join("\t"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_column_order() {
        let mut table = InterpolationTable::new(vec![1.0]);
        table.push(Method::Pchip, vec![2.0]);
        table.push(Method::PiecewiseLinear, vec![3.0]);
        assert_eq!(table.headers(), vec!["x", "Pchip", "PiecewiseLinear"]);
        assert_eq!(table.row(0), Some(vec![1.0, 2.0, 3.0]));
        assert_eq!(table.row(1), None);
    }

    #[test]
    fn test_display() {
        let mut table = InterpolationTable::new(vec![1.0, 2.0]);
        table.push(Method::CubicSpline, vec![10.0, 20.5]);
        assert_eq!(table.to_string(), "x\tCubicSpline\n1\t10\n2\t20.5\n");
    }

    #[test]
    #[should_panic(expected = "column length")]
    fn test_push_length_mismatch_panics() {
        let mut table = InterpolationTable::new(vec![1.0, 2.0]);
        table.push(Method::Akima1D, vec![1.0]);
    }

    #[test]
    fn test_empty() {
        let table = InterpolationTable::new(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.rows().count(), 0);
    }
}
