//! Direct solvers for the small linear systems that arise in spline fitting.
//!
//! - [`solve_tridiagonal`]: Thomas algorithm for cubic spline slopes
//! - [`solve_banded`]: Gaussian elimination with partial pivoting on a
//!   [`BandMatrix`] (B-spline collocation)

use crate::types::SolverError;
use num_traits::Float;

/// Solve a tridiagonal system with the Thomas algorithm.
///
/// All slices have length `n`. `sub[0]` and `sup[n - 1]` are ignored.
///
/// # Errors
///
/// `SolverError::NumericalInstability` on mismatched dimensions or a zero
/// pivot.
///
/// # Example
///
/// ```
/// use spectro_core::math::linear_systems::solve_tridiagonal;
///
/// // [2 1 0; 1 2 1; 0 1 2] x = [3 4 3]  =>  x = [1 1 1]
/// let x: Vec<f64> = solve_tridiagonal(&[0.0, 1.0, 1.0], &[2.0, 2.0, 2.0], &[1.0, 1.0, 0.0], &[3.0, 4.0, 3.0])
///     .unwrap();
/// assert!(x.iter().all(|v| (v - 1.0).abs() < 1e-12));
/// ```
pub fn solve_tridiagonal<T: Float>(
    sub: &[T],
    diag: &[T],
    sup: &[T],
    rhs: &[T],
) -> Result<Vec<T>, SolverError> {
    let n = diag.len();
    if sub.len() != n || sup.len() != n || rhs.len() != n {
        return Err(SolverError::NumericalInstability(format!(
            "tridiagonal system dimension mismatch: {} {} {} {}",
            sub.len(),
            n,
            sup.len(),
            rhs.len()
        )));
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    // Forward elimination
    let mut c_prime: Vec<T> = vec![T::zero(); n];
    let mut d_prime: Vec<T> = vec![T::zero(); n];

    if diag[0] == T::zero() {
        return Err(SolverError::NumericalInstability(
            "zero pivot in tridiagonal system at row 0".to_string(),
        ));
    }
    c_prime[0] = sup[0] / diag[0];
    d_prime[0] = rhs[0] / diag[0];

    for i in 1..n {
        let denom = diag[i] - sub[i] * c_prime[i - 1];
        if denom == T::zero() {
            return Err(SolverError::NumericalInstability(format!(
                "zero pivot in tridiagonal system at row {}",
                i
            )));
        }
        if i < n - 1 {
            c_prime[i] = sup[i] / denom;
        }
        d_prime[i] = (rhs[i] - sub[i] * d_prime[i - 1]) / denom;
    }

    // Back substitution
    let mut x = vec![T::zero(); n];
    x[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }

    Ok(x)
}

/// Square matrix stored by diagonals.
///
/// Row `r` keeps columns `r - lower ..= r + lower + upper`; the extra
/// `lower` diagonals above the band hold fill-in from row exchanges.
///
/// # Example
///
/// ```
/// use spectro_core::math::linear_systems::{solve_banded, BandMatrix};
///
/// // [0 1; 1 0] x = [2 3]
/// let a = BandMatrix::from_entries(2, &[(0, 1, 1.0), (1, 0, 1.0)]).unwrap();
/// let x = solve_banded(a, vec![2.0, 3.0]).unwrap();
/// assert_eq!(x, vec![3.0, 2.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BandMatrix<T: Float> {
    n: usize,
    lower: usize,
    upper: usize,
    width: usize,
    data: Vec<T>,
}

impl<T: Float> BandMatrix<T> {
    /// Zero matrix of order `n` with the given bandwidths.
    pub fn zeros(n: usize, lower: usize, upper: usize) -> Self {
        let width = 2 * lower + upper + 1;
        Self {
            n,
            lower,
            upper,
            width,
            data: vec![T::zero(); n * width],
        }
    }

    /// Build from `(row, col, value)` triplets, measuring the bandwidths.
    ///
    /// Repeated positions are summed.
    ///
    /// # Errors
    ///
    /// `SolverError::NumericalInstability` for an index outside the matrix.
    pub fn from_entries(n: usize, entries: &[(usize, usize, T)]) -> Result<Self, SolverError> {
        let mut lower = 0usize;
        let mut upper = 0usize;
        for &(r, c, _) in entries {
            if r >= n || c >= n {
                return Err(SolverError::NumericalInstability(format!(
                    "entry ({}, {}) outside a matrix of order {}",
                    r, c, n
                )));
            }
            if r > c {
                lower = lower.max(r - c);
            } else {
                upper = upper.max(c - r);
            }
        }

        let mut matrix = Self::zeros(n, lower, upper);
        for &(r, c, v) in entries {
            let idx = matrix.index(r, c).ok_or_else(|| {
                SolverError::NumericalInstability(format!("entry ({}, {}) outside band", r, c))
            })?;
            matrix.data[idx] = matrix.data[idx] + v;
        }
        Ok(matrix)
    }

    /// Order of the matrix.
    pub fn order(&self) -> usize {
        self.n
    }

    /// Lower and upper bandwidths.
    pub fn bandwidths(&self) -> (usize, usize) {
        (self.lower, self.upper)
    }

    #[inline]
    fn index(&self, r: usize, c: usize) -> Option<usize> {
        if c + self.lower < r || c > r + self.lower + self.upper {
            None
        } else {
            Some(r * self.width + c + self.lower - r)
        }
    }

    /// Entry at `(r, c)`, zero outside the stored band.
    pub fn get(&self, r: usize, c: usize) -> T {
        self.index(r, c).map_or(T::zero(), |i| self.data[i])
    }
}

/// Solve `A x = b` by Gaussian elimination with partial pivoting.
///
/// Pivot candidates are restricted to the rows inside the lower band, so
/// the work is proportional to `n * lower * (lower + upper)`.
///
/// # Errors
///
/// `SolverError::NumericalInstability` on mismatched dimensions or a
/// singular matrix.
pub fn solve_banded<T: Float>(mut a: BandMatrix<T>, mut b: Vec<T>) -> Result<Vec<T>, SolverError> {
    let n = a.n;
    if b.len() != n {
        return Err(SolverError::NumericalInstability(format!(
            "right-hand side has {} entries, expected {}",
            b.len(),
            n
        )));
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    // Row exchanges push fill-in up to lower + upper above the diagonal.
    let reach = a.lower + a.upper;

    for col in 0..n {
        let row_end = (col + a.lower + 1).min(n);
        let col_end = (col + reach + 1).min(n);

        let mut pivot = col;
        let mut best = a.get(col, col).abs();
        for r in col + 1..row_end {
            let v = a.get(r, col).abs();
            if v > best {
                best = v;
                pivot = r;
            }
        }
        if best == T::zero() || !best.is_finite() {
            return Err(SolverError::NumericalInstability(format!(
                "singular matrix at column {}",
                col
            )));
        }

        if pivot != col {
            for c in col..col_end {
                let upper_value = a.get(col, c);
                let lower_value = a.get(pivot, c);
                if let Some(i) = a.index(col, c) {
                    a.data[i] = lower_value;
                }
                if let Some(i) = a.index(pivot, c) {
                    a.data[i] = upper_value;
                }
            }
            b.swap(col, pivot);
        }

        let p = a.get(col, col);
        for r in col + 1..row_end {
            let factor = a.get(r, col) / p;
            if factor == T::zero() {
                continue;
            }
            for c in col..col_end {
                let above = a.get(col, c);
                if let Some(i) = a.index(r, c) {
                    a.data[i] = a.data[i] - factor * above;
                }
            }
            b[r] = b[r] - factor * b[col];
        }
    }

    let mut x = vec![T::zero(); n];
    for r in (0..n).rev() {
        let col_end = (r + reach + 1).min(n);
        let mut s = b[r];
        for c in r + 1..col_end {
            s = s - a.get(r, c) * x[c];
        }
        x[r] = s / a.get(r, r);
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tridiagonal_identity() {
        let x = solve_tridiagonal(&[0.0, 0.0], &[1.0, 1.0], &[0.0, 0.0], &[4.0, 5.0]).unwrap();
        assert_eq!(x, vec![4.0, 5.0]);
    }

    #[test]
    fn test_tridiagonal_matches_known_solution() {
        // [4 1 0 0; 1 4 1 0; 0 1 4 1; 0 0 1 4] x = [5 6 6 5] => x = 1
        let x = solve_tridiagonal(
            &[0.0, 1.0, 1.0, 1.0],
            &[4.0, 4.0, 4.0, 4.0],
            &[1.0, 1.0, 1.0, 0.0],
            &[5.0, 6.0, 6.0, 5.0],
        )
        .unwrap();
        for v in x {
            assert_relative_eq!(v, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_tridiagonal_dimension_mismatch() {
        let result = solve_tridiagonal(&[0.0], &[1.0, 1.0], &[0.0, 0.0], &[1.0, 1.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_tridiagonal_zero_pivot() {
        let result = solve_tridiagonal(&[0.0, 1.0], &[0.0, 1.0], &[1.0, 0.0], &[1.0, 1.0]);
        assert!(matches!(result, Err(SolverError::NumericalInstability(_))));
    }

    #[test]
    fn test_banded_needs_pivoting() {
        // [0 1; 1 0] x = [2 3] => x = [3 2]
        let a = BandMatrix::from_entries(2, &[(0, 1, 1.0), (1, 0, 1.0)]).unwrap();
        let x = solve_banded(a, vec![2.0, 3.0]).unwrap();
        assert_relative_eq!(x[0], 3.0);
        assert_relative_eq!(x[1], 2.0);
    }

    #[test]
    fn test_banded_dense_system() {
        // [2 1 1; 1 3 2; 1 0 0] x = [4 5 6] => x = [6 15 -23]
        let entries = [
            (0, 0, 2.0),
            (0, 1, 1.0),
            (0, 2, 1.0),
            (1, 0, 1.0),
            (1, 1, 3.0),
            (1, 2, 2.0),
            (2, 0, 1.0),
        ];
        let a = BandMatrix::from_entries(3, &entries).unwrap();
        assert_eq!(a.bandwidths(), (2, 2));
        let x = solve_banded(a, vec![4.0, 5.0, 6.0]).unwrap();
        assert_relative_eq!(x[0], 6.0, epsilon = 1e-10);
        assert_relative_eq!(x[1], 15.0, epsilon = 1e-10);
        assert_relative_eq!(x[2], -23.0, epsilon = 1e-10);
    }

    #[test]
    fn test_banded_tridiagonal_agrees_with_thomas() {
        let n = 6;
        let mut entries = Vec::new();
        for i in 0..n {
            entries.push((i, i, 4.0 + i as f64));
            if i > 0 {
                entries.push((i, i - 1, 1.0));
            }
            if i + 1 < n {
                entries.push((i, i + 1, -1.0));
            }
        }
        let rhs: Vec<f64> = (0..n).map(|i| i as f64 - 2.0).collect();
        let a = BandMatrix::from_entries(n, &entries).unwrap();
        assert_eq!(a.order(), n);
        let banded = solve_banded(a, rhs.clone()).unwrap();

        let sub: Vec<f64> = (0..n).map(|i| if i > 0 { 1.0 } else { 0.0 }).collect();
        let diag: Vec<f64> = (0..n).map(|i| 4.0 + i as f64).collect();
        let sup: Vec<f64> = (0..n).map(|i| if i + 1 < n { -1.0 } else { 0.0 }).collect();
        let thomas = solve_tridiagonal(&sub, &diag, &sup, &rhs).unwrap();

        for (a, b) in banded.iter().zip(thomas.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_banded_singular() {
        let entries = [(0, 0, 1.0), (0, 1, 2.0), (1, 0, 2.0), (1, 1, 4.0)];
        let a = BandMatrix::from_entries(2, &entries).unwrap();
        assert!(solve_banded(a, vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn test_band_matrix_rejects_out_of_range_entry() {
        assert!(BandMatrix::from_entries(2, &[(2, 0, 1.0)]).is_err());
    }
}
