//! # Matrix Module
//!
//! Provides [`Matrix`], a rectangular sequence of rows whose shape is checked
//! once at construction, and transposition over it.
//!
//! ## Shape Guarantee
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Vec<Vec<T>> ──► Matrix::try_from ──┬── empty?   → NotAMatrix           │
//! │                                     ├── ragged?  → NotAMatrix           │
//! │                                     └── OK → M x N, M >= 1, N >= 1      │
//! │                                                                         │
//! │  [[T; N]; M]   ──► Matrix::from     (M, N >= 1 checked at compile time) │
//! │                                                                         │
//! │  Matrix (M x N) ──► transpose() ──► Matrix (N x M)   (cannot fail)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ProblemError, ProblemResult};

// =============================================================================
// Matrix Type
// =============================================================================

/// A non-empty rectangular matrix stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: Vec<Vec<T>>,
}

impl<T> Matrix<T> {
    /// Number of rows (M).
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (N).
    #[inline]
    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    /// `(rows, columns)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }
}

impl<T: Clone> Matrix<T> {
    /// Returns the N x M matrix whose rows are this matrix's columns.
    ///
    /// ## Example
    /// ```rust
    /// use warmup_core::matrix::Matrix;
    ///
    /// let m = Matrix::try_from(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// let t = m.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t.rows(), &[vec![1, 4], vec![2, 5], vec![3, 6]]);
    /// ```
    pub fn transpose(&self) -> Matrix<T> {
        let rows = (0..self.column_count())
            .map(|column| self.rows.iter().map(|row| row[column].clone()).collect())
            .collect();
        Matrix { rows }
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = ProblemError;

    fn try_from(rows: Vec<Vec<T>>) -> ProblemResult<Self> {
        let Some(first) = rows.first() else {
            return Err(ProblemError::NotAMatrix {
                reason: "has no rows".to_string(),
            });
        };

        let width = first.len();
        if width == 0 {
            return Err(ProblemError::NotAMatrix {
                reason: "has no columns".to_string(),
            });
        }

        if let Some(index) = rows.iter().position(|row| row.len() != width) {
            return Err(ProblemError::NotAMatrix {
                reason: format!(
                    "row {index} has {} elements, expected {width}",
                    rows[index].len()
                ),
            });
        }

        Ok(Matrix { rows })
    }
}

/// Fixed-size arrays are rectangular by construction.
///
/// ## Example
/// ```rust
/// use warmup_core::matrix::Matrix;
///
/// let m = Matrix::from([[1, 2], [3, 4], [5, 6]]);
/// assert_eq!(m.shape(), (3, 2));
/// ```
impl<T, const M: usize, const N: usize> From<[[T; N]; M]> for Matrix<T> {
    fn from(rows: [[T; N]; M]) -> Self {
        const { assert!(M > 0 && N > 0, "a matrix needs at least one row and one column") };
        Matrix {
            rows: rows.into_iter().map(Vec::from).collect(),
        }
    }
}

// =============================================================================
// Free Function
// =============================================================================

/// Transposes a sequence of rows.
///
/// Validates the shape first; an empty or ragged input fails with a
/// type-kind error and produces no partial output.
///
/// ## Example
/// ```rust
/// use warmup_core::matrix::transpose;
///
/// assert_eq!(
///     transpose(&[vec![1, 2], vec![3, 4]]).unwrap(),
///     vec![vec![1, 3], vec![2, 4]]
/// );
/// assert!(transpose(&[vec![1, 2], vec![3]]).is_err());
/// ```
pub fn transpose<T: Clone>(rows: &[Vec<T>]) -> ProblemResult<Vec<Vec<T>>> {
    let matrix = Matrix::try_from(rows.to_vec())?;
    Ok(matrix.transpose().into_rows())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_transpose_square() {
        assert_eq!(
            transpose(&[vec![1, 2], vec![3, 4]]).unwrap(),
            vec![vec![1, 3], vec![2, 4]]
        );
    }

    #[test]
    fn test_transpose_single_row_and_column() {
        assert_eq!(
            transpose(&[vec!['a', 'b', 'c']]).unwrap(),
            vec![vec!['a'], vec!['b'], vec!['c']]
        );
        assert_eq!(
            transpose(&[vec!["x"], vec!["y"]]).unwrap(),
            vec![vec!["x", "y"]]
        );
    }

    #[test]
    fn test_double_transpose_restores_original() {
        let original = Matrix::try_from(vec![
            vec![1, 2, 3, 4],
            vec![5, 6, 7, 8],
            vec![9, 10, 11, 12],
        ])
        .unwrap();

        let back = original.transpose().transpose();
        assert_eq!(back.shape(), (3, 4));
        assert_eq!(back, original);
    }

    #[test]
    fn test_element_mapping() {
        let m = Matrix::try_from(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let t = m.transpose();
        for i in 0..t.row_count() {
            for j in 0..t.column_count() {
                assert_eq!(t.get(i, j), m.get(j, i));
            }
        }
    }

    #[test]
    fn test_from_array() {
        let m = Matrix::from([['a', 'b', 'c'], ['d', 'e', 'f']]);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.get(1, 2), Some(&'f'));
        assert_eq!(
            m,
            Matrix::try_from(vec![vec!['a', 'b', 'c'], vec!['d', 'e', 'f']]).unwrap()
        );
        assert_eq!(m.transpose().rows(), &[vec!['a', 'd'], vec!['b', 'e'], vec!['c', 'f']]);
    }

    #[test]
    fn test_rejects_degenerate_input() {
        let empty: Vec<Vec<i32>> = vec![];
        assert_eq!(transpose(&empty).unwrap_err().kind(), ErrorKind::Type);

        let no_columns: Vec<Vec<i32>> = vec![vec![], vec![]];
        assert_eq!(transpose(&no_columns).unwrap_err().kind(), ErrorKind::Type);

        let ragged = vec![vec![1, 2, 3], vec![4, 5]];
        let err = transpose(&ragged).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(
            err.to_string(),
            "not a matrix: row 1 has 2 elements, expected 3"
        );
    }
}
