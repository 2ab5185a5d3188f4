//! Dense real-valued matrices.
//!
//! The engine only ever works with small matrices: 2x2 for positions,
//! 4x4 for colors, and the 2x1 / 4x1 column vectors they are applied to.
//! Storage is a flat row-major `Vec<f64>`.
//!
//! Shape mismatches (multiplying incompatible operands, ragged rows) are
//! programming errors and panic.

use std::fmt;
use std::ops::{Index, Mul};

use serde::{Deserialize, Serialize};

/// A `rows x cols` matrix of `f64` values stored in row-major order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a `rows x cols` matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Create the `n x n` identity matrix.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let m = Matrix::identity(2);
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Build a matrix from a list of rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not all have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(
                row.len(),
                cols,
                "row {} has {} columns, expected {}",
                i,
                row.len(),
                cols
            );
            data.extend_from_slice(row);
        }
        Self {
            rows: rows.len(),
            cols,
            data,
        }
    }

    /// Build an `n x 1` column vector.
    pub fn column(values: &[f64]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Side length of a square matrix, `None` otherwise.
    #[inline]
    pub fn dimension(&self) -> Option<usize> {
        self.is_square().then_some(self.rows)
    }

    /// Element at row `i`, column `j`, or `None` if out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// Matrix product `self · rhs`.
    ///
    /// `result[i][j] = Σ_k self[i][k] * rhs[k][j]`
    ///
    /// # Panics
    ///
    /// Panics if `self.cols() != rhs.rows()`.
    pub fn multiply(&self, rhs: &Matrix) -> Matrix {
        assert_eq!(
            self.cols, rhs.rows,
            "cannot multiply {}x{} by {}x{}",
            self.rows, self.cols, rhs.rows, rhs.cols
        );

        let mut out = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * rhs.data[k * rhs.cols + j];
                }
                out.data[i * rhs.cols + j] = sum;
            }
        }
        out
    }

    /// Apply this matrix to a column vector given as a slice, returning the
    /// resulting column as a fixed-size array.
    ///
    /// Equivalent to `self.multiply(&Matrix::column(v))` without allocating
    /// the intermediate matrices.
    ///
    /// # Panics
    ///
    /// Panics if `self.cols() != v.len()` or `self.rows() != N`.
    pub(crate) fn apply_to<const N: usize>(&self, v: &[f64]) -> [f64; N] {
        assert_eq!(self.cols, v.len(), "vector length does not match columns");
        assert_eq!(self.rows, N, "output length does not match rows");

        let mut out = [0.0; N];
        for (i, slot) in out.iter_mut().enumerate() {
            let row = &self.data[i * self.cols..(i + 1) * self.cols];
            *slot = row.iter().zip(v).map(|(a, b)| a * b).sum();
        }
        out
    }

    /// Copy the matrix out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data.chunks(self.cols).map(|r| r.to_vec()).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.rows && j < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            i,
            j,
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        self.multiply(rhs)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", v)?;
            }
        }
        write!(f, "]")
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = String;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(i) = rows.iter().position(|r| r.len() != cols) {
            return Err(format!(
                "row {} has {} columns, expected {}",
                i,
                rows[i].len(),
                cols
            ));
        }
        Ok(Self::from_rows(&rows))
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.to_rows()
    }
}
