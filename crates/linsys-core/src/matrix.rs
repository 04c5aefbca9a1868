use crate::dtype::Float;
use crate::error::{SolveResult, SolverError};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Dense matrix with row-major (C-order) storage in a flat `Vec<T>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Float")]
pub struct Matrix<T: Float> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Dense vector of `n` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Float", transparent)]
pub struct Vector<T: Float> {
    data: Vec<T>,
}

// ─── Matrix ─────────────────────────────────────────────────────────────────

impl<T: Float> Matrix<T> {
    /// Create a matrix from flat row-major data.
    pub fn new(data: Vec<T>, rows: usize, cols: usize) -> SolveResult<Self> {
        if data.len() != rows * cols {
            return Err(SolverError::DimensionMismatch(format!(
                "{} values cannot fill a {}x{} matrix",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Matrix { data, rows, cols })
    }

    /// Create a matrix from a slice of rows. All rows must have equal length.
    pub fn from_rows(rows: &[Vec<T>]) -> SolveResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(SolverError::DimensionMismatch(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    n_cols
                )));
            }
        }
        let flat: Vec<T> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Matrix::new(flat, n_rows, n_cols)
    }

    /// Matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            data: vec![T::ZERO; rows * cols],
            rows,
            cols,
        }
    }

    /// Identity matrix of size n×n.
    pub fn eye(n: usize) -> Self {
        let mut m = Matrix::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::ONE;
        }
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Iterate over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics; an empty matrix simply yields no rows
        self.data.chunks(self.cols.max(1)).take(self.rows)
    }

    /// Append `b` as an extra column, producing `[A | b]`.
    pub fn augment(&self, b: &Vector<T>) -> SolveResult<Matrix<T>> {
        if b.len() != self.rows {
            return Err(SolverError::DimensionMismatch(format!(
                "cannot augment a {}x{} matrix with a vector of length {}",
                self.rows,
                self.cols,
                b.len()
            )));
        }
        let cols = self.cols + 1;
        let mut data = Vec::with_capacity(self.rows * cols);
        for (row, &bi) in self.iter_rows().zip(b.iter()) {
            data.extend_from_slice(row);
            data.push(bi);
        }
        Ok(Matrix { data, rows: self.rows, cols })
    }
}

impl<T: Float> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.cols + col]
    }
}

impl<T: Float> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for row in self.iter_rows() {
            write!(f, "  [")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:.4}", v)?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "]")
    }
}

// ─── Vector ─────────────────────────────────────────────────────────────────

impl<T: Float> Vector<T> {
    pub fn new(data: Vec<T>) -> Self {
        Vector { data }
    }

    pub fn zeros(n: usize) -> Self {
        Vector { data: vec![T::ZERO; n] }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}

impl<T: Float> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Vector { data }
    }
}

impl<T: Float> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T: Float> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.4}", v)?;
        }
        write!(f, "]")
    }
}
