use linsys_core::{Float, Matrix, Method, SolveResult, SolverError, Vector};

use crate::LinearSolver;

/// Gauss–Jordan reduction of the augmented matrix `[A | b]`.
///
/// Pivots are taken from the diagonal in natural row order; no row
/// exchanges are performed. With the guard disabled a zero pivot divides
/// through and the solution comes back with non-finite components.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussJordan {
    pub guard_pivots: bool,
}

impl GaussJordan {
    pub fn new() -> Self {
        GaussJordan { guard_pivots: false }
    }

    /// Fail with `NumericalInstability` instead of dividing by a zero pivot.
    pub fn guarded() -> Self {
        GaussJordan { guard_pivots: true }
    }
}

impl<T: Float> LinearSolver<T> for GaussJordan {
    fn solve(&self, a: &Matrix<T>, b: &Vector<T>) -> SolveResult<Vector<T>> {
        let n = a.rows();
        if !a.is_square() {
            return Err(SolverError::DimensionMismatch(format!(
                "Gauss-Jordan requires a square matrix, got {}x{}",
                n,
                a.cols()
            )));
        }
        let cols = n + 1;
        let mut aug = a.augment(b)?.into_data();

        for i in 0..n {
            let pivot = aug[i * cols + i];
            if self.guard_pivots && (pivot == T::ZERO || !pivot.is_finite()) {
                return Err(SolverError::NumericalInstability {
                    method: Method::Jordan,
                    row: i,
                });
            }
            for k in 0..cols {
                aug[i * cols + k] = aug[i * cols + k] / pivot;
            }

            for j in 0..n {
                if j == i {
                    continue;
                }
                let factor = aug[j * cols + i];
                for k in 0..cols {
                    aug[j * cols + k] = aug[j * cols + k] - factor * aug[i * cols + k];
                }
            }
        }

        Ok((0..n).map(|i| aug[i * cols + n]).collect::<Vec<T>>().into())
    }
}
