use linsys_core::{Float, Matrix, Method, SolveResult, SolverError, Vector};

use crate::LinearSolver;

/// Forward substitution: `x[i] = (b[i] − Σ_{j<i} A[i][j]·x[j]) / A[i][i]`.
///
/// Only entries on or below the diagonal are read, so the result solves the
/// system exactly only when `A` is lower-triangular. No triangularity check
/// is made.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardSubstitution {
    pub guard_pivots: bool,
}

impl ForwardSubstitution {
    pub fn new() -> Self {
        ForwardSubstitution { guard_pivots: false }
    }

    /// Fail with `NumericalInstability` on a zero diagonal entry.
    pub fn guarded() -> Self {
        ForwardSubstitution { guard_pivots: true }
    }
}

impl<T: Float> LinearSolver<T> for ForwardSubstitution {
    fn solve(&self, a: &Matrix<T>, b: &Vector<T>) -> SolveResult<Vector<T>> {
        let n = a.rows();
        if !a.is_square() || b.len() != n {
            return Err(SolverError::DimensionMismatch(format!(
                "forward substitution: A is {}x{} but b has {} elements",
                n,
                a.cols(),
                b.len()
            )));
        }

        let mut x = vec![T::ZERO; n];
        for (i, row) in a.iter_rows().enumerate() {
            let mut sum = b[i];
            for j in 0..i {
                sum -= row[j] * x[j];
            }
            let diag = row[i];
            if self.guard_pivots && (diag == T::ZERO || !diag.is_finite()) {
                return Err(SolverError::NumericalInstability {
                    method: Method::Substitution,
                    row: i,
                });
            }
            x[i] = sum / diag;
        }

        Ok(Vector::new(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::lower_triangular_system;
    use approx::assert_abs_diff_eq;
    use linsys_linalg::{max_abs, residual};

    #[test]
    fn test_substitution_2x2() {
        let a = Matrix::from_rows(&[vec![1.0, 0.0], vec![2.0, 3.0]]).unwrap();
        let b = Vector::new(vec![4.0, 11.0]);
        let x = ForwardSubstitution::new().solve(&a, &b).unwrap();
        assert_abs_diff_eq!(x[0], 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_substitution_lower_triangular_residual() {
        for n in 2..=10 {
            let (a, b) = lower_triangular_system(n, 40 + n as u64);
            let x = ForwardSubstitution::new().solve(&a, &b).unwrap();
            let r = residual(&a, &x, &b).unwrap();
            assert!(max_abs(r.data()) < 1e-9, "n={}", n);
        }
    }

    #[test]
    fn test_substitution_ignores_upper_triangle() {
        let lower = Matrix::from_rows(&[vec![2.0, 0.0], vec![1.0, 4.0]]).unwrap();
        let full = Matrix::from_rows(&[vec![2.0, 9.0], vec![1.0, 4.0]]).unwrap();
        let b = Vector::new(vec![2.0, 9.0]);
        let s = ForwardSubstitution::new();
        assert_eq!(s.solve(&lower, &b).unwrap(), s.solve(&full, &b).unwrap());
    }

    #[test]
    fn test_zero_diagonal_unguarded_is_non_finite() {
        let a = Matrix::from_rows(&[vec![1.0, 0.0], vec![2.0, 0.0]]).unwrap();
        let b = Vector::new(vec![1.0, 5.0]);
        let x: Vector<f64> = ForwardSubstitution::new().solve(&a, &b).unwrap();
        assert_eq!(x[0], 1.0);
        assert!(x[1].is_infinite());
    }

    #[test]
    fn test_zero_diagonal_guarded() {
        let a = Matrix::from_rows(&[vec![1.0, 0.0], vec![2.0, 0.0]]).unwrap();
        let b = Vector::new(vec![1.0, 5.0]);
        let err = ForwardSubstitution::guarded().solve(&a, &b).unwrap_err();
        assert_eq!(
            err,
            SolverError::NumericalInstability { method: Method::Substitution, row: 1 }
        );
    }
}
