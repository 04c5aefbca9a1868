use linsys_core::{Float, Matrix, SolveResult, Vector};
use linsys_linalg::{invert, matvec};

use crate::LinearSolver;

/// Cramer's rule, evaluated as `x = A⁻¹·b`.
///
/// Callers are expected to reject a zero determinant first; a vanishing LU
/// pivot during inversion still surfaces as `SingularMatrix`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cramer;

impl<T: Float> LinearSolver<T> for Cramer {
    fn solve(&self, a: &Matrix<T>, b: &Vector<T>) -> SolveResult<Vector<T>> {
        let a_inv = invert(a)?;
        matvec(&a_inv, b)
    }
}
