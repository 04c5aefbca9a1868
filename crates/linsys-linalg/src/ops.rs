use linsys_core::{Float, Matrix, SolveResult, SolverError, Vector};

/// Matrix-vector product `A·x`.
pub fn matvec<T: Float>(a: &Matrix<T>, x: &Vector<T>) -> SolveResult<Vector<T>> {
    if a.cols() != x.len() {
        return Err(SolverError::DimensionMismatch(format!(
            "matvec: A is {}x{} but x has {} elements",
            a.rows(),
            a.cols(),
            x.len()
        )));
    }
    let out: Vec<T> = a
        .iter_rows()
        .map(|row| row.iter().zip(x.iter()).map(|(&aij, &xj)| aij * xj).sum())
        .collect();
    Ok(Vector::new(out))
}

/// Residual `A·x − b`. Near-zero components indicate a correct solution.
pub fn residual<T: Float>(a: &Matrix<T>, x: &Vector<T>, b: &Vector<T>) -> SolveResult<Vector<T>> {
    let ax = matvec(a, x)?;
    if ax.len() != b.len() {
        return Err(SolverError::DimensionMismatch(format!(
            "residual: A·x has {} elements but b has {}",
            ax.len(),
            b.len()
        )));
    }
    Ok(ax.iter().zip(b.iter()).map(|(&l, &r)| l - r).collect::<Vec<T>>().into())
}

/// Divide every row by its largest absolute entry.
///
/// The result has row ∞-norms of exactly one (zero rows stay zero), so its
/// determinant can be compared against an absolute tolerance whatever the
/// scale of the input. Non-finite entries propagate.
pub fn equilibrate_rows<T: Float>(a: &Matrix<T>) -> SolveResult<Matrix<T>> {
    let mut data = Vec::with_capacity(a.rows() * a.cols());
    for row in a.iter_rows() {
        let scale = max_abs(row);
        if scale == T::ZERO {
            data.extend_from_slice(row);
        } else {
            data.extend(row.iter().map(|&v| v / scale));
        }
    }
    Matrix::new(data, a.rows(), a.cols())
}

/// Infinity norm: largest absolute component. NaN components propagate.
pub fn max_abs<T: Float>(v: &[T]) -> T {
    let mut m = T::ZERO;
    for &x in v {
        if x.is_nan() {
            return x;
        }
        m = m.max(x.abs());
    }
    m
}
