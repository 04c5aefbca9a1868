use linsys_core::{Float, Matrix, SolveResult, SolverError};

/// LU decomposition result: P * A = L * U
pub struct LuDecomposition<T: Float> {
    pub l: Matrix<T>,
    pub u: Matrix<T>,
    /// `pivot[i]` is the row of `A` that ended up in row `i`.
    pub pivot: Vec<usize>,
}

fn require_square<T: Float>(a: &Matrix<T>, op: &str) -> SolveResult<usize> {
    if !a.is_square() {
        return Err(SolverError::DimensionMismatch(format!(
            "{} requires a square matrix, got {}x{}",
            op,
            a.rows(),
            a.cols()
        )));
    }
    Ok(a.rows())
}

/// Row at or below `k` holding the largest magnitude in column `k`, or `None`
/// when that part of the column is exactly zero.
fn pivot_row<T: Float>(m: &[T], n: usize, k: usize) -> Option<usize> {
    let (row, best) = ((k + 1)..n)
        .map(|i| (i, m[i * n + k].abs()))
        .fold((k, m[k * n + k].abs()), |best, cur| if cur.1 > best.1 { cur } else { best });
    if best == T::ZERO {
        None
    } else {
        Some(row)
    }
}

/// Swap the first `width` entries of rows `r1` and `r2`.
fn swap_rows<T: Float>(m: &mut [T], n: usize, r1: usize, r2: usize, width: usize) {
    for j in 0..width {
        m.swap(r1 * n + j, r2 * n + j);
    }
}

/// LU decomposition with partial pivoting.
///
/// Fails with [`SolverError::SingularMatrix`] only when every pivot candidate
/// in a column is exactly zero. Tiny but nonzero pivots are accepted; a
/// scale-aware singularity check is up to the caller.
pub fn lu<T: Float>(a: &Matrix<T>) -> SolveResult<LuDecomposition<T>> {
    let n = require_square(a, "LU")?;

    let mut u = a.data().to_vec();
    let mut l = vec![T::ZERO; n * n];
    let mut pivot: Vec<usize> = (0..n).collect();

    for k in 0..n {
        let p = pivot_row(&u, n, k).ok_or(SolverError::SingularMatrix)?;
        if p != k {
            pivot.swap(k, p);
            swap_rows(&mut u, n, k, p, n);
            // only the multipliers computed so far move with the row
            swap_rows(&mut l, n, k, p, k);
        }
        l[k * n + k] = T::ONE;

        let head = u[k * n + k];
        for i in (k + 1)..n {
            let factor = u[i * n + k] / head;
            l[i * n + k] = factor;
            for j in k..n {
                u[i * n + j] = u[i * n + j] - factor * u[k * n + j];
            }
        }
    }

    Ok(LuDecomposition {
        l: Matrix::new(l, n, n)?,
        u: Matrix::new(u, n, n)?,
        pivot,
    })
}

/// Determinant of a square matrix via Gaussian elimination with partial pivoting.
///
/// A singular matrix is not an error here: when a column has no nonzero
/// pivot candidate the determinant is exactly zero.
pub fn determinant<T: Float>(a: &Matrix<T>) -> SolveResult<T> {
    let n = require_square(a, "determinant")?;
    let mut m = a.data().to_vec();
    let mut det = T::ONE;

    for k in 0..n {
        let Some(p) = pivot_row(&m, n, k) else {
            return Ok(T::ZERO);
        };
        if p != k {
            swap_rows(&mut m, n, k, p, n);
            det = -det;
        }

        let head = m[k * n + k];
        det *= head;
        for i in (k + 1)..n {
            let factor = m[i * n + k] / head;
            for j in k..n {
                m[i * n + j] = m[i * n + j] - factor * m[k * n + j];
            }
        }
    }

    Ok(det)
}

/// Matrix inverse using LU decomposition.
pub fn invert<T: Float>(a: &Matrix<T>) -> SolveResult<Matrix<T>> {
    let n = require_square(a, "invert")?;
    let decomp = lu(a)?;
    let l = decomp.l.data();
    let u = decomp.u.data();
    let mut result_data = vec![T::ZERO; n * n];

    for col in 0..n {
        // Column `col` of P * I
        let pb: Vec<T> = decomp
            .pivot
            .iter()
            .map(|&p| if p == col { T::ONE } else { T::ZERO })
            .collect();

        // Forward substitution: L * y = pb
        let mut y = vec![T::ZERO; n];
        for i in 0..n {
            let mut sum = T::ZERO;
            for j in 0..i {
                sum += l[i * n + j] * y[j];
            }
            y[i] = pb[i] - sum;
        }

        // Back substitution: U * x = y
        let mut x = vec![T::ZERO; n];
        for i in (0..n).rev() {
            let mut sum = T::ZERO;
            for j in (i + 1)..n {
                sum += u[i * n + j] * x[j];
            }
            let diag = u[i * n + i];
            if diag == T::ZERO {
                return Err(SolverError::SingularMatrix);
            }
            x[i] = (y[i] - sum) / diag;
        }

        for i in 0..n {
            result_data[i * n + col] = x[i];
        }
    }

    Matrix::new(result_data, n, n)
}
