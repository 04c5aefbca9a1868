use linsys_core::{Float, Matrix, Method, SolveResult, SolverError, Vector};
use linsys_linalg::{determinant, equilibrate_rows};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{Cramer, ForwardSubstitution, GaussJordan, LinearSolver};

/// Smallest supported number of unknowns.
pub const MIN_UNKNOWNS: usize = 2;
/// Largest supported number of unknowns.
pub const MAX_UNKNOWNS: usize = 10;

/// Tunables for [`Solver`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    /// Cramer's rule is refused when the determinant of `A`, with every row
    /// divided by its largest absolute entry, is at or below this value.
    /// `0.0` only refuses an exactly zero determinant.
    pub singular_tolerance: f64,
    /// Report a zero pivot (Jordan) or diagonal entry (Substitution) as
    /// `NumericalInstability` instead of returning non-finite values.
    pub guard_pivots: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            singular_tolerance: 1e-12,
            guard_pivots: false,
        }
    }
}

impl SolverOptions {
    pub fn with_singular_tolerance(mut self, tol: f64) -> Self {
        self.singular_tolerance = tol;
        self
    }

    pub fn with_pivot_guard(mut self, guard: bool) -> Self {
        self.guard_pivots = guard;
        self
    }
}

/// Validates a system and dispatches it to the selected method.
///
/// Stateless apart from its options, so one instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    options: SolverOptions,
}

impl Solver {
    pub fn new() -> Self {
        Solver::default()
    }

    pub fn with_options(mut self, options: SolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Solve `A·x = b` with `method`.
    pub fn solve<T: Float>(
        &self,
        method: Method,
        a: &Matrix<T>,
        b: &Vector<T>,
    ) -> SolveResult<Vector<T>> {
        let n = validate(a, b)?;
        debug!("solving {}x{} system with {} method", n, n, method);

        let x = match method {
            Method::Cramer => {
                if self.is_singular(a)? {
                    debug!("equilibrated determinant is within tolerance, refusing Cramer");
                    return Err(SolverError::SingularMatrix);
                }
                Cramer.solve(a, b)?
            }
            Method::Jordan => GaussJordan {
                guard_pivots: self.options.guard_pivots,
            }
            .solve(a, b)?,
            Method::Substitution => ForwardSubstitution {
                guard_pivots: self.options.guard_pivots,
            }
            .solve(a, b)?,
        };

        if !x.is_finite() {
            warn!("{} method produced non-finite values: {}", method, x);
        }
        Ok(x)
    }

    /// Row equilibration bounds the determinant by `n^(n/2)`, so the test
    /// neither overflows for huge entries nor underflows for tiny ones.
    /// A NaN determinant (non-finite input) is left to the solver.
    fn is_singular<T: Float>(&self, a: &Matrix<T>) -> SolveResult<bool> {
        let det = determinant(&equilibrate_rows(a)?)?;
        Ok(det == T::ZERO || det.abs().to_f64() <= self.options.singular_tolerance)
    }
}

/// Solve `A·x = b` with default options.
pub fn solve<T: Float>(method: Method, a: &Matrix<T>, b: &Vector<T>) -> SolveResult<Vector<T>> {
    Solver::new().solve(method, a, b)
}

/// Check that `a` is n×n, `b` has n entries and n is within the supported range.
pub fn validate<T: Float>(a: &Matrix<T>, b: &Vector<T>) -> SolveResult<usize> {
    let n = a.rows();
    if a.cols() != n {
        return Err(SolverError::DimensionMismatch(format!(
            "A must be square, got {}x{}",
            n,
            a.cols()
        )));
    }
    if b.len() != n {
        return Err(SolverError::DimensionMismatch(format!(
            "b has {} elements but A is {}x{}",
            b.len(),
            n,
            n
        )));
    }
    if !(MIN_UNKNOWNS..=MAX_UNKNOWNS).contains(&n) {
        return Err(SolverError::DimensionOutOfRange {
            n,
            min: MIN_UNKNOWNS,
            max: MAX_UNKNOWNS,
        });
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{dominant_system, lower_triangular_system};
    use approx::assert_abs_diff_eq;

    fn system_2x2() -> (Matrix<f64>, Vector<f64>) {
        (
            Matrix::from_rows(&[vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap(),
            Vector::new(vec![3.0, 5.0]),
        )
    }

    #[test]
    fn test_cramer_and_jordan_scenario() {
        let (a, b) = system_2x2();
        for method in [Method::Cramer, Method::Jordan] {
            let x = solve(method, &a, &b).unwrap();
            assert_abs_diff_eq!(x[0], 0.8, epsilon = 1e-9);
            assert_abs_diff_eq!(x[1], 1.4, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_substitution_scenario() {
        let a = Matrix::from_rows(&[vec![1.0, 0.0], vec![2.0, 3.0]]).unwrap();
        let b = Vector::new(vec![4.0, 11.0]);
        let x = solve(Method::Substitution, &a, &b).unwrap();
        assert_abs_diff_eq!(x[0], 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cramer_singular() {
        let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        let b = Vector::new(vec![1.0, 2.0]);
        assert_eq!(solve(Method::Cramer, &a, &b).unwrap_err(), SolverError::SingularMatrix);
    }

    #[test]
    fn test_cramer_nearly_singular_within_tolerance() {
        // Rank-2 matrix whose determinant rounds to a tiny nonzero value
        let a = Matrix::from_rows(&[
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap();
        let b = Vector::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(solve(Method::Cramer, &a, &b).unwrap_err(), SolverError::SingularMatrix);
    }

    #[test]
    fn test_tolerance_is_scale_invariant() {
        let a = Matrix::from_rows(&[vec![1e-6, 0.0], vec![0.0, 1e-6]]).unwrap();
        let b = Vector::new(vec![1e-6, 2e-6]);
        let x = solve(Method::Cramer, &a, &b).unwrap();
        assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(x[1], 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cramer_tiny_diagonal_entry() {
        let a = Matrix::from_rows(&[vec![1e-17, 0.0], vec![0.0, 1.0]]).unwrap();
        let b = Vector::new(vec![1e-17, 2.0]);
        let x = solve(Method::Cramer, &a, &b).unwrap();
        assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(x[1], 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cramer_tiny_uniform_scale() {
        let s = 1e-20;
        let a = Matrix::from_rows(&[vec![s, 2.0 * s], vec![3.0 * s, s]]).unwrap();
        let b = Vector::new(vec![3.0 * s, 4.0 * s]);
        let xc = solve(Method::Cramer, &a, &b).unwrap();
        let xj = solve(Method::Jordan, &a, &b).unwrap();
        for i in 0..2 {
            assert_abs_diff_eq!(xc[i], 1.0, epsilon = 1e-9);
            assert_abs_diff_eq!(xc[i], xj[i], epsilon = 1e-9);
        }
    }

    #[test]
    fn test_cramer_huge_entries_do_not_overflow_check() {
        // det(1e40·I) overflows to infinity; the system is still trivially solvable
        let n = MAX_UNKNOWNS;
        let a = Matrix::new(
            (0..n * n).map(|k| if k % (n + 1) == 0 { 1e40 } else { 0.0 }).collect(),
            n,
            n,
        )
        .unwrap();
        let b = Vector::new(vec![1e40; n]);
        let x = solve(Method::Cramer, &a, &b).unwrap();
        for i in 0..n {
            assert_abs_diff_eq!(x[i], 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zero_tolerance_only_refuses_exact_zero() {
        let exact = Solver::new().with_options(SolverOptions::default().with_singular_tolerance(0.0));
        let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        let b = Vector::new(vec![1.0, 2.0]);
        assert_eq!(exact.solve(Method::Cramer, &a, &b).unwrap_err(), SolverError::SingularMatrix);

        let a = Matrix::from_rows(&[vec![1.0, 1.0], vec![1.0, 1.0 + 1e-10]]).unwrap();
        let b = Vector::new(vec![2.0, 2.0 + 1e-10]);
        let x = exact.solve(Method::Cramer, &a, &b).unwrap();
        assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(x[1], 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_singular_matrix_not_checked_for_jordan() {
        let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        let b = Vector::new(vec![1.0, 2.0]);
        let x: Vector<f64> = solve(Method::Jordan, &a, &b).unwrap();
        assert!(!x.is_finite());
    }

    #[test]
    fn test_dimension_mismatch_for_every_size() {
        for n in MIN_UNKNOWNS..=MAX_UNKNOWNS {
            let a: Matrix<f64> = Matrix::eye(n);
            let short = Vector::zeros(n - 1);
            let long = Vector::zeros(n + 1);
            let wide: Matrix<f64> = Matrix::zeros(n, n + 1);
            for method in Method::ALL {
                assert!(matches!(
                    solve(method, &a, &short),
                    Err(SolverError::DimensionMismatch(_))
                ));
                assert!(matches!(
                    solve(method, &a, &long),
                    Err(SolverError::DimensionMismatch(_))
                ));
                assert!(matches!(
                    solve(method, &wide, &Vector::zeros(n)),
                    Err(SolverError::DimensionMismatch(_))
                ));
            }
        }
    }

    #[test]
    fn test_dimension_out_of_range() {
        let a: Matrix<f64> = Matrix::eye(1);
        let b = Vector::new(vec![1.0]);
        assert_eq!(
            solve(Method::Jordan, &a, &b).unwrap_err(),
            SolverError::DimensionOutOfRange { n: 1, min: 2, max: 10 }
        );
        let a: Matrix<f64> = Matrix::eye(11);
        let b = Vector::zeros(11);
        assert!(matches!(
            solve(Method::Cramer, &a, &b),
            Err(SolverError::DimensionOutOfRange { n: 11, .. })
        ));
    }

    #[test]
    fn test_pivot_guard_option() {
        let a = Matrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let b = Vector::new(vec![2.0, 3.0]);
        let guarded = Solver::new().with_options(SolverOptions::default().with_pivot_guard(true));
        assert_eq!(
            guarded.solve(Method::Jordan, &a, &b).unwrap_err(),
            SolverError::NumericalInstability { method: Method::Jordan, row: 0 }
        );
        assert!(!solve(Method::Jordan, &a, &b).unwrap().is_finite());
        // Cramer is unaffected by the guard and handles the swap through LU pivoting
        let x = guarded.solve(Method::Cramer, &a, &b).unwrap();
        assert_abs_diff_eq!(x[0], 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_idempotent() {
        let (a, b) = dominant_system(5, 9);
        let (a0, b0) = (a.clone(), b.clone());
        for method in Method::ALL {
            let first = solve(method, &a, &b).unwrap();
            let second = solve(method, &a, &b).unwrap();
            assert_eq!(first, second);
        }
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn test_substitution_on_lower_triangular_for_every_size() {
        for n in MIN_UNKNOWNS..=MAX_UNKNOWNS {
            let (a, b) = lower_triangular_system(n, n as u64);
            let xs = solve(Method::Substitution, &a, &b).unwrap();
            let xj = solve(Method::Jordan, &a, &b).unwrap();
            for i in 0..n {
                assert_abs_diff_eq!(xs[i], xj[i], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_f32_systems() {
        let a = Matrix::<f32>::from_rows(&[vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
        let b = Vector::new(vec![3.0f32, 5.0]);
        let x = solve(Method::Cramer, &a, &b).unwrap();
        assert_abs_diff_eq!(x[0], 0.8, epsilon = 1e-5);
        assert_abs_diff_eq!(x[1], 1.4, epsilon = 1e-5);
    }

    #[test]
    fn test_options_serde_defaults() {
        let opts: SolverOptions = serde_json::from_str(r#"{"guard_pivots": true}"#).unwrap();
        assert!(opts.guard_pivots);
        assert_eq!(opts.singular_tolerance, 1e-12);
    }
}
