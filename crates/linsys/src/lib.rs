//! # linsys
//!
//! Direct solvers for small dense linear systems `A·x = b` (2 to 10 unknowns).
//!
//! ## Modules
//!
//! - **core** — `Matrix`, `Vector`, `Method` and the `SolverError` type
//! - **linalg** — determinant, LU inverse, matrix-vector product, residuals
//! - **solvers** — Cramer's rule, Gauss–Jordan, forward substitution and the `solve` entry point
//! - **io** — text/CSV input parsing and JSON reports
//!
//! ```
//! use linsys::prelude::*;
//!
//! let a = Matrix::from_rows(&[vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
//! let b = Vector::new(vec![3.0, 5.0]);
//! let x = solve(Method::Jordan, &a, &b).unwrap();
//! assert!((x[0] - 0.8).abs() < 1e-9);
//! ```

/// Matrix, vector and error types.
pub use linsys_core as core;

/// Linear algebra primitives.
pub use linsys_linalg as linalg;

/// Solver implementations and the dispatching facade.
pub use linsys_solvers as solvers;

/// Input parsing and reports.
pub use linsys_io as io;

pub mod prelude {
    pub use linsys_core::{Float, Matrix, Method, SolveResult, SolverError, Vector};
    pub use linsys_solvers::{solve, LinearSolver, Solver, SolverOptions};
}
