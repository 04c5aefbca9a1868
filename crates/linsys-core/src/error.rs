use thiserror::Error;

use crate::method::Method;

/// Error type shared by every solver and matrix primitive.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Unsupported system size: {n} unknowns (expected {min} to {max})")]
    DimensionOutOfRange { n: usize, min: usize, max: usize },

    #[error("Singular matrix: the system has no unique solution")]
    SingularMatrix,

    #[error("Numerical instability: zero or non-finite pivot in row {row} ({method} method)")]
    NumericalInstability { method: Method, row: usize },

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type SolveResult<T> = Result<T, SolverError>;
