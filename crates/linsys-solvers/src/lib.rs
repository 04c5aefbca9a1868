pub mod cramer;
pub mod facade;
pub mod jordan;
pub mod substitution;

pub use cramer::*;
pub use facade::*;
pub use jordan::*;
pub use substitution::*;

use linsys_core::{Float, Matrix, SolveResult, Vector};

/// A direct method for the square system `A·x = b`.
///
/// Implementations never mutate `a` or `b`; any working storage is a private copy.
pub trait LinearSolver<T: Float> {
    fn solve(&self, a: &Matrix<T>, b: &Vector<T>) -> SolveResult<Vector<T>>;
}
