pub mod dtype;
pub mod error;
pub mod matrix;
pub mod method;

pub use dtype::Float;
pub use error::{SolveResult, SolverError};
pub use matrix::{Matrix, Vector};
pub use method::Method;
