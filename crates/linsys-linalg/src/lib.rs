pub mod decomposition;
pub mod ops;

pub use decomposition::*;
pub use ops::*;
