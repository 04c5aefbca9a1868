pub mod csv_io;
pub mod parse;
pub mod report;

pub use csv_io::*;
pub use parse::*;
pub use report::*;
