use linsys_core::{Matrix, SolverError, Vector};
use std::error::Error;
use std::io::Read;
use std::path::Path;

use crate::parse::split_augmented;

/// Read an augmented system `[A | b]` from a headerless CSV file.
/// Each of the `n` records holds `n` coefficients followed by the constant term.
pub fn read_system_csv(path: &str) -> Result<(Matrix<f64>, Vector<f64>), Box<dyn Error>> {
    let file = std::fs::File::open(Path::new(path))?;
    read_system(file)
}

/// Same as [`read_system_csv`], from any reader.
pub fn read_system<R: Read>(reader: R) -> Result<(Matrix<f64>, Vector<f64>), Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let row = record
            .iter()
            .map(|field| {
                field.parse::<f64>().map_err(|_| {
                    SolverError::Parse(format!("line {}: '{}' is not a number", i + 1, field))
                })
            })
            .collect::<Result<Vec<f64>, SolverError>>()?;
        rows.push(row);
    }

    Ok(split_augmented(&rows)?)
}
