//! Text parsing at the input boundary. Everything past this point works on
//! validated `Matrix`/`Vector` values.

use linsys_core::{Matrix, SolveResult, SolverError, Vector};

/// Parse a line of whitespace-separated numbers, requiring exactly `expected` values.
pub fn parse_row(line: &str, expected: usize) -> SolveResult<Vec<f64>> {
    let values = line
        .split_whitespace()
        .map(|tok| {
            tok.parse::<f64>()
                .map_err(|_| SolverError::Parse(format!("'{}' is not a number", tok)))
        })
        .collect::<SolveResult<Vec<f64>>>()?;

    if values.len() != expected {
        return Err(SolverError::DimensionMismatch(format!(
            "expected {} values, got {}",
            expected,
            values.len()
        )));
    }
    Ok(values)
}

/// Parse `n` matrix rows and the right-hand side into a square system.
pub fn parse_system<S: AsRef<str>>(rows: &[S], b_line: &str) -> SolveResult<(Matrix<f64>, Vector<f64>)> {
    let n = rows.len();
    let parsed = rows
        .iter()
        .enumerate()
        .map(|(i, line)| {
            parse_row(line.as_ref(), n).map_err(|e| match e {
                SolverError::DimensionMismatch(msg) => {
                    SolverError::DimensionMismatch(format!("row {} of A: {}", i + 1, msg))
                }
                other => other,
            })
        })
        .collect::<SolveResult<Vec<Vec<f64>>>>()?;

    let b = parse_row(b_line, n).map_err(|e| match e {
        SolverError::DimensionMismatch(msg) => SolverError::DimensionMismatch(format!("b: {}", msg)),
        other => other,
    })?;

    Ok((Matrix::from_rows(&parsed)?, Vector::new(b)))
}

/// Split an augmented matrix `[A | b]` given as rows of `n + 1` values.
pub fn split_augmented(rows: &[Vec<f64>]) -> SolveResult<(Matrix<f64>, Vector<f64>)> {
    let n = rows.len();
    let mut a_rows = Vec::with_capacity(n);
    let mut b = Vec::with_capacity(n);
    for (i, row) in rows.iter().enumerate() {
        if row.len() != n + 1 {
            return Err(SolverError::DimensionMismatch(format!(
                "row {} has {} values, expected {} (n coefficients and one constant)",
                i + 1,
                row.len(),
                n + 1
            )));
        }
        a_rows.push(row[..n].to_vec());
        b.push(row[n]);
    }
    Ok((Matrix::from_rows(&a_rows)?, Vector::new(b)))
}
