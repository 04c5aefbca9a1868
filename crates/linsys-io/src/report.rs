use linsys_core::{Matrix, Method, SolveResult, SolverError, Vector};
use linsys_linalg::{max_abs, residual};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Serializable outcome of one solve call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    pub method: Method,
    pub unknowns: usize,
    /// JSON has no NaN or infinity: such components are written as `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<Vec<f64>>,
    /// `true` when a solution exists and every component is finite.
    #[serde(default)]
    pub finite: bool,
    /// Infinity norm of `A·x − b`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residual_norm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SolveReport {
    pub fn success(method: Method, a: &Matrix<f64>, b: &Vector<f64>, x: &Vector<f64>) -> SolveResult<Self> {
        let r = residual(a, x, b)?;
        Ok(SolveReport {
            method,
            unknowns: x.len(),
            solution: Some(x.data().to_vec()),
            finite: x.is_finite(),
            residual_norm: Some(max_abs(r.data())),
            error: None,
        })
    }

    pub fn failure(method: Method, unknowns: usize, err: &SolverError) -> Self {
        SolveReport {
            method,
            unknowns,
            solution: None,
            finite: false,
            residual_norm: None,
            error: Some(err.to_string()),
        }
    }

    /// Build a report from the result of a solve call.
    pub fn from_result(
        method: Method,
        a: &Matrix<f64>,
        b: &Vector<f64>,
        result: &SolveResult<Vector<f64>>,
    ) -> Self {
        match result {
            Ok(x) => SolveReport::success(method, a, b, x)
                .unwrap_or_else(|e| SolveReport::failure(method, a.rows(), &e)),
            Err(e) => SolveReport::failure(method, a.rows(), e),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Write a report to a JSON file.
pub fn save_report<P: AsRef<Path>>(report: &SolveReport, path: P) -> Result<(), Box<dyn Error>> {
    fs::write(path, report.to_json()?)?;
    Ok(())
}
