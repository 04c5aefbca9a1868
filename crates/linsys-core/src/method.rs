use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SolverError;

/// Algorithm used to solve a system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Cramer's rule, computed as `A⁻¹·b`.
    Cramer,
    /// Gauss–Jordan reduction of the augmented matrix, no pivoting.
    Jordan,
    /// Forward substitution; only meaningful for lower-triangular `A`.
    Substitution,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Cramer, Method::Jordan, Method::Substitution];

    pub fn name(self) -> &'static str {
        match self {
            Method::Cramer => "cramer",
            Method::Jordan => "jordan",
            Method::Substitution => "substitution",
        }
    }

    /// Human-readable title, e.g. for menus.
    pub fn title(self) -> &'static str {
        match self {
            Method::Cramer => "Cramer's rule",
            Method::Jordan => "Gauss-Jordan elimination",
            Method::Substitution => "Forward substitution",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cramer" => Ok(Method::Cramer),
            "jordan" | "gauss-jordan" | "gauss_jordan" => Ok(Method::Jordan),
            "substitution" | "forward" => Ok(Method::Substitution),
            other => Err(SolverError::Parse(format!("unknown method '{}'", other))),
        }
    }
}
