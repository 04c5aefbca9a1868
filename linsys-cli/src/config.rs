use linsys::prelude::SolverOptions;

pub const ENV_SINGULAR_TOL: &str = "LINSYS_SINGULAR_TOL";
pub const ENV_GUARD_PIVOTS: &str = "LINSYS_GUARD_PIVOTS";

/// Solver options with overrides from the process environment.
pub fn options_from_env() -> Result<SolverOptions, String> {
    options_from_lookup(|key| std::env::var(key).ok())
}

pub fn options_from_lookup<F>(lookup: F) -> Result<SolverOptions, String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut options = SolverOptions::default();

    if let Some(raw) = lookup(ENV_SINGULAR_TOL) {
        let tol: f64 = raw
            .trim()
            .parse()
            .map_err(|_| format!("{}: '{}' is not a number", ENV_SINGULAR_TOL, raw))?;
        if !(tol >= 0.0 && tol.is_finite()) {
            return Err(format!("{} must be a finite value >= 0, got {}", ENV_SINGULAR_TOL, raw));
        }
        options = options.with_singular_tolerance(tol);
    }

    if let Some(raw) = lookup(ENV_GUARD_PIVOTS) {
        let guard = match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" | "" => false,
            _ => return Err(format!("{}: expected a boolean, got '{}'", ENV_GUARD_PIVOTS, raw)),
        };
        options = options.with_pivot_guard(guard);
    }

    log::debug!("solver options: {:?}", options);
    Ok(options)
}
