//! Entry points that wire configuration, validation and search.

use std::io;
use std::path::Path;

use paintshop_config::{ConfigError, SolverConfig};
use paintshop_core::{PaintShopError, Request, Result};
use paintshop_solver::{Answer, SolveResult, Solver};
use tracing::warn;

/// Configuration file looked up in the working directory by [`solve`].
pub const CONFIG_FILE: &str = "paintshop.toml";

/// Solves a request with the configuration from [`CONFIG_FILE`], or the
/// defaults when the file is absent or unreadable.
///
/// # Examples
///
/// ```
/// use paintshop::prelude::*;
///
/// let request = Request::new(2, 2, vec![vec![1, 1, 0], vec![1, 2, 0]]);
/// assert_eq!(paintshop::solve(&request).answer.to_string(), "0 0");
/// ```
pub fn solve(request: &Request) -> SolveResult {
    let config = match SolverConfig::load(CONFIG_FILE) {
        Ok(config) => config,
        Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => SolverConfig::default(),
        Err(e) => {
            warn!(event = "config_ignored", file = CONFIG_FILE, error = %e);
            SolverConfig::default()
        }
    };
    solve_with_config(request, config)
}

/// Solves a request with an explicit configuration.
pub fn solve_with_config(request: &Request, config: SolverConfig) -> SolveResult {
    #[cfg(feature = "console")]
    paintshop_console::init();

    Solver::new(config).solve(request)
}

/// Decodes a JSON request and solves it.
///
/// # Errors
///
/// Returns [`PaintShopError::Decode`] when the document is not a request.
/// Malformed values inside a well-shaped request are not errors; they make
/// the answer `IMPOSSIBLE`.
///
/// # Examples
///
/// ```
/// let answer = paintshop::solve_json(
///     r#"{"colors": 1, "customers": 2, "demands": [[1, 1, 0], [1, 1, 1]]}"#,
/// )
/// .unwrap();
/// assert_eq!(answer.to_string(), "IMPOSSIBLE");
/// ```
pub fn solve_json(json: &str) -> Result<Answer> {
    let request = Request::from_json_str(json)?;
    Ok(solve(&request).answer)
}

/// Loads a configuration file, TOML or YAML by extension.
///
/// # Errors
///
/// Returns [`PaintShopError::Config`] when the file cannot be read or
/// parsed.
pub fn load_config(path: impl AsRef<Path>) -> Result<SolverConfig> {
    SolverConfig::load(path).map_err(|e| PaintShopError::Config(e.to_string()))
}
