//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::GraderError;
use crate::scope::Scope;
use crate::solver::SolverTransport;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
pub struct Config {
    /// Iteration domain for the run
    pub scope: Scope,
    /// How solver processes are launched
    pub transport: SolverTransport,
    /// Path to the session store
    pub sessions_file: PathBuf,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, resolving scope and solver transport
    pub fn from_args(args: Args) -> Result<Self, GraderError> {
        let scope = Scope::resolve(args.year, args.day.as_deref(), args.part)?;

        // --solver wins over --api; with neither, build and run locally
        let transport = if let Some(command) = args.solver {
            SolverTransport::Shell { command }
        } else if let Some(endpoint) = args.api {
            SolverTransport::Forward { endpoint }
        } else {
            SolverTransport::Local
        };

        Ok(Config {
            scope,
            transport,
            sessions_file: expand_tilde(&args.sessions_file),
            quiet: args.quiet,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> Args {
        Args {
            year: None,
            day: None,
            part: None,
            api: None,
            solver: None,
            sessions_file: PathBuf::from("/tmp/sessions.json"),
            quiet: false,
        }
    }

    #[test]
    fn test_default_transport_is_local() {
        let config = Config::from_args(args()).unwrap();
        assert_eq!(config.transport, SolverTransport::Local);
    }

    #[test]
    fn test_api_override_selects_forwarding() {
        let config = Config::from_args(Args {
            api: Some("fly".to_string()),
            ..args()
        })
        .unwrap();
        assert_eq!(
            config.transport,
            SolverTransport::Forward {
                endpoint: "fly".to_string()
            }
        );
    }

    #[test]
    fn test_solver_override_wins_over_api() {
        let config = Config::from_args(Args {
            api: Some("fly".to_string()),
            solver: Some("./my-solver".to_string()),
            ..args()
        })
        .unwrap();
        assert_eq!(
            config.transport,
            SolverTransport::Shell {
                command: "./my-solver".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_day_override_is_a_configuration_error() {
        let result = Config::from_args(Args {
            day: Some("5-x".to_string()),
            ..args()
        });
        assert!(matches!(result, Err(GraderError::Config(_))));
    }

    #[test]
    fn test_expand_tilde_leaves_absolute_paths_alone() {
        assert_eq!(
            expand_tilde(Path::new("/etc/sessions.json")),
            PathBuf::from("/etc/sessions.json")
        );
    }

    #[test]
    fn test_expand_tilde_resolves_home_relative_paths() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(
                expand_tilde(Path::new("~/.advent-of-code.json")),
                home.join(".advent-of-code.json")
            );
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }
}
