//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve the store root exactly once, at the process boundary
//! - Delegate to command handlers
//!
//! The CLI layer is thin: arguments are parsed via clap and dispatched to
//! handlers, which call into [`crate::core`]. Core logic never reads the
//! environment; the resolved root is threaded as a parameter into every
//! operation.

pub mod args;
pub mod commands;

pub use args::{Cli, Command};

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::core::paths::StorePaths;

/// Environment variable naming the store root when `--root` is not given.
pub const ROOT_ENV_VAR: &str = "ARTIFACT_STORE_ROOT";

/// Execution context threaded through command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// The resolved store root.
    pub root: PathBuf,
    /// Progress output on stderr.
    pub verbose: bool,
}

impl Context {
    /// Path routing for this context's root.
    pub fn paths(&self) -> StorePaths {
        StorePaths::new(&self.root)
    }

    /// Print a progress line when verbose output is enabled.
    pub fn progress(&self, message: impl AsRef<str>) {
        if self.verbose {
            eprintln!("{}", message.as_ref());
        }
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let root = resolve_root(cli.root)?;
    let ctx = Context {
        root,
        verbose: cli.verbose,
    };

    commands::dispatch(cli.command, &ctx)
}

/// Resolve the store root from the `--root` flag or `ARTIFACT_STORE_ROOT`.
fn resolve_root(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = flag {
        return Ok(root);
    }
    match std::env::var_os(ROOT_ENV_VAR) {
        Some(root) if !root.is_empty() => Ok(PathBuf::from(root)),
        _ => bail!(
            "no store root given: pass --root or set {}",
            ROOT_ENV_VAR
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_takes_precedence() {
        let root = resolve_root(Some(PathBuf::from("/explicit"))).unwrap();
        assert_eq!(root, PathBuf::from("/explicit"));
    }

    #[test]
    fn context_paths_route_from_root() {
        let ctx = Context {
            root: PathBuf::from("/store"),
            verbose: false,
        };
        assert_eq!(
            ctx.paths().marker_path(),
            PathBuf::from("/store/.artifact_store")
        );
    }
}
