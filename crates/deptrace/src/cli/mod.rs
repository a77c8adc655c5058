//! CLI command implementations.

mod display;

pub mod path;
pub mod paths;
pub mod tree;

use std::path::Path;

use deptrace::{CommandSource, DepsConfig, Walker};
use tracing::debug;

/// Printed when no action is given.
pub const USAGE: &str = "no action specified\nvalid actions are: tree, path, paths\n";

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Header line followed by the plain report.
    Text,
    /// Pretty-printed JSON, no header.
    Json,
}

/// Resolve configuration and build a walker backed by the query command.
pub fn open_walker(
    config_path: Option<&Path>,
    namespace: Option<String>,
) -> Result<Walker<CommandSource>, deptrace::Error> {
    let cwd = std::env::current_dir()?;
    let mut config = DepsConfig::resolve(config_path, &cwd)?;
    if let Some(namespace) = namespace {
        config.namespace = namespace;
    }

    debug!(
        namespace = %config.namespace,
        program = %config.query.program,
        "Resolved configuration"
    );

    Ok(Walker::new(config.source(), config.filter()))
}
