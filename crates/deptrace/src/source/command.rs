//! Dependency source backed by an external metadata command.

use std::process::{Command, Stdio};

use tracing::{debug, trace};

use super::{DependencySource, FetchError, parse_imports};
use crate::config::QueryConfig;

const GO_INSTALL_HINT: &str = "Install Go: https://go.dev/doc/install";
const GENERIC_INSTALL_HINT: &str = "Check the `query.program` setting in your deps config.";

/// Runs `<program> <args...> <module>` once per lookup and parses stdout
/// with [`parse_imports`].
///
/// The call blocks until the program exits. There is no timeout: a hung
/// query hangs the traversal that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSource {
    program: String,
    args: Vec<String>,
}

impl CommandSource {
    /// Create a source that runs `program` with `args`, appending the module.
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Create a source from the `query` section of the configuration.
    #[must_use]
    pub fn from_config(config: &QueryConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone())
    }

    /// The program this source runs.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The arguments passed before the module identifier.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn install_hint(&self) -> &'static str {
        if self.program == "go" {
            GO_INSTALL_HINT
        } else {
            GENERIC_INSTALL_HINT
        }
    }
}

impl Default for CommandSource {
    fn default() -> Self {
        Self::from_config(&QueryConfig::default())
    }
}

impl DependencySource for CommandSource {
    fn direct_dependencies(&self, module: &str) -> Result<Vec<String>, FetchError> {
        debug!(
            program = %self.program,
            args = ?self.args,
            module,
            "Running dependency query"
        );

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(module)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    FetchError::not_found(&self.program, self.install_hint())
                } else {
                    FetchError::spawn_failed(&self.program, module, e)
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reported = if stderr.trim().is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(FetchError::Failed {
                program: self.program.clone(),
                module: module.to_string(),
                status: output.status.to_string(),
                output: reported,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let deps = parse_imports(&stdout);
        trace!(module, count = deps.len(), "Parsed dependency query output");
        Ok(deps)
    }
}
