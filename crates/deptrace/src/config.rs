//! Configuration for deptrace.
//!
//! Settings live in an optional YAML file:
//!
//! ```yaml
//! namespace: github.com/juju/juju
//! query:
//!   program: go
//!   args: ["list", "-f", "'{{.Imports}}'"]
//! ```
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! stock `go list` setup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::filter::NamespaceFilter;
use crate::source::CommandSource;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".deps.yaml";

/// Namespace prefix used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "github.com/juju/juju";

/// Query program used when none is configured.
pub const DEFAULT_PROGRAM: &str = "go";

/// Top-level configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DepsConfig {
    /// Prefix a dependency must start with to be followed.
    pub namespace: String,

    /// External command that lists a module's imports.
    pub query: QueryConfig,
}

/// The `query` section: how to ask for one module's direct imports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    /// Program to run.
    pub program: String,

    /// Arguments placed before the module identifier.
    pub args: Vec<String>,
}

impl Default for DepsConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            query: QueryConfig::default(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: vec![
                "list".to_string(),
                "-f".to_string(),
                "'{{.Imports}}'".to_string(),
            ],
        }
    }
}

impl DepsConfig {
    /// Load and validate configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Parse and validate configuration from YAML text.
    ///
    /// Blank input is treated as an empty mapping.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))?
        };
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Without one, [`CONFIG_FILE_NAME`] in `dir`
    /// is used if present, otherwise defaults apply.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::discover(dir) {
            Some(path) => {
                debug!(path = %path.display(), "Using discovered config file");
                Self::load(&path).inspect_err(|e| {
                    warn!(path = %path.display(), error = %e, "Discovered config file is invalid");
                })
            }
            None => {
                debug!(dir = %dir.display(), "No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Path of the config file in `dir`, if one exists.
    #[must_use]
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        let path = dir.join(CONFIG_FILE_NAME);
        path.is_file().then_some(path)
    }

    /// Check that the configuration can drive a traversal.
    pub fn validate(&self) -> Result<()> {
        if self.query.program.trim().is_empty() {
            return Err(Error::Config("query.program must not be empty".to_string()));
        }
        Ok(())
    }

    /// The namespace filter described by this configuration.
    #[must_use]
    pub fn filter(&self) -> NamespaceFilter {
        NamespaceFilter::new(self.namespace.clone())
    }

    /// The dependency source described by this configuration.
    #[must_use]
    pub fn source(&self) -> CommandSource {
        CommandSource::from_config(&self.query)
    }
}
