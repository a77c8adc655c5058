//! Error types for dependency fetching.

use thiserror::Error;

/// Errors raised while asking a [`DependencySource`](super::DependencySource)
/// for a module's direct dependencies.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The query program is not installed or not on `PATH`.
    #[error("{program} not found\n\nThe dependency query needs '{program}' on your PATH.\n{install_hint}")]
    NotFound {
        /// The program that was not found.
        program: String,
        /// Installation instructions for the missing program.
        install_hint: String,
    },

    /// The query program could not be started.
    #[error("failed to run '{program}' for {module:?}: {source}")]
    Spawn {
        /// The program that failed to start.
        program: String,
        /// Module whose dependencies were requested.
        module: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The query program ran but exited unsuccessfully.
    #[error("'{program}' failed for {module:?} ({status}): {output}")]
    Failed {
        /// The program that failed.
        program: String,
        /// Module whose dependencies were requested.
        module: String,
        /// Exit status as reported by the OS.
        status: String,
        /// What the program printed (stderr, or stdout when stderr was empty).
        output: String,
    },

    /// The module is not present in an in-memory graph.
    #[error("unknown module {module:?}")]
    UnknownModule {
        /// Module that was requested.
        module: String,
    },
}

impl FetchError {
    /// Create a "not found" error with an install hint.
    #[must_use]
    pub fn not_found(program: &str, install_hint: &str) -> Self {
        Self::NotFound {
            program: program.to_string(),
            install_hint: install_hint.to_string(),
        }
    }

    /// Create a spawn failure error.
    #[must_use]
    pub fn spawn_failed(program: &str, module: &str, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.to_string(),
            module: module.to_string(),
            source,
        }
    }

    /// Create an unknown-module error.
    #[must_use]
    pub fn unknown_module(module: &str) -> Self {
        Self::UnknownModule {
            module: module.to_string(),
        }
    }

    /// The module whose fetch failed, when the error is tied to one.
    #[must_use]
    pub fn module(&self) -> Option<&str> {
        match self {
            Self::NotFound { .. } => None,
            Self::Spawn { module, .. }
            | Self::Failed { module, .. }
            | Self::UnknownModule { module } => Some(module),
        }
    }
}
