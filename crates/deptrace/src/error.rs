//! Error types for deptrace operations.
//!
//! Every failure is terminal for the query that hit it. A traversal that sees
//! a [`FetchError`] stops immediately and discards whatever it had built so
//! far; nothing is retried.
//!
//! `find_all_paths` reports "no route" as an empty list while `find_path`
//! reports it as [`Error::NoDependency`]. Callers relying on either shape
//! should keep that asymmetry in mind.

use thiserror::Error;

use crate::source::FetchError;

/// Result type for deptrace operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for deptrace operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Fetching a module's direct dependencies failed.
    #[error("failed to fetch dependencies: {0}")]
    Fetch(#[from] FetchError),

    /// The whole reachable graph was walked without meeting the target.
    #[error("{root:?} does not depend on {target:?}")]
    NoDependency {
        /// Module the search started from.
        root: String,
        /// Module that was never reached.
        target: String,
    },

    /// Invalid configuration or arguments
    #[error("configuration error: {0}")]
    Config(String),

    /// File system or terminal I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a "no dependency" error for a root/target pair.
    #[must_use]
    pub fn no_dependency(root: &str, target: &str) -> Self {
        Self::NoDependency {
            root: root.to_string(),
            target: target.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_dependency_names_both_modules_verbatim() {
        let error = Error::no_dependency("github.com/x/app", "github.com/x/app/db");

        assert_eq!(
            error.to_string(),
            r#""github.com/x/app" does not depend on "github.com/x/app/db""#
        );
    }

    #[test]
    fn fetch_error_is_kept_as_source() {
        let error = Error::from(FetchError::unknown_module("a/b"));

        let source = std::error::Error::source(&error).expect("fetch error should be the source");
        assert!(source.to_string().contains("a/b"));
    }
}
