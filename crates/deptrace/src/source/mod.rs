//! Dependency sources: where the edges of the import graph come from.
//!
//! The traversal engine never sees the whole graph. It asks a
//! [`DependencySource`] for one module's direct dependencies at a time and
//! treats the answer as the only truth about that node's outgoing edges.
//!
//! Two sources ship with the crate:
//!
//! - [`CommandSource`] runs an external build-metadata query (by default
//!   `go list -f '{{.Imports}}' <module>`) and parses its output.
//! - [`StaticSource`] answers from an in-memory adjacency table, for tests and
//!   for graphs that were already captured elsewhere.

mod command;
mod error;
mod memory;

pub use command::CommandSource;
pub use error::FetchError;
pub use memory::StaticSource;

/// Characters stripped from both ends of raw query output.
const DELIMITERS: &[char] = &['\'', '[', ']', '\n'];

/// Something that can list a module's direct dependencies.
///
/// Implementations may be slow (one process spawn per call) and may fail;
/// the walker calls [`direct_dependencies`](Self::direct_dependencies) at
/// most once per expanded module and aborts on the first error.
///
/// # Example
///
/// ```
/// use deptrace::{DependencySource, FetchError};
///
/// struct Leaf;
///
/// impl DependencySource for Leaf {
///     fn direct_dependencies(&self, _module: &str) -> Result<Vec<String>, FetchError> {
///         Ok(Vec::new())
///     }
/// }
///
/// assert!(Leaf.direct_dependencies("anything").unwrap().is_empty());
/// ```
pub trait DependencySource {
    /// Return the unfiltered, ordered list of modules `module` imports.
    fn direct_dependencies(&self, module: &str) -> Result<Vec<String>, FetchError>;
}

impl<T: DependencySource + ?Sized> DependencySource for &T {
    fn direct_dependencies(&self, module: &str) -> Result<Vec<String>, FetchError> {
        (**self).direct_dependencies(module)
    }
}

impl<T: DependencySource + ?Sized> DependencySource for Box<T> {
    fn direct_dependencies(&self, module: &str) -> Result<Vec<String>, FetchError> {
        (**self).direct_dependencies(module)
    }
}

/// Split raw import-list output into identifier tokens.
///
/// The metadata query prints a bracketed, quoted list such as
/// `'[fmt github.com/x/app/db]'`. Quotes, brackets and newlines are trimmed
/// from both ends and the remainder is split on whitespace. Empty tokens are
/// dropped, so `'[]'` yields an empty list.
#[must_use]
pub fn parse_imports(raw: &str) -> Vec<String> {
    raw.trim_matches(DELIMITERS)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
