//! Breadth-first traversal over a lazily expanded import graph.
//!
//! ## Design
//!
//! - The graph is never known in advance: each expansion asks the
//!   [`DependencySource`] for one node's edges, then narrows them with the
//!   [`NamespaceFilter`]
//! - Expansions happen one at a time, in FIFO order, on the calling thread
//! - The frontier and visited set belong to a single call and are dropped
//!   when it returns
//! - Any fetch failure aborts the traversal and discards partial results
//!
//! ## Operations
//!
//! | Operation | Frontier holds | Marked visited | Stops |
//! |-----------|----------------|----------------|-------|
//! | [`Walker::build_tree`] | tree nodes | on dequeue | queue empty |
//! | [`Walker::find_path`] | paths | on dequeue | first target hit |
//! | [`Walker::find_all_paths`] | paths | on discovery | queue empty |
//!
//! `find_all_paths` marks a module visited as soon as it is first enqueued,
//! so only the first-discovered route through a shared intermediate module is
//! continued. It reports every edge into the target it meets along those
//! routes, which is not the same as enumerating all simple paths.

mod frontier;
mod path;
mod tree;

pub use frontier::{Frontier, Visited};
pub use path::ModulePath;
pub use tree::DepTree;

use tracing::trace;

use crate::error::Result;
use crate::filter::NamespaceFilter;
use crate::source::DependencySource;

/// Walks the import graph exposed by a [`DependencySource`].
///
/// A walker holds no traversal state between calls; each query starts with a
/// fresh frontier and visited set, so nothing is cached across queries.
#[derive(Debug, Clone)]
pub struct Walker<S> {
    source: S,
    filter: NamespaceFilter,
}

impl<S: DependencySource> Walker<S> {
    /// Create a walker over `source`, following only dependencies that pass
    /// `filter`.
    pub fn new(source: S, filter: NamespaceFilter) -> Self {
        Self { source, filter }
    }

    /// The underlying dependency source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The namespace filter applied to every expansion.
    pub fn filter(&self) -> &NamespaceFilter {
        &self.filter
    }

    /// Fetch `module`'s direct dependencies and keep those in the namespace.
    pub fn expand(&self, module: &str) -> Result<Vec<String>> {
        let raw = self.source.direct_dependencies(module)?;
        let raw_count = raw.len();
        let deps = self.filter.apply(raw);
        trace!(
            module,
            raw = raw_count,
            kept = deps.len(),
            "Expanded module"
        );
        Ok(deps)
    }
}
