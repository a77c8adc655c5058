//! In-memory dependency source.

use std::cell::Cell;
use std::collections::HashMap;

use super::{DependencySource, FetchError};

/// A fixed adjacency table answering dependency lookups from memory.
///
/// Modules absent from the table fail with [`FetchError::UnknownModule`],
/// the way a metadata query fails on a package that doesn't exist. List a
/// module with an empty vector to make it a leaf.
///
/// Every lookup is counted, which lets callers check how often each node was
/// expanded.
#[derive(Debug, Default, Clone)]
pub struct StaticSource {
    edges: HashMap<String, Vec<String>>,
    lookups: Cell<usize>,
}

impl StaticSource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a source from `(module, dependencies)` pairs.
    ///
    /// A later pair for the same module replaces the earlier one.
    pub fn from_edges<I, M, D>(edges: I) -> Self
    where
        I: IntoIterator<Item = (M, Vec<D>)>,
        M: Into<String>,
        D: Into<String>,
    {
        let mut source = Self::new();
        for (module, deps) in edges {
            source.insert(module, deps);
        }
        source
    }

    /// Set the dependency list of `module`.
    pub fn insert<M, D>(&mut self, module: M, deps: Vec<D>)
    where
        M: Into<String>,
        D: Into<String>,
    {
        let deps = deps.into_iter().map(Into::into).collect::<Vec<String>>();
        self.edges.insert(module.into(), deps);
    }

    /// Number of modules with a known dependency list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if no module is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total number of lookups served so far, failed ones included.
    #[must_use]
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl DependencySource for StaticSource {
    fn direct_dependencies(&self, module: &str) -> Result<Vec<String>, FetchError> {
        self.lookups.set(self.lookups.get() + 1);
        self.edges
            .get(module)
            .cloned()
            .ok_or_else(|| FetchError::unknown_module(module))
    }
}
