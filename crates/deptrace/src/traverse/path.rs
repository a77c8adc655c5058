//! Path-finding traversals: one shortest path, or every discovered path.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use super::{Frontier, Visited, Walker};
use crate::error::{Error, Result};
use crate::source::DependencySource;

/// A walk through the import graph, from the root (first) to the current
/// module (last).
///
/// Paths are values: [`extend`](Self::extend) returns a new path and leaves
/// the original untouched, so sibling paths built from the same prefix never
/// see each other's additions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModulePath {
    modules: Vec<String>,
}

#[allow(clippy::len_without_is_empty)] // never empty
impl ModulePath {
    /// A single-module path.
    #[must_use]
    pub fn root(module: impl Into<String>) -> Self {
        Self {
            modules: vec![module.into()],
        }
    }

    /// A new path with `module` appended. `self` is not modified.
    #[must_use]
    pub fn extend(&self, module: impl Into<String>) -> Self {
        let mut modules = Vec::with_capacity(self.modules.len() + 1);
        modules.extend_from_slice(&self.modules);
        modules.push(module.into());
        Self { modules }
    }

    /// The module the path starts from.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.modules[0]
    }

    /// The module the path ends at.
    #[must_use]
    pub fn last(&self) -> &str {
        &self.modules[self.modules.len() - 1]
    }

    /// All modules on the path, root first.
    #[must_use]
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// Number of modules on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Number of import edges walked.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.modules.len() - 1
    }

    /// Consume the path and return the modules.
    #[must_use]
    pub fn into_modules(self) -> Vec<String> {
        self.modules
    }
}

impl fmt::Display for ModulePath {
    /// One module per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for module in &self.modules {
            writeln!(f, "{module}")?;
        }
        Ok(())
    }
}

impl<S: DependencySource> Walker<S> {
    /// Find a shortest import path from `root` to `target`.
    ///
    /// Each module is expanded at most once, the first time a path ending in
    /// it leaves the frontier. The search returns as soon as an expansion
    /// lists `target`, without draining the rest of the frontier. `root` is
    /// never compared against `target` itself, so `root == target` only
    /// succeeds through a cycle.
    ///
    /// # Errors
    ///
    /// - [`Error::Fetch`] if any expansion fails
    /// - [`Error::NoDependency`] if the reachable graph is exhausted first
    pub fn find_path(&self, root: &str, target: &str) -> Result<ModulePath> {
        let mut visited: Visited<String> = Visited::new();
        let mut frontier = Frontier::seeded(ModulePath::root(root));

        while let Some(path) = frontier.pop() {
            let module = path.last();
            if !visited.insert(module.to_string()) {
                debug!(module, "Skipping already expanded module");
                continue;
            }
            debug!(module, pending = frontier.len(), "Searching from module");

            for dep in self.expand(module)? {
                let next = path.extend(dep.as_str());
                if dep == target {
                    info!(
                        root,
                        target,
                        edges = next.edge_count(),
                        expanded = visited.len(),
                        "Found dependency path"
                    );
                    return Ok(next);
                }
                frontier.push(next);
            }
        }

        info!(root, target, expanded = visited.len(), "No dependency path");
        Err(Error::no_dependency(root, target))
    }

    /// Collect the paths from `root` to `target`, in discovery order.
    ///
    /// Unlike [`find_path`](Self::find_path), a module is marked visited when
    /// it is first enqueued, and the search keeps going after a hit until the
    /// frontier is empty. Every time an expansion lists `target`, the extended
    /// path is recorded; `target` itself is never expanded. Only the first
    /// route to reach an intermediate module is continued past it.
    ///
    /// An unreachable target yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// [`Error::Fetch`] if any expansion fails. Paths found before the
    /// failure are discarded.
    pub fn find_all_paths(&self, root: &str, target: &str) -> Result<Vec<ModulePath>> {
        let mut paths = Vec::new();
        let mut visited: Visited<String> = Visited::new();
        let mut frontier = Frontier::seeded(ModulePath::root(root));
        let mut expanded = 0usize;

        while let Some(path) = frontier.pop() {
            let module = path.last();
            debug!(module, pending = frontier.len(), "Searching from module");
            expanded += 1;

            for dep in self.expand(module)? {
                if dep == target {
                    let hit = path.extend(dep);
                    debug!(edges = hit.edge_count(), "Recorded dependency path");
                    paths.push(hit);
                } else if visited.insert(dep.clone()) {
                    frontier.push(path.extend(dep));
                }
            }
        }

        info!(
            root,
            target,
            paths = paths.len(),
            expanded,
            "Finished collecting dependency paths"
        );
        Ok(paths)
    }
}
