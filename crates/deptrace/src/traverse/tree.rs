//! Tree-mode traversal: the full import tree below a root module.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;
use tracing::{debug, info};

use super::{Frontier, Visited, Walker};
use crate::error::Result;
use crate::source::DependencySource;

/// A module and the modules it imports, in discovery order.
///
/// Each child is owned by exactly one parent. A module reachable through
/// several parents appears once per parent, but only its first expanded
/// occurrence carries children; later occurrences are leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepTree {
    module: String,
    children: Vec<DepTree>,
}

impl DepTree {
    /// A childless node.
    #[must_use]
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            children: Vec::new(),
        }
    }

    /// The module at this node.
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Direct children, in discovery order.
    #[must_use]
    pub fn children(&self) -> &[DepTree] {
        &self.children
    }

    /// Append a child node.
    pub fn push_child(&mut self, child: DepTree) {
        self.children.push(child);
    }

    /// Total number of nodes, this one included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Number of levels below this node (0 for a leaf).
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children.iter().map(|c| (c, level + 1)));
        }
        deepest
    }

    /// Write the tree depth-first, one module per line, indenting each level
    /// by two spaces.
    pub fn render<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let mut stack = vec![(self, 0usize)];
        while let Some((node, level)) = stack.pop() {
            writeln!(w, "{:indent$}{}", "", node.module, indent = level * 2)?;
            stack.extend(node.children.iter().rev().map(|c| (c, level + 1)));
        }
        Ok(())
    }
}

impl fmt::Display for DepTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        self.render(&mut buf).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

/// Tree node under construction. Children are indices into the arena.
struct PendingNode {
    module: String,
    children: Vec<usize>,
}

impl<S: DependencySource> Walker<S> {
    /// Build the import tree below `root`.
    ///
    /// Nodes are expanded breadth-first. A node whose module was already
    /// expanded is left childless and not expanded again; there is no marker
    /// on such a node.
    ///
    /// # Errors
    ///
    /// [`Error::Fetch`](crate::Error::Fetch) if any expansion fails. No
    /// partial tree is returned.
    pub fn build_tree(&self, root: &str) -> Result<DepTree> {
        let mut arena = vec![PendingNode {
            module: root.to_string(),
            children: Vec::new(),
        }];
        let mut visited: Visited<String> = Visited::new();
        let mut frontier = Frontier::seeded(0usize);

        while let Some(index) = frontier.pop() {
            let module = arena[index].module.clone();
            if !visited.insert(module.clone()) {
                debug!(module = %module, "Skipping already expanded module");
                continue;
            }
            debug!(module = %module, pending = frontier.len(), "Expanding module");

            for dep in self.expand(&module)? {
                let child = arena.len();
                arena.push(PendingNode {
                    module: dep,
                    children: Vec::new(),
                });
                arena[index].children.push(child);
                frontier.push(child);
            }
        }

        info!(
            root,
            expanded = visited.len(),
            nodes = arena.len(),
            "Built dependency tree"
        );
        Ok(assemble(arena))
    }
}

/// Turn the arena into an owned tree.
///
/// Children are always pushed after their parent, so walking the arena
/// backwards finishes every subtree before its parent needs it.
fn assemble(arena: Vec<PendingNode>) -> DepTree {
    let mut built: Vec<Option<DepTree>> = Vec::with_capacity(arena.len());
    built.resize_with(arena.len(), || None);

    for (index, pending) in arena.into_iter().enumerate().rev() {
        let mut node = DepTree::new(pending.module);
        for child in pending.children {
            if let Some(subtree) = built[child].take() {
                node.push_child(subtree);
            }
        }
        built[index] = Some(node);
    }

    built
        .into_iter()
        .next()
        .flatten()
        .unwrap_or_else(|| DepTree::new(String::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DepTree {
        let mut b = DepTree::new("b");
        b.push_child(DepTree::new("d"));
        let mut c = DepTree::new("c");
        c.push_child(DepTree::new("d"));
        let mut a = DepTree::new("a");
        a.push_child(b);
        a.push_child(c);
        a
    }

    #[test]
    fn render_indents_two_spaces_per_level() {
        let mut out = Vec::new();
        sample().render(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "a\n  b\n    d\n  c\n    d\n");
    }

    #[test]
    fn display_matches_render() {
        assert_eq!(sample().to_string(), "a\n  b\n    d\n  c\n    d\n");
    }

    #[test]
    fn counts_nodes_and_depth() {
        let tree = sample();

        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.depth(), 2);
        assert_eq!(DepTree::new("leaf").depth(), 0);
    }

    #[test]
    fn assemble_keeps_child_order() {
        let arena = vec![
            PendingNode {
                module: "root".to_string(),
                children: vec![1, 2],
            },
            PendingNode {
                module: "first".to_string(),
                children: vec![3],
            },
            PendingNode {
                module: "second".to_string(),
                children: vec![],
            },
            PendingNode {
                module: "nested".to_string(),
                children: vec![],
            },
        ];

        let tree = assemble(arena);

        assert_eq!(tree.to_string(), "root\n  first\n    nested\n  second\n");
    }

    #[test]
    fn serializes_module_and_children() {
        let mut tree = DepTree::new("a");
        tree.push_child(DepTree::new("b"));

        assert_eq!(
            serde_json::to_string(&tree).unwrap(),
            r#"{"module":"a","children":[{"module":"b","children":[]}]}"#
        );
    }
}
