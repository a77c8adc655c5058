//! # Deptrace: Import Graph Explorer
//!
//! Deptrace answers three questions about the import graph of a codebase:
//!
//! - What does this module pull in? ([`Walker::build_tree`])
//! - How does module A end up importing module B? ([`Walker::find_path`])
//! - Which routes lead from A to B? ([`Walker::find_all_paths`])
//!
//! The graph is never loaded up front. Each node's outgoing edges are pulled on
//! demand from a [`DependencySource`] (usually an external build-metadata
//! command such as `go list`) and narrowed to the project's own namespace by a
//! [`NamespaceFilter`] before the breadth-first walk continues.
//!
//! ## Quick Start
//!
//! ```
//! use deptrace::{NamespaceFilter, StaticSource, Walker};
//!
//! let source = StaticSource::from_edges([
//!     ("app/cmd", vec!["app/db", "fmt"]),
//!     ("app/db", vec![]),
//! ]);
//! let walker = Walker::new(source, NamespaceFilter::new("app/"));
//!
//! let path = walker.find_path("app/cmd", "app/db")?;
//! assert_eq!(path.modules(), ["app/cmd", "app/db"]);
//! # Ok::<(), deptrace::Error>(())
//! ```

pub mod config;
mod error;
mod filter;
pub mod source;
mod traverse;

pub use config::{DepsConfig, QueryConfig};
pub use error::{Error, Result};
pub use filter::NamespaceFilter;
pub use source::{CommandSource, DependencySource, FetchError, StaticSource, parse_imports};
pub use traverse::{DepTree, Frontier, ModulePath, Visited, Walker};
