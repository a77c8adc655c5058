//! Namespace filtering of raw dependency lists.

/// Keeps only dependencies inside the project's own namespace.
///
/// Matching is a plain string prefix test with no path-segment awareness:
/// the prefix `github.com/x/app` also keeps `github.com/x/application`. An
/// empty prefix keeps everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamespaceFilter {
    prefix: String,
}

impl NamespaceFilter {
    /// Create a filter for identifiers starting with `prefix`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// A filter that keeps every dependency.
    #[must_use]
    pub fn keep_all() -> Self {
        Self::default()
    }

    /// The namespace prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns `true` if `module` lies within the namespace.
    #[must_use]
    pub fn matches(&self, module: &str) -> bool {
        module.starts_with(&self.prefix)
    }

    /// Return the matching entries of `deps`, in their original order.
    #[must_use]
    pub fn apply(&self, deps: Vec<String>) -> Vec<String> {
        deps.into_iter().filter(|dep| self.matches(dep)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[rstest]
    #[case::mixed(&["fmt", "github.com/x/app/db", "os", "github.com/x/app/api"], &["github.com/x/app/db", "github.com/x/app/api"])]
    #[case::none_match(&["fmt", "os", "strings"], &[])]
    #[case::empty_input(&[], &[])]
    #[case::all_match(&["github.com/x/app/z", "github.com/x/app/a"], &["github.com/x/app/z", "github.com/x/app/a"])]
    #[case::plain_prefix(&["github.com/x/application"], &["github.com/x/application"])]
    fn apply_keeps_namespace_entries_in_order(#[case] input: &[&str], #[case] expected: &[&str]) {
        let filter = NamespaceFilter::new("github.com/x/app");

        assert_eq!(filter.apply(owned(input)), expected);
    }

    #[test]
    fn keep_all_keeps_everything() {
        let filter = NamespaceFilter::keep_all();

        assert_eq!(filter.apply(owned(&["b", "a", ""])), vec!["b", "a", ""]);
    }
}
