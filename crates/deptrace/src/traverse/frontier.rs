//! Queue and set primitives shared by the traversal modes.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// FIFO queue of pending work. Items come out in the order they went in,
/// which is what makes the traversal breadth-first.
#[derive(Debug, Clone)]
pub struct Frontier<T> {
    items: VecDeque<T>,
}

impl<T> Frontier<T> {
    /// Create an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Create a frontier holding a single item.
    #[must_use]
    pub fn seeded(item: T) -> Self {
        let mut frontier = Self::new();
        frontier.push(item);
        frontier
    }

    /// Append an item at the back.
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the item at the front.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Number of pending items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Grow-only membership set. Nothing is ever removed.
#[derive(Debug, Clone)]
pub struct Visited<T> {
    seen: HashSet<T>,
}

impl<T: Eq + Hash> Visited<T> {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    /// Record `item`. Returns `true` if it was not present before.
    pub fn insert(&mut self, item: T) -> bool {
        self.seen.insert(item)
    }

    /// Returns `true` if `item` has been recorded.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.seen.contains(item)
    }

    /// Number of recorded items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl<T: Eq + Hash> Default for Visited<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontier_is_first_in_first_out() {
        let mut frontier = Frontier::seeded(1);
        frontier.push(2);
        frontier.push(3);

        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.pop(), Some(1));
        frontier.push(4);
        assert_eq!(frontier.pop(), Some(2));
        assert_eq!(frontier.pop(), Some(3));
        assert_eq!(frontier.pop(), Some(4));
        assert_eq!(frontier.pop(), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn visited_reports_first_insert_only() {
        let mut visited: Visited<String> = Visited::new();

        assert!(visited.insert("a".to_string()));
        assert!(!visited.insert("a".to_string()));
        assert!(visited.contains("a"));
        assert!(!visited.contains("b"));
        assert_eq!(visited.len(), 1);
    }
}
