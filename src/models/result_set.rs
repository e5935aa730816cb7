//! Result Set Module
//!
//! Collection wrapper for definitions of a single element type.

use serde::{Deserialize, Serialize};

// == Result Set ==
/// A collection of definitions sharing one element type.
///
/// Unlike single definitions, result sets are stored as native in-memory
/// objects without encoding: the wrapper already carries its element type
/// statically, so there is no type-erasure problem to solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet<T> {
    items: Vec<T>,
}

impl<T> ResultSet<T> {
    // == Constructor ==
    /// Creates a result set from a vector of items.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Returns the items as a slice.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the result set, returning the items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the result set holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> From<Vec<T>> for ResultSet<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> IntoIterator for ResultSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_set_new() {
        let set = ResultSet::new(vec![1, 2, 3]);
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
        assert_eq!(set.items(), &[1, 2, 3]);
    }

    #[test]
    fn test_result_set_empty() {
        let set: ResultSet<String> = ResultSet::new(Vec::new());
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_result_set_into_iter() {
        let set = ResultSet::from(vec!["a", "b"]);
        let collected: Vec<&str> = set.into_iter().collect();
        assert_eq!(collected, vec!["a", "b"]);
    }
}
