//! Range query operations for BPTree.
//!
//! A range search compares every entry against one target key with one of
//! three comparators. The scan starts at the first leaf that can hold a
//! match and stops at the first key past the upper bound, so it returns the
//! same values, in the same order, as a walk over the whole leaf chain.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::BPTreeError;
use crate::types::{BPTree, NodeId, NULL_NODE};

/// Comparison applied between each stored key and the search key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// `>=`
    GreaterOrEqual,
    /// `==`
    Equal,
    /// `<=`
    LessOrEqual,
}

impl Comparator {
    /// The operator string this comparator parses from.
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::GreaterOrEqual => ">=",
            Comparator::Equal => "==",
            Comparator::LessOrEqual => "<=",
        }
    }

    /// Whether `key` satisfies this comparator against `target`.
    pub fn matches<K: Ord>(&self, key: &K, target: &K) -> bool {
        let ordering = key.cmp(target);
        match self {
            Comparator::GreaterOrEqual => ordering != Ordering::Less,
            Comparator::Equal => ordering == Ordering::Equal,
            Comparator::LessOrEqual => ordering != Ordering::Greater,
        }
    }
}

impl FromStr for Comparator {
    type Err = BPTreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">=" => Ok(Comparator::GreaterOrEqual),
            "==" => Ok(Comparator::Equal),
            "<=" => Ok(Comparator::LessOrEqual),
            other => Err(BPTreeError::InvalidComparator(other.to_string())),
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RANGE QUERY OPERATIONS
// ============================================================================

impl<K: Ord, V> BPTree<K, V> {
    /// Values of all entries whose key satisfies `comparator` against `key`.
    ///
    /// `comparator` is one of `">="`, `"=="` or `"<="`. Any other string
    /// matches nothing and returns an empty vector rather than an error.
    /// Values come back in ascending key order, with every duplicate
    /// included.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPTree;
    ///
    /// let mut tree = BPTree::new(3).unwrap();
    /// for key in [5, 10, 15, 20] {
    ///     tree.insert(key, key * 10);
    /// }
    ///
    /// assert_eq!(tree.range_search(&10, ">="), vec![&100, &150, &200]);
    /// assert_eq!(tree.range_search(&10, "<="), vec![&50, &100]);
    /// assert_eq!(tree.range_search(&10, "=="), vec![&100]);
    /// assert!(tree.range_search(&10, "!=").is_empty());
    /// ```
    pub fn range_search(&self, key: &K, comparator: &str) -> Vec<&V> {
        match comparator.parse::<Comparator>() {
            Ok(comparator) => self.range_search_by(key, comparator),
            Err(_) => Vec::new(),
        }
    }

    /// Typed form of [`range_search`](Self::range_search).
    pub fn range_search_by(&self, key: &K, comparator: Comparator) -> Vec<&V> {
        match comparator {
            Comparator::GreaterOrEqual => {
                let (leaf_id, index) = self.find_lower_bound(key);
                self.collect_values(leaf_id, index, None)
            }
            Comparator::Equal => {
                let (leaf_id, index) = self.find_lower_bound(key);
                self.collect_values(leaf_id, index, Some(key))
            }
            Comparator::LessOrEqual => self.collect_values(self.first_leaf_id(), 0, Some(key)),
        }
    }

    // ============================================================================
    // RANGE QUERY HELPERS
    // ============================================================================

    /// Position of the first entry whose key is not less than `key`.
    ///
    /// Routing sends a key equal to a separator right, but equal keys can
    /// also sit at the end of the leaves before it, so step back while the
    /// previous leaf still ends with a key that is not less than `key`.
    fn find_lower_bound(&self, key: &K) -> (NodeId, usize) {
        let mut leaf_id = self.find_leaf(key);
        loop {
            let prev = self.leaf_arena[leaf_id].prev;
            if prev == NULL_NODE {
                break;
            }
            match self.leaf_arena[prev].last_key() {
                Some(last) if last >= key => leaf_id = prev,
                _ => break,
            }
        }
        (leaf_id, self.leaf_arena[leaf_id].lower_bound(key))
    }

    /// Walk the chain from `(leaf_id, index)` collecting values until a key
    /// exceeds `upper`, or to the end of the chain when `upper` is `None`.
    fn collect_values(&self, mut leaf_id: NodeId, mut index: usize, upper: Option<&K>) -> Vec<&V> {
        let mut result = Vec::new();
        while leaf_id != NULL_NODE {
            let leaf = &self.leaf_arena[leaf_id];
            let end = upper.map_or(leaf.len(), |key| leaf.upper_bound(key));
            if index < end {
                result.extend(leaf.values[index..end].iter());
            }
            if end < leaf.len() {
                break;
            }
            leaf_id = leaf.next;
            index = 0;
        }
        result
    }
}
