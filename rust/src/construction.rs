//! Construction and initialization logic for BPTree and nodes.
//!
//! This module contains branching factor validation, arena setup and the
//! default implementations.

use crate::compact_arena::NodeArena;
use crate::error::{BPTreeError, BTreeResult, InitResult};
use crate::types::{BPTree, BranchNode, LeafNode, NodeRef, MIN_BRANCHING_FACTOR, NULL_NODE};

/// Default branching factor for B+ tree nodes
pub const DEFAULT_BRANCHING_FACTOR: usize = 16;

impl<K, V> BPTree<K, V> {
    /// Create a B+ tree with the given branching factor.
    ///
    /// The branching factor bounds both the number of entries a leaf may
    /// hold and the number of children a branch may hold.
    ///
    /// # Errors
    ///
    /// Returns `BPTreeError::InvalidBranchingFactor` when `branching_factor`
    /// is 2 or less.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPTree;
    ///
    /// let tree = BPTree::<i32, String>::new(3).unwrap();
    /// assert!(tree.is_empty());
    /// assert!(BPTree::<i32, String>::new(2).is_err());
    /// ```
    pub fn new(branching_factor: usize) -> InitResult<Self> {
        validation::validate_branching_factor(branching_factor)?;
        tracing::debug!(branching_factor, "created B+ tree");
        Ok(Self::with_empty_root(branching_factor))
    }

    /// Create a B+ tree with `DEFAULT_BRANCHING_FACTOR`.
    pub fn with_default_branching_factor() -> InitResult<Self> {
        Self::new(DEFAULT_BRANCHING_FACTOR)
    }

    /// Builds the tree around an empty root leaf. The branching factor must
    /// already be validated.
    fn with_empty_root(branching_factor: usize) -> Self {
        let mut leaf_arena = NodeArena::new();
        let root_id = leaf_arena.allocate(LeafNode::new(branching_factor));

        Self {
            branching_factor,
            root: NodeRef::Leaf(root_id),
            count: 0,
            leaf_arena,
            branch_arena: NodeArena::new(),
        }
    }
}

impl<K, V> LeafNode<K, V> {
    /// Creates an unlinked, empty leaf.
    pub fn new(capacity: usize) -> Self {
        // One extra slot for the entry that triggers a split
        Self {
            capacity,
            keys: Vec::with_capacity(capacity + 1),
            values: Vec::with_capacity(capacity + 1),
            prev: NULL_NODE,
            next: NULL_NODE,
        }
    }
}

impl<K> BranchNode<K> {
    /// Creates an empty branch node.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            keys: Vec::with_capacity(capacity),
            children: Vec::with_capacity(capacity + 1),
        }
    }
}

impl<K, V> Default for BPTree<K, V> {
    /// Create a B+ tree with the default branching factor.
    fn default() -> Self {
        Self::with_empty_root(DEFAULT_BRANCHING_FACTOR)
    }
}

/// Validation utilities for construction
pub mod validation {
    use super::*;

    /// Validate that a branching factor can be used to build a tree.
    pub fn validate_branching_factor(branching_factor: usize) -> BTreeResult<()> {
        if branching_factor < MIN_BRANCHING_FACTOR {
            Err(BPTreeError::invalid_branching_factor(
                branching_factor,
                MIN_BRANCHING_FACTOR,
            ))
        } else {
            Ok(())
        }
    }

    /// Suggest a branching factor for the expected number of entries.
    pub fn recommended_branching_factor(expected_entries: usize) -> usize {
        if expected_entries < 100 {
            4
        } else if expected_entries < 10_000 {
            DEFAULT_BRANCHING_FACTOR
        } else if expected_entries < 1_000_000 {
            32
        } else {
            64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_construction() {
        let tree = BPTree::<i32, String>::new(3).unwrap();
        assert_eq!(tree.branching_factor, 3);
        assert_eq!(tree.count, 0);
        assert_eq!(tree.root, NodeRef::Leaf(0));
        assert_eq!(tree.leaf_arena.len(), 1);
        assert_eq!(tree.branch_arena.len(), 0);
    }

    #[test]
    fn test_invalid_branching_factor() {
        for bad in [0, 1, 2] {
            let err = BPTree::<i32, String>::new(bad).unwrap_err();
            assert_eq!(err, BPTreeError::invalid_branching_factor(bad, 3));
        }
    }

    #[test]
    fn test_default_matches_with_default_branching_factor() {
        let default_tree = BPTree::<i32, i32>::default();
        let explicit = BPTree::<i32, i32>::with_default_branching_factor().unwrap();
        assert_eq!(default_tree.branching_factor, explicit.branching_factor);
        assert_eq!(default_tree.root, explicit.root);
        assert_eq!(default_tree.leaf_arena.len(), explicit.leaf_arena.len());
    }

    #[test]
    fn test_leaf_construction() {
        let leaf = LeafNode::<i32, String>::new(4);
        assert_eq!(leaf.capacity, 4);
        assert!(leaf.keys.is_empty());
        assert_eq!(leaf.prev, NULL_NODE);
        assert_eq!(leaf.next, NULL_NODE);
    }

    #[test]
    fn test_branch_construction() {
        let branch = BranchNode::<i32>::new(4);
        assert_eq!(branch.capacity, 4);
        assert!(branch.keys.is_empty());
        assert!(branch.children.is_empty());
    }

    #[test]
    fn test_validation() {
        assert!(validation::validate_branching_factor(16).is_ok());
        assert!(validation::validate_branching_factor(3).is_ok());
        assert!(validation::validate_branching_factor(2).is_err());
    }

    #[test]
    fn test_recommended_branching_factor() {
        assert_eq!(validation::recommended_branching_factor(50), 4);
        assert_eq!(validation::recommended_branching_factor(5000), 16);
        assert_eq!(validation::recommended_branching_factor(500_000), 32);
        assert_eq!(validation::recommended_branching_factor(5_000_000), 64);
    }
}
