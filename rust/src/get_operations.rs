//! GET operations for BPTree.
//!
//! This module contains exact-match lookup and the node access helpers the
//! other read paths share.

use crate::types::{BPTree, BranchNode, LeafNode, NodeId, NodeRef};

impl<K: Ord, V> BPTree<K, V> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Get a reference to the value associated with a key.
    ///
    /// Returns `None` when the key is absent. When the key was inserted more
    /// than once, the result is one of its values, whichever the binary
    /// search locates; it is not necessarily the first one inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPTree;
    ///
    /// let mut tree = BPTree::new(4).unwrap();
    /// tree.insert(1, "one");
    /// assert_eq!(tree.get(&1), Some(&"one"));
    /// assert_eq!(tree.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let leaf_id = self.find_leaf(key);
        self.leaf_arena[leaf_id].get(key)
    }

    /// Check if key exists in the tree.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    // ============================================================================
    // HELPERS
    // ============================================================================

    /// Descend from the root to the leaf the routing rule picks for `key`.
    pub(crate) fn find_leaf(&self, key: &K) -> NodeId {
        let mut current = self.root;
        loop {
            match current {
                NodeRef::Leaf(id) => return id,
                NodeRef::Branch(id) => {
                    let branch = &self.branch_arena[id];
                    current = branch.children[branch.find_child_index(key)];
                }
            }
        }
    }
}

impl<K, V> BPTree<K, V> {
    /// Smallest key in the tree, found by following first children down to
    /// the leftmost leaf. `None` for an empty tree.
    pub fn first_leaf_key(&self) -> Option<&K> {
        self.leaf_arena[self.first_leaf_id()].first_key()
    }

    /// Leftmost leaf, the head of the leaf chain.
    pub(crate) fn first_leaf_id(&self) -> NodeId {
        self.edge_leaf_id(|branch| branch.children[0])
    }

    /// Rightmost leaf, the tail of the leaf chain.
    pub(crate) fn last_leaf_id(&self) -> NodeId {
        self.edge_leaf_id(|branch| branch.children[branch.children.len() - 1])
    }

    fn edge_leaf_id(&self, pick: impl Fn(&BranchNode<K>) -> NodeRef) -> NodeId {
        let mut current = self.root;
        loop {
            match current {
                NodeRef::Leaf(id) => return id,
                NodeRef::Branch(id) => current = pick(&self.branch_arena[id]),
            }
        }
    }

    /// Get a leaf node by id, if allocated.
    pub fn get_leaf(&self, id: NodeId) -> Option<&LeafNode<K, V>> {
        self.leaf_arena.get(id)
    }

    /// Get a branch node by id, if allocated.
    pub fn get_branch(&self, id: NodeId) -> Option<&BranchNode<K>> {
        self.branch_arena.get(id)
    }
}
