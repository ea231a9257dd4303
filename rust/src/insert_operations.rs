//! INSERT operations for BPTree.
//!
//! This module contains key-value insertion, node splitting, leaf chain
//! splicing and root promotion.

use crate::types::{BPTree, BranchNode, InsertResult, NodeId, NodeRef, NULL_NODE};

impl<K: Ord + Clone, V> BPTree<K, V> {
    /// Insert a key-value pair.
    ///
    /// Duplicate keys are kept as separate entries; an existing entry is
    /// never replaced. Every call grows `len()` by one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPTree;
    ///
    /// let mut tree = BPTree::new(3).unwrap();
    /// tree.insert(7, "a");
    /// tree.insert(7, "b");
    /// tree.insert(7, "c");
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.range_search(&7, "==").len(), 3);
    /// ```
    pub fn insert(&mut self, key: K, value: V) {
        let root = self.root;
        if let InsertResult::Split { separator, sibling } = self.insert_recursive(root, key, value)
        {
            self.new_root(root, separator, sibling);
        }
        self.count += 1;
    }

    // ============================================================================
    // HELPERS FOR INSERT OPERATIONS
    // ============================================================================

    /// Replace the root with a branch over the old root and its new sibling.
    fn new_root(&mut self, old_root: NodeRef, separator: K, sibling: NodeRef) {
        let mut root = BranchNode::new(self.branching_factor);
        root.keys.push(separator);
        root.children.push(old_root);
        root.children.push(sibling);

        let root_id = self.branch_arena.allocate(root);
        self.root = NodeRef::Branch(root_id);

        tracing::debug!(root_id, height = self.height(), "promoted new root");
    }

    fn insert_recursive(&mut self, node: NodeRef, key: K, value: V) -> InsertResult<K> {
        match node {
            NodeRef::Leaf(id) => self.insert_into_leaf(id, key, value),
            NodeRef::Branch(id) => self.insert_into_branch(id, key, value),
        }
    }

    fn insert_into_leaf(&mut self, leaf_id: NodeId, key: K, value: V) -> InsertResult<K> {
        let leaf = &mut self.leaf_arena[leaf_id];
        leaf.insert(key, value);
        if !leaf.is_overflow() {
            return InsertResult::Fitted;
        }

        let sibling = leaf.split();
        let separator = sibling.keys[0].clone();
        let (left_len, right_len) = (leaf.len(), sibling.len());

        let sibling_id = self.leaf_arena.allocate(sibling);
        self.link_leaf_after(leaf_id, sibling_id);

        tracing::trace!(leaf_id, sibling_id, left_len, right_len, "split leaf");

        InsertResult::Split {
            separator,
            sibling: NodeRef::Leaf(sibling_id),
        }
    }

    fn insert_into_branch(&mut self, branch_id: NodeId, key: K, value: V) -> InsertResult<K> {
        let branch = &self.branch_arena[branch_id];
        let child_index = branch.find_child_index(&key);
        let child = branch.children[child_index];

        let (separator, new_child) = match self.insert_recursive(child, key, value) {
            InsertResult::Fitted => return InsertResult::Fitted,
            InsertResult::Split { separator, sibling } => (separator, sibling),
        };

        let branch = &mut self.branch_arena[branch_id];
        branch.insert_child(child_index, separator, new_child);
        if !branch.is_overflow() {
            return InsertResult::Fitted;
        }

        let (sibling, separator) = branch.split();
        let (left_children, right_children) = (branch.children.len(), sibling.children.len());

        let sibling_id = self.branch_arena.allocate(sibling);

        tracing::trace!(
            branch_id,
            sibling_id,
            left_children,
            right_children,
            "split branch"
        );

        InsertResult::Split {
            separator,
            sibling: NodeRef::Branch(sibling_id),
        }
    }

    /// Splice `new_id` into the leaf chain directly after `leaf_id`.
    fn link_leaf_after(&mut self, leaf_id: NodeId, new_id: NodeId) {
        let old_next = self.leaf_arena[leaf_id].next;

        let new_leaf = &mut self.leaf_arena[new_id];
        new_leaf.prev = leaf_id;
        new_leaf.next = old_next;

        self.leaf_arena[leaf_id].next = new_id;
        if old_next != NULL_NODE {
            self.leaf_arena[old_next].prev = new_id;
        }
    }
}
