//! Node implementations for BPTree.
//!
//! Node-local operations only: nodes do not know their own arena ids, so
//! anything touching the leaf chain or the parent is done by the tree.

use crate::types::{BranchNode, LeafNode, NodeRef};

// ============================================================================
// LEAF NODE IMPLEMENTATION
// ============================================================================

impl<K: Ord, V> LeafNode<K, V> {
    /// Get a value by key from this leaf node.
    ///
    /// With duplicate keys this is whichever equal entry the binary search
    /// lands on.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.keys
            .binary_search(key)
            .ok()
            .map(|index| &self.values[index])
    }

    /// Insert a key-value pair in key order.
    ///
    /// An entry whose key is already present goes in front of the equal
    /// entry the binary search found. The leaf may be left overflowing; the
    /// caller checks `is_overflow` and splits.
    pub fn insert(&mut self, key: K, value: V) {
        let index = self.keys.binary_search(&key).unwrap_or_else(|index| index);
        self.keys.insert(index, key);
        self.values.insert(index, value);
    }

    /// Index of the first key that is not less than `key`.
    pub fn lower_bound(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k < key)
    }

    /// Index one past the last key that is not greater than `key`.
    pub fn upper_bound(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k <= key)
    }
}

impl<K, V> LeafNode<K, V> {
    /// Returns the number of key-value pairs in this leaf.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if this leaf node is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns true if this leaf holds more entries than its capacity.
    pub fn is_overflow(&self) -> bool {
        self.values.len() > self.capacity
    }

    pub fn first_key(&self) -> Option<&K> {
        self.keys.first()
    }

    pub fn last_key(&self) -> Option<&K> {
        self.keys.last()
    }

    /// Get a reference to the keys in this leaf node.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Get a reference to the values in this leaf node.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Move the upper half of this leaf into a new right sibling.
    ///
    /// The left side keeps `(len + 1) / 2` entries. The sibling comes back
    /// unlinked; the tree splices it into the chain once it has an id.
    pub fn split(&mut self) -> LeafNode<K, V> {
        let from = (self.keys.len() + 1) / 2;
        let mut sibling = LeafNode::new(self.capacity);
        sibling.keys = self.keys.split_off(from);
        sibling.values = self.values.split_off(from);
        sibling
    }
}

// ============================================================================
// BRANCH NODE IMPLEMENTATION
// ============================================================================

impl<K: Ord> BranchNode<K> {
    /// Find the index of the child that should contain the given key.
    pub fn find_child_index(&self, key: &K) -> usize {
        match self.keys.binary_search(key) {
            Ok(index) => index + 1, // equal to a separator, go right
            Err(index) => index,
        }
    }

    /// Get the child node for a given key.
    pub fn get_child(&self, key: &K) -> Option<NodeRef> {
        self.children.get(self.find_child_index(key)).copied()
    }
}

impl<K> BranchNode<K> {
    /// Returns the number of separator keys in this branch node.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns true if this branch has more children than its capacity.
    pub fn is_overflow(&self) -> bool {
        self.children.len() > self.capacity
    }

    /// Link `child` directly to the right of `children[child_index]`, with
    /// `separator` between them.
    pub fn insert_child(&mut self, child_index: usize, separator: K, child: NodeRef) {
        self.keys.insert(child_index, separator);
        self.children.insert(child_index + 1, child);
    }

    /// Move the upper half of this branch into a new right sibling.
    ///
    /// With `start = keys.len() / 2 + 1` the sibling takes `keys[start..]`
    /// and `children[start..]`. The key at `start - 1` leaves both halves and
    /// is returned for the parent. It equals the sibling's first leaf key:
    /// a separator is always the first key of its right subtree when created,
    /// and later inserts into that subtree never sort below it.
    pub fn split(&mut self) -> (BranchNode<K>, K) {
        let start = self.keys.len() / 2 + 1;
        let mut sibling = BranchNode::new(self.capacity);
        sibling.children = self.children.split_off(start);
        let mut upper_keys = self.keys.split_off(start - 1);
        let promoted = upper_keys.remove(0);
        sibling.keys = upper_keys;
        (sibling, promoted)
    }
}
