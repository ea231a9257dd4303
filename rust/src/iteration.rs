//! Iterator implementations for BPTree.
//!
//! All iterators walk the leaf chain and never touch branch nodes.

use crate::types::{BPTree, LeafNode, NULL_NODE};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Iterator over key-value pairs in ascending key order.
pub struct ItemIterator<'a, K, V> {
    tree: &'a BPTree<K, V>,
    current_leaf: Option<&'a LeafNode<K, V>>,
    index: usize,
}

/// Iterator over key-value pairs in descending key order, following the
/// `prev` links from the tail leaf.
pub struct ReverseItemIterator<'a, K, V> {
    tree: &'a BPTree<K, V>,
    current_leaf: Option<&'a LeafNode<K, V>>,
    /// Entries of `current_leaf` not yet returned.
    remaining: usize,
}

/// Iterator over keys in the B+ tree.
pub struct KeyIterator<'a, K, V> {
    items: ItemIterator<'a, K, V>,
}

/// Iterator over values in the B+ tree.
pub struct ValueIterator<'a, K, V> {
    items: ItemIterator<'a, K, V>,
}

// ============================================================================
// BPTREE ITERATOR METHODS
// ============================================================================

impl<K, V> BPTree<K, V> {
    /// Returns an iterator over all key-value pairs in sorted order.
    pub fn items(&self) -> ItemIterator<'_, K, V> {
        ItemIterator {
            tree: self,
            current_leaf: Some(&self.leaf_arena[self.first_leaf_id()]),
            index: 0,
        }
    }

    /// Returns an iterator over all key-value pairs from the largest key down.
    pub fn items_rev(&self) -> ReverseItemIterator<'_, K, V> {
        let tail = &self.leaf_arena[self.last_leaf_id()];
        ReverseItemIterator {
            tree: self,
            current_leaf: Some(tail),
            remaining: tail.len(),
        }
    }

    /// Returns an iterator over all keys in sorted order.
    pub fn keys(&self) -> KeyIterator<'_, K, V> {
        KeyIterator {
            items: self.items(),
        }
    }

    /// Returns an iterator over all values in key order.
    pub fn values(&self) -> ValueIterator<'_, K, V> {
        ValueIterator {
            items: self.items(),
        }
    }

    /// Returns the entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.items().next()
    }

    /// Returns the entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.items_rev().next()
    }
}

// ============================================================================
// ITERATOR IMPLEMENTATIONS
// ============================================================================

impl<'a, K, V> Iterator for ItemIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let leaf = self.current_leaf?;
            if self.index < leaf.len() {
                let item = (&leaf.keys[self.index], &leaf.values[self.index]);
                self.index += 1;
                return Some(item);
            }
            // Leaves are never empty once the tree holds an entry, but the
            // loop also copes with the empty root leaf.
            let tree = self.tree;
            self.current_leaf = (leaf.next != NULL_NODE).then(|| &tree.leaf_arena[leaf.next]);
            self.index = 0;
        }
    }
}

impl<'a, K, V> Iterator for ReverseItemIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let leaf = self.current_leaf?;
            if self.remaining > 0 {
                self.remaining -= 1;
                return Some((&leaf.keys[self.remaining], &leaf.values[self.remaining]));
            }
            let tree = self.tree;
            self.current_leaf = (leaf.prev != NULL_NODE).then(|| &tree.leaf_arena[leaf.prev]);
            self.remaining = self.current_leaf.map_or(0, LeafNode::len);
        }
    }
}

impl<'a, K, V> Iterator for KeyIterator<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(k, _)| k)
    }
}

impl<'a, K, V> Iterator for ValueIterator<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(_, v)| v)
    }
}
