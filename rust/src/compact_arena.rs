//! Append-only node arena.
//!
//! Nodes are never removed from a BPTree, so the arena is a plain `Vec<T>`
//! indexed by `NodeId`: no free list and no allocation mask.

use std::ops::{Index, IndexMut};

use crate::types::{NodeId, NULL_NODE};

/// Statistics for a node arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaStats {
    pub allocated_count: usize,
    pub total_capacity: usize,
    pub utilization: f64,
}

/// Arena owning every node of one kind.
#[derive(Debug)]
pub struct NodeArena<T> {
    storage: Vec<T>,
}

impl<T> NodeArena<T> {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
        }
    }

    /// Store a node and return its ID.
    ///
    /// # Panics
    ///
    /// Panics when the arena already holds `NULL_NODE` nodes, since that ID
    /// is reserved for missing chain links.
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let id = NodeId::try_from(self.storage.len())
            .ok()
            .filter(|&id| id != NULL_NODE);
        match id {
            Some(id) => {
                self.storage.push(item);
                id
            }
            None => panic!("node arena exhausted: {} nodes", self.storage.len()),
        }
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        if id == NULL_NODE {
            return None;
        }
        self.storage.get(id as usize)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Get arena statistics
    pub fn stats(&self) -> ArenaStats {
        let allocated_count = self.storage.len();
        let total_capacity = self.storage.capacity();
        let utilization = if total_capacity > 0 {
            allocated_count as f64 / total_capacity as f64
        } else {
            0.0
        };

        ArenaStats {
            allocated_count,
            total_capacity,
            utilization,
        }
    }
}

/// Direct access for ids taken from the tree's own links. An unknown id is a
/// broken tree and panics like an out-of-bounds slice index.
impl<T> Index<NodeId> for NodeArena<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: NodeId) -> &T {
        &self.storage[id as usize]
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.storage[id as usize]
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        let mut arena = NodeArena::new();
        assert_eq!(arena.len(), 0);

        let id1 = arena.allocate("a");
        let id2 = arena.allocate("b");
        let id3 = arena.allocate("c");

        assert_eq!((id1, id2, id3), (0, 1, 2));
        assert_eq!(arena.get(id2), Some(&"b"));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_null_and_out_of_range_ids() {
        let mut arena = NodeArena::new();
        let id = arena.allocate(42);

        assert_eq!(arena.get(id), Some(&42));
        assert_eq!(arena.get(NULL_NODE), None);
        assert_eq!(arena.get(id + 1), None);
    }

    #[test]
    fn test_index_access() {
        let mut arena = NodeArena::new();
        let id = arena.allocate(10);
        arena[id] += 5;
        assert_eq!(arena[id], 15);
    }

    #[test]
    #[should_panic]
    fn test_index_null_node_panics() {
        let mut arena = NodeArena::new();
        arena.allocate(1);
        let _ = arena[NULL_NODE];
    }

    #[test]
    fn test_stats() {
        let mut arena = NodeArena::new();
        assert_eq!(arena.stats().utilization, 0.0);

        arena.allocate(1u8);
        arena.allocate(2u8);
        let stats = arena.stats();
        assert_eq!(stats.allocated_count, 2);
        assert!(stats.total_capacity >= 2);
        assert!(stats.utilization > 0.0 && stats.utilization <= 1.0);
    }
}
