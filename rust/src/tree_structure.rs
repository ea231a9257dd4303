//! Tree structure queries for BPTree.
//!
//! Size, shape and node statistics, plus the level-order `Display` dump used
//! when debugging.

use std::fmt;

use crate::compact_arena::ArenaStats;
use crate::types::{BPTree, NodeRef};

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl<K, V> BPTree<K, V> {
    /// Returns the number of entries, which is the number of `insert` calls.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Maximum entries per leaf and children per branch.
    pub fn branching_factor(&self) -> usize {
        self.branching_factor
    }

    /// Returns true if the root is a leaf node.
    pub fn is_leaf_root(&self) -> bool {
        self.root.is_leaf()
    }

    /// Number of levels, counting the leaf level. A leaf root has height 1.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut current = self.root;
        while let NodeRef::Branch(id) = current {
            current = self.branch_arena[id].children[0];
            height += 1;
        }
        height
    }

    /// Returns the number of leaf nodes in the tree.
    pub fn leaf_count(&self) -> usize {
        // Every allocated leaf stays in the tree: nothing is ever removed
        self.leaf_arena.len()
    }

    /// Returns the sizes of all leaves in chain order (for testing/debugging).
    pub fn leaf_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::new();
        self.collect_leaf_sizes(self.root, &mut sizes);
        sizes
    }

    fn collect_leaf_sizes(&self, node: NodeRef, sizes: &mut Vec<usize>) {
        match node {
            NodeRef::Leaf(id) => sizes.push(self.leaf_arena[id].len()),
            NodeRef::Branch(id) => {
                for &child in &self.branch_arena[id].children {
                    self.collect_leaf_sizes(child, sizes);
                }
            }
        }
    }

    /// Count the (leaf, branch) nodes reachable from the root.
    pub fn count_nodes_in_tree(&self) -> (usize, usize) {
        self.count_nodes_recursive(self.root)
    }

    fn count_nodes_recursive(&self, node: NodeRef) -> (usize, usize) {
        match node {
            NodeRef::Leaf(_) => (1, 0),
            NodeRef::Branch(id) => self.branch_arena[id]
                .children
                .iter()
                .map(|&child| self.count_nodes_recursive(child))
                .fold((0, 1), |(leaves, branches), (l, b)| (leaves + l, branches + b)),
        }
    }

    /// Get statistics for the leaf node arena.
    pub fn leaf_arena_stats(&self) -> ArenaStats {
        self.leaf_arena.stats()
    }

    /// Get statistics for the branch node arena.
    pub fn branch_arena_stats(&self) -> ArenaStats {
        self.branch_arena.stats()
    }
}

/// Level-order dump: one line per level. Children of one parent are wrapped
/// in braces and each node prints its key list, e.g.
///
/// ```text
/// {[15]}
/// {[5, 10], [15, 20]}
/// ```
impl<K: fmt::Debug, V> fmt::Display for BPTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut level: Vec<Vec<NodeRef>> = vec![vec![self.root]];
        while !level.is_empty() {
            let mut next_level = Vec::new();
            for (group_index, group) in level.iter().enumerate() {
                if group_index > 0 {
                    f.write_str(", ")?;
                }
                f.write_str("{")?;
                for (node_index, &node) in group.iter().enumerate() {
                    if node_index > 0 {
                        f.write_str(", ")?;
                    }
                    match node {
                        NodeRef::Leaf(id) => write!(f, "{:?}", self.leaf_arena[id].keys)?,
                        NodeRef::Branch(id) => {
                            let branch = &self.branch_arena[id];
                            write!(f, "{:?}", branch.keys)?;
                            next_level.push(branch.children.clone());
                        }
                    }
                }
                f.write_str("}")?;
            }
            f.write_str("\n")?;
            level = next_level;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_counts_every_insert() {
        let mut tree = BPTree::new(3).unwrap();
        assert!(tree.is_empty());
        for i in 0..10 {
            tree.insert(i % 3, i);
            assert_eq!(tree.len(), i as usize + 1);
        }
        assert!(!tree.is_empty());
    }

    #[test]
    fn test_shape_queries() {
        let mut tree = BPTree::new(3).unwrap();
        assert_eq!(tree.height(), 1);
        assert!(tree.is_leaf_root());
        assert_eq!(tree.branching_factor(), 3);

        for i in 0..30 {
            tree.insert(i, i);
        }
        assert!(!tree.is_leaf_root());
        assert_eq!(tree.leaf_sizes().iter().sum::<usize>(), 30);
        assert_eq!(tree.leaf_sizes().len(), tree.leaf_count());

        let (leaves, branches) = tree.count_nodes_in_tree();
        assert_eq!(leaves, tree.leaf_arena_stats().allocated_count);
        assert_eq!(branches, tree.branch_arena_stats().allocated_count);
    }

    #[test]
    fn test_display_empty_tree() {
        let tree = BPTree::<i32, i32>::new(3).unwrap();
        assert_eq!(tree.to_string(), "{[]}\n");
    }

    #[test]
    fn test_display_two_levels() {
        let mut tree = BPTree::new(3).unwrap();
        for key in [5, 10, 15, 20] {
            tree.insert(key, key);
        }
        assert_eq!(tree.to_string(), "{[15]}\n{[5, 10], [15, 20]}\n");
    }

    #[test]
    fn test_display_groups_by_parent() {
        let mut tree = BPTree::new(3).unwrap();
        for key in 1..=7 {
            tree.insert(key, ());
        }
        let dump = tree.to_string();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), tree.height());
        assert_eq!(lines[0].matches('{').count(), 1);
        // One brace group per branch on the level above
        let (_, branches) = tree.count_nodes_in_tree();
        let groups: usize = lines[1..].iter().map(|line| line.matches('{').count()).sum();
        assert_eq!(groups, branches);
    }
}
