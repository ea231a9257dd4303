//! Validation and debugging utilities for BPTree.
//!
//! Invariant checks used by the tests: node shape and fan-out, key order and
//! separator brackets, uniform leaf depth, and a leaf chain that links the
//! leaves in tree order in both directions.

use crate::error::{BPTreeError, BTreeResult};
use crate::types::{BPTree, NodeId, NodeRef, NULL_NODE};

/// State gathered during the recursive structure walk.
struct WalkState {
    leaf_depth: Option<usize>,
    leaves_in_order: Vec<NodeId>,
    entries: usize,
}

impl<K: Ord, V> BPTree<K, V> {
    /// Check if the tree maintains all B+ tree invariants.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants, reporting the first violation found.
    pub fn check_invariants_detailed(&self) -> BTreeResult<()> {
        let mut state = WalkState {
            leaf_depth: None,
            leaves_in_order: Vec::new(),
            entries: 0,
        };
        self.check_node(self.root, None, None, 1, &mut state)?;

        if state.entries != self.count {
            return Err(BPTreeError::corrupted_tree(
                "Entry count",
                &format!("{} entries in leaves but len() is {}", state.entries, self.count),
            ));
        }

        self.check_leaf_chain(&state.leaves_in_order)
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> BTreeResult<()> {
        self.check_invariants_detailed()
    }

    fn check_node(
        &self,
        node: NodeRef,
        lower: Option<&K>,
        upper: Option<&K>,
        depth: usize,
        state: &mut WalkState,
    ) -> BTreeResult<()> {
        match node {
            NodeRef::Leaf(id) => {
                let leaf = self.get_leaf(id).ok_or_else(|| {
                    BPTreeError::corrupted_tree("Leaf", &format!("leaf {} is not allocated", id))
                })?;

                if leaf.keys.len() != leaf.values.len() {
                    return Err(BPTreeError::corrupted_tree(
                        "Leaf",
                        &format!(
                            "leaf {} has {} keys but {} values",
                            id,
                            leaf.keys.len(),
                            leaf.values.len()
                        ),
                    ));
                }
                if leaf.len() > self.branching_factor {
                    return Err(BPTreeError::corrupted_tree(
                        "Leaf",
                        &format!(
                            "leaf {} holds {} entries (branching factor {})",
                            id,
                            leaf.len(),
                            self.branching_factor
                        ),
                    ));
                }
                if leaf.is_empty() && node != self.root {
                    return Err(BPTreeError::corrupted_tree(
                        "Leaf",
                        &format!("non-root leaf {} is empty", id),
                    ));
                }
                if leaf.keys.windows(2).any(|pair| pair[0] > pair[1]) {
                    return Err(BPTreeError::corrupted_tree(
                        "Leaf",
                        &format!("keys of leaf {} are out of order", id),
                    ));
                }
                let below = lower.is_some_and(|min| leaf.keys.iter().any(|key| key < min));
                let above = upper.is_some_and(|max| leaf.keys.iter().any(|key| key > max));
                if below || above {
                    return Err(BPTreeError::corrupted_tree(
                        "Leaf",
                        &format!("leaf {} has keys outside its separator bracket", id),
                    ));
                }

                match state.leaf_depth {
                    Some(expected) if expected != depth => {
                        return Err(BPTreeError::corrupted_tree(
                            "Leaf depth",
                            &format!("leaf {} at depth {}, expected {}", id, depth, expected),
                        ));
                    }
                    _ => state.leaf_depth = Some(depth),
                }

                state.leaves_in_order.push(id);
                state.entries += leaf.len();
                Ok(())
            }
            NodeRef::Branch(id) => {
                let branch = self.get_branch(id).ok_or_else(|| {
                    BPTreeError::corrupted_tree("Branch", &format!("branch {} is not allocated", id))
                })?;

                if branch.keys.len() + 1 != branch.children.len() {
                    return Err(BPTreeError::corrupted_tree(
                        "Branch",
                        &format!(
                            "branch {} has {} keys and {} children",
                            id,
                            branch.keys.len(),
                            branch.children.len()
                        ),
                    ));
                }
                if branch.children.len() < 2 || branch.children.len() > self.branching_factor {
                    return Err(BPTreeError::corrupted_tree(
                        "Branch",
                        &format!(
                            "branch {} has {} children (branching factor {})",
                            id,
                            branch.children.len(),
                            self.branching_factor
                        ),
                    ));
                }
                if branch.keys.windows(2).any(|pair| pair[0] > pair[1]) {
                    return Err(BPTreeError::corrupted_tree(
                        "Branch",
                        &format!("separators of branch {} are out of order", id),
                    ));
                }

                for (i, &child) in branch.children.iter().enumerate() {
                    let child_lower = if i == 0 { lower } else { Some(&branch.keys[i - 1]) };
                    let child_upper = branch.keys.get(i).or(upper);
                    self.check_node(child, child_lower, child_upper, depth + 1, state)?;
                }
                Ok(())
            }
        }
    }

    /// The chain must visit exactly the leaves in tree order, with every
    /// `prev` link mirroring the `next` link before it.
    fn check_leaf_chain(&self, leaves_in_order: &[NodeId]) -> BTreeResult<()> {
        let mut chain = Vec::with_capacity(leaves_in_order.len());
        let mut previous = NULL_NODE;
        let mut current = self.first_leaf_id();

        while current != NULL_NODE {
            if chain.len() > leaves_in_order.len() {
                return Err(BPTreeError::corrupted_tree(
                    "Leaf chain",
                    "chain is longer than the number of leaves",
                ));
            }
            let leaf = self.get_leaf(current).ok_or_else(|| {
                BPTreeError::corrupted_tree(
                    "Leaf chain",
                    &format!("link to unallocated leaf {}", current),
                )
            })?;
            if leaf.prev != previous {
                return Err(BPTreeError::corrupted_tree(
                    "Leaf chain",
                    &format!(
                        "prev link of leaf {} is {}, expected {}",
                        current, leaf.prev, previous
                    ),
                ));
            }
            chain.push(current);
            previous = current;
            current = leaf.next;
        }

        if chain != leaves_in_order {
            return Err(BPTreeError::corrupted_tree(
                "Leaf chain",
                &format!("tree has {:?}, linked list has {:?}", leaves_in_order, chain),
            ));
        }
        Ok(())
    }
}
