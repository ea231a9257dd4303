//! Core types and data structures for BPTree.
//!
//! This module contains the tree facade, both node kinds, the node reference
//! used for parent-to-child edges, and the constants shared by the other
//! modules.

use crate::compact_arena::NodeArena;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Smallest branching factor that can route and split sensibly.
pub const MIN_BRANCHING_FACTOR: usize = 3;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Node ID type for arena-based allocation
pub type NodeId = u32;

/// Marks a missing leaf chain link.
pub const NULL_NODE: NodeId = u32::MAX;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// In-memory B+ tree index.
///
/// Values live only in the leaves. Leaves are linked into a sorted doubly
/// linked chain, so range searches walk the chain instead of the tree.
/// Duplicate keys are allowed and stored as separate entries.
///
/// # Examples
///
/// ```
/// use bptree::BPTree;
///
/// let mut tree = BPTree::new(3).unwrap();
/// for key in [5, 10, 15, 20] {
///     tree.insert(key, key);
/// }
///
/// assert_eq!(tree.get(&15), Some(&15));
/// assert_eq!(tree.range_search(&10, ">="), vec![&10, &15, &20]);
/// assert_eq!(tree.range_search(&10, "<="), vec![&5, &10]);
/// assert_eq!(tree.len(), 4);
/// assert!(tree.height() > 1);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n)
/// - **Lookup**: O(log n)
/// - **Range search**: O(log n + k) where k is the number of entries scanned
/// - **Iteration**: O(n)
#[derive(Debug)]
pub struct BPTree<K, V> {
    /// Maximum entries per leaf and maximum children per branch.
    pub(crate) branching_factor: usize,
    /// The root node of the tree.
    pub(crate) root: NodeRef,
    /// Number of insert calls made so far.
    pub(crate) count: usize,
    /// Storage for leaf nodes.
    pub(crate) leaf_arena: NodeArena<LeafNode<K, V>>,
    /// Storage for branch nodes.
    pub(crate) branch_arena: NodeArena<BranchNode<K>>,
}

/// Leaf node containing key-value pairs.
#[derive(Debug, Clone)]
pub struct LeafNode<K, V> {
    /// Maximum number of entries this leaf may hold.
    pub(crate) capacity: usize,
    /// Keys in non-decreasing order. Duplicates are allowed.
    pub(crate) keys: Vec<K>,
    /// Values parallel to `keys`.
    pub(crate) values: Vec<V>,
    /// Previous leaf in the chain.
    pub(crate) prev: NodeId,
    /// Next leaf in the chain.
    pub(crate) next: NodeId,
}

/// Internal (branch) node containing separator keys and child references.
#[derive(Debug, Clone)]
pub struct BranchNode<K> {
    /// Maximum number of children this branch may hold.
    pub(crate) capacity: usize,
    /// Separator keys, one fewer than `children`.
    pub(crate) keys: Vec<K>,
    /// Child nodes (leaves or other branches).
    pub(crate) children: Vec<NodeRef>,
}

// ============================================================================
// ENUMS AND RESULT TYPES
// ============================================================================

/// Reference to a node in one of the two arenas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef {
    Leaf(NodeId),
    Branch(NodeId),
}

impl NodeRef {
    /// Return the raw node ID.
    pub fn id(&self) -> NodeId {
        match *self {
            NodeRef::Leaf(id) | NodeRef::Branch(id) => id,
        }
    }

    /// Returns true if this reference points to a leaf node.
    pub fn is_leaf(&self) -> bool {
        matches!(self, NodeRef::Leaf(_))
    }
}

/// Outcome of inserting into a subtree.
pub(crate) enum InsertResult<K> {
    /// The subtree absorbed the entry without overflowing.
    Fitted,
    /// The subtree root overflowed and was split. The caller must link
    /// `sibling` directly to the right of the node it descended into.
    Split { separator: K, sibling: NodeRef },
}
