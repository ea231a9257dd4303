//! In-memory B+ tree index with duplicate keys and comparator range search.
//!
//! A [`BPTree`] maps ordered keys to values. Every `insert` adds a new entry,
//! even when the key is already present, and range searches return the
//! values whose keys compare `>=`, `==` or `<=` against a search key.
//!
//! ```
//! use bptree::{BPTree, Comparator};
//!
//! let mut tree = BPTree::new(4).unwrap();
//! for (i, name) in ["ada", "bob", "cy", "dee", "eve"].iter().enumerate() {
//!     tree.insert(i as u32, *name);
//! }
//!
//! assert_eq!(tree.get(&2), Some(&"cy"));
//! assert_eq!(tree.range_search(&3, ">="), vec![&"dee", &"eve"]);
//! assert_eq!(tree.range_search_by(&1, Comparator::LessOrEqual), vec![&"ada", &"bob"]);
//! ```

mod compact_arena;
mod construction;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod range_queries;
mod tree_structure;
mod types;
mod validation;

pub use compact_arena::ArenaStats;
pub use construction::validation::{recommended_branching_factor, validate_branching_factor};
pub use construction::DEFAULT_BRANCHING_FACTOR;
pub use error::{BPTreeError, BTreeResult, InitResult};
pub use iteration::{ItemIterator, KeyIterator, ReverseItemIterator, ValueIterator};
pub use range_queries::Comparator;
pub use types::{BPTree, BranchNode, LeafNode, NodeId, NodeRef, MIN_BRANCHING_FACTOR, NULL_NODE};
