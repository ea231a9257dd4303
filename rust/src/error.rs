//! Error handling and result types for BPTree operations.

use thiserror::Error;

/// Error type for B+ tree operations.
///
/// A missing key is not an error: lookups return `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BPTreeError {
    /// Branching factor below the minimum the tree can split with.
    #[error("Invalid branching factor: {branching_factor} (minimum required: {minimum})")]
    InvalidBranchingFactor {
        branching_factor: usize,
        minimum: usize,
    },
    /// Comparator string other than `>=`, `==` or `<=`.
    #[error("Invalid comparator: {0:?}")]
    InvalidComparator(String),
    /// Tree corruption detected by invariant validation.
    #[error("Corrupted tree: {0}")]
    CorruptedTree(String),
}

impl BPTreeError {
    /// Create an InvalidBranchingFactor error with context
    pub fn invalid_branching_factor(branching_factor: usize, minimum: usize) -> Self {
        Self::InvalidBranchingFactor {
            branching_factor,
            minimum,
        }
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error is a branching factor error
    pub fn is_branching_factor_error(&self) -> bool {
        matches!(self, Self::InvalidBranchingFactor { .. })
    }
}

/// Public result type for tree operations that may fail
pub type BTreeResult<T> = Result<T, BPTreeError>;

/// Result type for tree construction
pub type InitResult<T> = Result<T, BPTreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BPTreeError::invalid_branching_factor(2, 3);
        assert_eq!(
            err.to_string(),
            "Invalid branching factor: 2 (minimum required: 3)"
        );
        assert!(err.is_branching_factor_error());

        let err = BPTreeError::InvalidComparator("!=".to_string());
        assert_eq!(err.to_string(), "Invalid comparator: \"!=\"");
        assert!(!err.is_branching_factor_error());
    }

    #[test]
    fn test_corrupted_tree_context() {
        let err = BPTreeError::corrupted_tree("Leaf chain", "prev link of leaf 3 is 0");
        assert_eq!(
            err.to_string(),
            "Corrupted tree: Leaf chain corruption: prev link of leaf 3 is 0"
        );
    }
}
