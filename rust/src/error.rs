//! Error handling and result types for BTree operations.
//!
//! Only configuration problems and the height bound are reported as errors.
//! Contract violations inside the algorithm (searching an empty node,
//! splitting a child that has not overflowed) are panics.

/// Error type for B-tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BTreeError {
    /// Branching factor below the supported minimum.
    InvalidFactor(String),
    /// Height bound that can hold no tree at all.
    InvalidHeightLimit(String),
    /// Insertion would grow the tree past the configured height bound.
    HeightLimitExceeded(String),
    /// Structural invariant violated.
    CorruptedTree(String),
    /// Bookkeeping disagrees with the node graph.
    DataIntegrityError(String),
}

impl BTreeError {
    /// Create an InvalidFactor error with context
    pub fn invalid_factor(factor: usize, min_required: usize) -> Self {
        Self::InvalidFactor(format!(
            "Factor {} is invalid (minimum required: {})",
            factor, min_required
        ))
    }

    /// Create an InvalidHeightLimit error with context
    pub fn invalid_height_limit(max_height: usize) -> Self {
        Self::InvalidHeightLimit(format!(
            "Height limit {} is invalid (must be at least 1)",
            max_height
        ))
    }

    /// Create a HeightLimitExceeded error with context
    pub fn height_limit_exceeded(height: usize, max_height: usize) -> Self {
        Self::HeightLimitExceeded(format!(
            "Tree of height {} cannot grow past limit {}",
            height, max_height
        ))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Check if this error came from an invalid configuration
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidFactor(_) | Self::InvalidHeightLimit(_))
    }
}

impl std::fmt::Display for BTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BTreeError::InvalidFactor(msg) => write!(f, "Invalid factor: {}", msg),
            BTreeError::InvalidHeightLimit(msg) => write!(f, "Invalid height limit: {}", msg),
            BTreeError::HeightLimitExceeded(msg) => write!(f, "Height limit exceeded: {}", msg),
            BTreeError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
            BTreeError::DataIntegrityError(msg) => write!(f, "Data integrity error: {}", msg),
        }
    }
}

impl std::error::Error for BTreeError {}

/// Public result type for tree operations that may fail
pub type BTreeResult<T> = Result<T, BTreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, BTreeError>;

/// Result type for tree construction and validation
pub type InitResult<T> = Result<T, BTreeError>;
