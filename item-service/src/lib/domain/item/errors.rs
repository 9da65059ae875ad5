use thiserror::Error;

/// Error for ItemId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemIdError {
    #[error("must be a valid UUID")]
    InvalidFormat(String),
}

/// Error for ItemName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemNameError {
    #[error("must not be blank")]
    Blank,

    #[error("size must be at most {max} characters")]
    TooLong { max: usize, actual: usize },
}

/// Error for Description validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DescriptionError {
    #[error("size must be at most {max} characters")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all item-related operations
#[derive(Debug, Clone, Error)]
pub enum ItemError {
    #[error("Invalid item ID: {0}")]
    InvalidItemId(#[from] ItemIdError),

    #[error("Invalid item name: {0}")]
    InvalidName(#[from] ItemNameError),

    #[error("Invalid description: {0}")]
    InvalidDescription(#[from] DescriptionError),

    /// Missing, or owned by someone else. The two are not distinguished.
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
