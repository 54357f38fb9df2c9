//! Repository error taxonomy.

use thiserror::Error;

/// Errors surfaced by the repository facade.
///
/// Queries report absence as `None` or an empty list; `NotFound` exists for
/// callers that need absence as an error value (e.g., the CLI).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A lookup by id found nothing.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of record ("Item", "Category")
        kind: &'static str,
        /// Id that was looked up
        id: String,
    },

    /// Catch-all for unexpected internal failures.
    #[error("{0}")]
    OperationFailed(String),
}

impl RepositoryError {
    /// Creates a `NotFound` error for an item id.
    pub fn item_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "Item",
            id: id.into(),
        }
    }

    /// Creates a `NotFound` error for a category id.
    pub fn category_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "Category",
            id: id.into(),
        }
    }
}

/// Result type for repository calls.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
