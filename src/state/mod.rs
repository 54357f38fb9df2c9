//! Screen state holders.
//!
//! Each holder owns a handle to a
//! [`BuildingRepository`](crate::repository::BuildingRepository), exposes its state
//! through [`Observable`] values, and moves through a small state machine
//! as it loads. Holders never share state with each other; the repository
//! is the only common dependency.

pub mod browse;
pub mod category;
pub mod detail;
pub mod home;
pub mod observable;
pub mod search;

pub use browse::{BrowseState, SortOrder};
pub use category::CategoryState;
pub use detail::DetailState;
pub use home::HomeState;
pub use observable::Observable;
pub use search::{SearchState, SearchStatus};

use serde::Serialize;

use crate::repository::RepositoryError;

/// Load lifecycle shared by the list and detail screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum LoadState {
    /// A fetch is in flight
    Loading,
    /// Data is available
    Success,
    /// The fetch succeeded but returned nothing to show
    Empty,
    /// The fetch failed
    Error(String),
}

impl LoadState {
    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The error message, if this is an error state.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Turns a repository failure into a user-facing message.
///
/// Falls back to `fallback` when the error carries no text.
pub(crate) fn failure_message(err: &RepositoryError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message() {
        let err = RepositoryError::OperationFailed("Catalog unavailable".to_string());
        assert_eq!(failure_message(&err, "fallback"), "Catalog unavailable");

        let blank = RepositoryError::OperationFailed("  ".to_string());
        assert_eq!(failure_message(&blank, "fallback"), "fallback");
    }

    #[test]
    fn test_load_state_serializes_with_tag() {
        let json = serde_json::to_string(&LoadState::Error("boom".to_string())).unwrap();
        assert_eq!(json, r#"{"state":"error","message":"boom"}"#);

        let json = serde_json::to_string(&LoadState::Empty).unwrap();
        assert_eq!(json, r#"{"state":"empty"}"#);
    }

    #[test]
    fn test_load_state_helpers() {
        assert!(LoadState::Loading.is_loading());
        assert_eq!(LoadState::Error("x".to_string()).error_message(), Some("x"));
        assert_eq!(LoadState::Success.error_message(), None);
    }
}
