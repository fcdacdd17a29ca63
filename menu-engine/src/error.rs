//! Menu error types

use thiserror::Error;

/// Errors surfaced to the customer
///
/// Fetch and transform failures never appear here; the loader degrades them to
/// an empty menu instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// A required route parameter is absent or blank
    #[error("Invalid website or outlet ID: missing {0}")]
    MissingParameter(&'static str),
}

/// Result type for menu operations
pub type MenuResult<T> = Result<T, MenuError>;
