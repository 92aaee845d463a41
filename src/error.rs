//! Error types for the search library.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while aggregating search results.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The search term was empty or missing.
    #[error("search term must not be empty")]
    EmptyTerm,

    /// A downstream entity lookup failed.
    ///
    /// The aggregator does not recover from these; the whole call aborts.
    #[error("{entity} lookup failed: {message}")]
    Lookup {
        /// Which entity service failed (e.g. "products").
        entity: &'static str,
        /// Backend-specific failure description.
        message: String,
    },

    /// The aggregator was built without one of its entity services.
    #[error("search backend is missing a {0} service")]
    MissingService(&'static str),
}

impl SearchError {
    /// Convenience constructor for downstream lookup failures.
    pub fn lookup(entity: &'static str, message: impl Into<String>) -> Self {
        Self::Lookup {
            entity,
            message: message.into(),
        }
    }
}
