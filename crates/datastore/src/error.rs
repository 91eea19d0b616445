//! Store error taxonomy.

use thiserror::Error;

/// Errors surfaced by a [`DataStore`](crate::DataStore) or by the typed
/// helpers layered on top of one.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No key matched the request. For listing operations this is an
    /// expected outcome (a prefix may legitimately be empty), so callers
    /// usually translate it into an empty result rather than a failure.
    #[error("key not found in store")]
    NotFound,

    /// The store could not serve the request at all.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Optimistic-concurrency check failed: the caller's version index no
    /// longer matches the record in the store.
    #[error("stale version index {index} for key {key}")]
    StaleIndex { key: String, index: u64 },

    /// A stored blob could not be decoded back into its record type.
    #[error("failed to decode stored record")]
    InvalidValue(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A record refused to serialize itself.
    #[error("failed to encode record for key {0}")]
    InvalidRecord(String),
}
