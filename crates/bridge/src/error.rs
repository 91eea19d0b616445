//! Codec error taxonomy.

use datastore::StoreError;
use thiserror::Error;

/// Errors raised while decoding a persisted endpoint record.
///
/// A decode error is fatal for the affected record only; it always names
/// the offending field so callers never see a bare type failure.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A required field is missing or has the wrong JSON shape.
    #[error("malformed endpoint record: field `{0}` is missing or has the wrong type")]
    MalformedRecord(&'static str),

    /// An optional field is present but its string form does not parse.
    #[error("failed to decode field `{field}` from `{value}`")]
    FieldDecode {
        field: &'static str,
        value: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The raw bytes are not a JSON object at all.
    #[error("invalid endpoint record encoding")]
    Json(#[from] serde_json::Error),
}

impl From<CodecError> for StoreError {
    fn from(err: CodecError) -> Self {
        StoreError::InvalidValue(Box::new(err))
    }
}
