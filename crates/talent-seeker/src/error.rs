//! Error types for the talent-seeker crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when building queries.
#[derive(Debug, Error)]
pub enum SeekerError {
    /// Sort key is not one of the known orderings.
    #[error("unknown sort key '{0}' (expected one of: featured, rating, rate_low, rate_high, newest)")]
    UnknownSortKey(String),
}

/// Errors raised by a [`RecordSource`](crate::RecordSource).
///
/// These never reach the engine: [`SearchSession`](crate::SearchSession)
/// turns a failed fetch into an empty collection.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The record file could not be read.
    #[error("failed to read records from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload was not a record list.
    #[error("failed to decode records: {0}")]
    Decode(#[from] serde_json::Error),

    /// The source could not serve the request.
    #[error("record source unavailable: {0}")]
    Unavailable(String),
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
