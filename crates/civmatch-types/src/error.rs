//! Error types for civmatch.
//!
//! All errors use the `CM_ERR_` prefix so they are easy to grep in logs.
//! Codes are grouped by subsystem:
//! - 1xx: matchmaking graph contract
//! - 9xx: general / configuration

use thiserror::Error;

/// Central error enum for all civmatch operations.
#[derive(Debug, Error)]
pub enum CivmatchError {
    // =================================================================
    // Graph Contract Errors (1xx)
    // =================================================================
    /// An edge referenced a source (offer) index the graph was not sized for.
    #[error("CM_ERR_100: Source index {index} out of range (graph has {count} sources)")]
    SourceIndexOutOfRange { index: usize, count: usize },

    /// An edge referenced a destination (request) index the graph was not sized for.
    #[error("CM_ERR_101: Destination index {index} out of range (graph has {count} destinations)")]
    DestIndexOutOfRange { index: usize, count: usize },

    /// Edges must carry a strictly positive weight.
    #[error("CM_ERR_102: Edge ({source_index}, {dest_index}) must have a positive weight")]
    NonPositiveWeight {
        source_index: usize,
        dest_index: usize,
    },

    /// Two marked edges share an endpoint.
    #[error("CM_ERR_103: Invalid matching: {reason}")]
    InvalidMatching { reason: String },

    // =================================================================
    // General (9xx)
    // =================================================================
    /// Configuration error (bad JSON, missing fields, invalid values).
    #[error("CM_ERR_900: Configuration error: {0}")]
    Configuration(String),

    /// Serialization / deserialization error.
    #[error("CM_ERR_901: Serialization error: {0}")]
    Serialization(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, CivmatchError>;

impl From<serde_json::Error> for CivmatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
