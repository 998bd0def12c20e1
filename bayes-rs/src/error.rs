//! Error types for bayes-rs

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for filter operations
pub type Result<T> = std::result::Result<T, BayesError>;

/// Filter error types
#[derive(Error, Debug)]
pub enum BayesError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A document collection or one of its documents could not be read
    #[error("Cannot read collection {}: {source}", path.display())]
    Collection {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Word scored before the vocabularies were balanced
    #[error("Word '{0}' is missing from one vocabulary; balance before scoring")]
    UnbalancedVocabulary(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
