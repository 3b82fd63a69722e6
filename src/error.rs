//! Error types for MicroDSI
//!
//! Centralized error handling using thiserror. Ledger operations never fail;
//! these cover the edges: config, cache, export files and the HTTP layer.

use thiserror::Error;

/// All error types that can occur in MicroDSI
#[derive(Debug, Error)]
pub enum MicroDsiError {
    /// Track name outside the closed set
    #[error("Unknown track: {0} (expected itsm, hr or proc)")]
    UnknownTrack(String),

    /// Key/value cache error
    #[error("Store error: {0}")]
    Store(String),

    /// HTTP layer error
    #[error("Server error: {0}")]
    Server(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for MicroDSI operations
pub type Result<T> = std::result::Result<T, MicroDsiError>;
