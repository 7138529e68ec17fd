//! Error types and exit codes for citynav
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown vertex, unusable overlay or config file)
//!
//! Searches never fail through this type: an absent endpoint is reported by
//! the sentinel result of the search itself.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown vertex, unreadable config (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during citynav operations
#[derive(Error, Debug)]
pub enum CityNavError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown metric: {0} (expected: distance or time)")]
    UnknownMetric(String),

    #[error("unknown algorithm: {0} (expected: bfs or dfs)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("vertex not found: {key}")]
    VertexNotFound { key: String },

    #[error("overlay record not found: {what}")]
    RecordNotFound { what: String },

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("failed to persist overlay to {target}: {reason}")]
    Persist { target: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl CityNavError {
    /// Create an error for a failed overlay write
    pub fn persist(target: impl std::fmt::Display, error: impl std::fmt::Display) -> Self {
        CityNavError::Persist {
            target: target.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        CityNavError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a vertex key that is not in the graph
    pub fn vertex_not_found(key: impl Into<String>) -> Self {
        CityNavError::VertexNotFound { key: key.into() }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CityNavError::UnknownFormat(_)
            | CityNavError::UnknownMetric(_)
            | CityNavError::UnknownAlgorithm(_)
            | CityNavError::UsageError(_)
            | CityNavError::InvalidValue { .. } => ExitCode::Usage,

            CityNavError::VertexNotFound { .. }
            | CityNavError::RecordNotFound { .. }
            | CityNavError::InvalidConfig { .. } => ExitCode::Data,

            CityNavError::Persist { .. }
            | CityNavError::Io(_)
            | CityNavError::Json(_)
            | CityNavError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            CityNavError::UnknownFormat(_) => "unknown_format",
            CityNavError::UnknownMetric(_) => "unknown_metric",
            CityNavError::UnknownAlgorithm(_) => "unknown_algorithm",
            CityNavError::UsageError(_) => "usage_error",
            CityNavError::InvalidValue { .. } => "invalid_value",
            CityNavError::VertexNotFound { .. } => "vertex_not_found",
            CityNavError::RecordNotFound { .. } => "record_not_found",
            CityNavError::InvalidConfig { .. } => "invalid_config",
            CityNavError::Persist { .. } => "persist_failed",
            CityNavError::Io(_) => "io_error",
            CityNavError::Json(_) => "json_error",
            CityNavError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for citynav operations
pub type Result<T> = std::result::Result<T, CityNavError>;
