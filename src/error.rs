// src/error.rs
//! Error types for payload emission and for the assembling application.
//!
//! `EmitError` is the whole failure vocabulary of the content-unit model.
//! `AppError` wraps it together with the IO and parsing failures the
//! command-line tool can run into.

use thiserror::Error;

/// Failures raised while emitting a payload.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmitError {
    /// A table was asked to emit with no rows to derive its width from.
    #[error("Table '{table_id}' has no rows to derive a width from")]
    EmptyTable { table_id: String },

    /// A composite's child failed to produce a payload.
    #[error("Child '{child_id}' of '{container_id}' did not produce a payload: {source}")]
    MalformedChild {
        container_id: String,
        child_id: String,
        #[source]
        source: Box<EmitError>,
    },
}

impl EmitError {
    /// The innermost error, unwrapping any `MalformedChild` layers.
    pub fn root_cause(&self) -> &EmitError {
        match self {
            EmitError::MalformedChild { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error for {path}: {source}")]
    JsonParseError {
        path: std::path::PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output delivery failed: {}", failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
