//! Error types for road reconstruction.
//!
//! The pipeline itself has no fatal conditions: degenerate fragments are
//! skipped, unresolvable widths degrade to a flagged zero, and an empty batch
//! yields an empty road list. Errors here cover the surfaces around the core
//! (configuration and batch loading).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the reconstruction tool.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Batch file is empty: {path}")]
    EmptyBatchFile { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed segment batch: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for reconstruction operations.
pub type Result<T> = std::result::Result<T, TraceError>;
