//! Loading fragment batches from JSON.
//!
//! The external extractor hands over one batch per drawing as a JSON array
//! of [`RawSegment`]s; this is the boundary where file and parse failures
//! can occur, so loading goes through [`TraceError`] rather than the
//! infallible pipeline.

use std::path::Path;

use crate::error::{Result, TraceError};
use crate::model::RawSegment;

/// Parse a fragment batch from JSON text.
pub fn parse_segments(raw: &str) -> Result<Vec<RawSegment>> {
    let segments = serde_json::from_str(raw)?;
    Ok(segments)
}

/// Load a fragment batch from a JSON file.
///
/// An empty (whitespace-only) file is rejected before JSON parsing so the
/// caller gets a pointed message instead of a syntax error.
pub fn load_segments(path: &Path) -> Result<Vec<RawSegment>> {
    let raw = std::fs::read_to_string(path)?;
    if raw.trim().is_empty() {
        return Err(TraceError::EmptyBatchFile {
            path: path.to_path_buf(),
        });
    }
    parse_segments(&raw)
}
