//! # Error Types
//!
//! The parser itself never fails (malformed input degrades to fewer notes
//! or an empty result), so errors only arise at the serialization boundary
//! when encoding a result for the renderer or the CLI.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    /// JSON encoding of a summary or note list failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding of a summary failed.
    #[error("YAML encoding failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
