//! Error types for knowledge base loading.
//!
//! Lookups never fail: a missing (crop, method) pair is an `Unknown`
//! assessment, not an error. These errors only arise when an alternative
//! table is loaded from JSON.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a knowledge base from external data.
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    /// Table file could not be read.
    #[error("failed to read knowledge base {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Table is not valid JSON or does not match the schema.
    #[error("invalid knowledge base JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Table names a crop outside the tracked set.
    #[error("unknown crop '{0}' in knowledge base")]
    UnknownCrop(String),

    /// Same crop appears twice in the table.
    #[error("crop '{0}' is defined more than once")]
    DuplicateCrop(String),

    /// Crop is present but defines no storage methods.
    #[error("crop '{0}' has no storage methods")]
    EmptyCrop(String),

    /// Same storage method label appears twice under one crop.
    #[error("crop '{crop}' defines storage method '{method}' more than once")]
    DuplicateMethod { crop: String, method: String },
}

/// Result type for knowledge base operations.
pub type Result<T> = std::result::Result<T, KnowledgeBaseError>;
