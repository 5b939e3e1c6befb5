//! Error types for mediadeck-core.
//!
//! Only input boundaries fail. Normalisation, card assembly and diagnostics
//! formatting are total and never return these.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a feed document.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read feed {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("feed is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("feed must be an array or an object with `items`/`legacy` arrays, found {found}")]
    Shape { found: &'static str },
}

impl FeedError {
    /// Short machine-readable kind, used when the error is shown as data.
    pub fn kind(&self) -> &'static str {
        match self {
            FeedError::Io { .. } => "io",
            FeedError::Json(_) => "json",
            FeedError::Shape { .. } => "shape",
        }
    }
}
