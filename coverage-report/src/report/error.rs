//! Report rendering error types.

use std::path::PathBuf;

/// Errors that can occur while rendering or writing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A template failed to render
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),

    /// A summary failed to serialize
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Two documents, or a document and a directory, map to the same output path
    #[error("output path {} is claimed by more than one document", path.display())]
    PathConflict { path: PathBuf },

    /// An output file or directory could not be written
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
