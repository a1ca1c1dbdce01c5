//! Inventory loading error types.
//!
//! Malformed rows never surface here; they are dropped where they are read.
//! These errors are structural and abort the run.

use std::path::PathBuf;

/// Errors that can occur while loading reference tables.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// A file or directory could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A lookup table header has none of the accepted column names
    #[error("{}: no header column matches any of {}", path.display(), candidates.join(", "))]
    MissingColumn {
        path: PathBuf,
        candidates: &'static [&'static str],
    },
}
