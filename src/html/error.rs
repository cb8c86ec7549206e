//! Rewrite errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("marker region `<!--{begin}` ... `{end}-->` not found")]
    MarkerNotFound { begin: String, end: String },

    #[error("expected exactly one marker region, found {count}")]
    MultipleMarkers { count: usize },

    #[error("invalid marker pattern: {0}")]
    Pattern(String),

    #[error("IO error on `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RewriteError {
    pub(super) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
