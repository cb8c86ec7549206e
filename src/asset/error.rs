//! Collector errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while collecting scripts.
///
/// `NotADirectory` and `NotAFile` are structural: the ordering list or the
/// configured roots point at the wrong kind of entry. `Io` covers everything
/// the filesystem reports (missing file, permissions, invalid UTF-8).
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("tried to walk a file: `{}`", .0.display())]
    NotADirectory(PathBuf),

    #[error("ordered entry is not a file: `{}`", .0.display())]
    NotAFile(PathBuf),

    #[error("path escapes the asset root: `{}`", .0.display())]
    OutsideRoot(PathBuf),

    #[error("failed to read `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CollectError {
    pub(super) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
