//! Asset identity.

use std::fmt;
use std::path::Path;

use crate::utils::path::{normalize_relative, to_slash};

/// Normalized, `/`-separated path of a script relative to the asset root.
///
/// Two paths that point at the same file through `.` or `..` detours map to
/// the same id, so the collector can deduplicate by identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(String);

impl AssetId {
    /// Build an id from a path relative to the asset root.
    ///
    /// Returns `None` if the path escapes the root or is not valid UTF-8.
    pub fn from_relative(path: &Path) -> Option<Self> {
        let normalized = normalize_relative(path)?;
        to_slash(&normalized).map(Self)
    }

    /// Build an id from a path under `root`.
    pub fn from_path(path: &Path, root: &Path) -> Option<Self> {
        Self::from_relative(path.strip_prefix(root).ok()?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AssetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for AssetId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for AssetId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
