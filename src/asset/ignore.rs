//! Ignore list matching.

use std::path::{Path, PathBuf};

use crate::utils::path::normalize_relative;

use super::CollectError;

/// Normalized path prefixes excluded from traversal.
///
/// Matching is component-wise: ignoring `dist` skips `dist/app.js` but not
/// `distance/app.js`.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    prefixes: Vec<PathBuf>,
}

impl IgnoreSet {
    /// Resolve ignore entries (relative to `base`) into absolute prefixes.
    pub fn new(base: &Path, entries: &[PathBuf]) -> Result<Self, CollectError> {
        let prefixes = entries
            .iter()
            .map(|entry| {
                normalize_relative(entry)
                    .map(|rel| base.join(rel))
                    .ok_or_else(|| CollectError::OutsideRoot(entry.clone()))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { prefixes })
    }

    /// Add an absolute path to skip (used for the bundle output itself).
    pub fn push(&mut self, path: PathBuf) {
        self.prefixes.push(path);
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix))
    }
}
