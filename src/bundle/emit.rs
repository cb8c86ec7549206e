//! Bundle rendering and writing.
//!
//! Output layout, one block per collected script:
//!
//! ```text
//! // js/010-utils.js
//! <minified 010-utils.js>
//!
//! // js/020-ui.js
//! <minified 020-ui.js>
//! ```

use std::fs;
use std::path::Path;

use crate::asset::{AssetId, AssetMap};

use super::{BundleError, MinifyOptions, minify_js};

/// Separator between bundled scripts: exactly one blank line.
const ENTRY_SEPARATOR: &str = "\n\n";

/// A fully assembled bundle, held in memory until written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    text: String,
    entries: usize,
}

impl Bundle {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of scripts in the bundle.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Write the bundle, creating parent directories as needed.
    ///
    /// The target is only touched once the whole text exists, so a failed
    /// render leaves the previous bundle in place.
    pub fn write(&self, path: &Path) -> Result<(), BundleError> {
        let write_err = |source: std::io::Error| BundleError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, &self.text).map_err(write_err)
    }
}

/// Render the bundle for `map` in collector order.
#[cfg(test)]
pub fn render(map: &AssetMap, options: MinifyOptions) -> Result<Bundle, BundleError> {
    render_with(map, options, |_| {})
}

/// Render the bundle for `map` in collector order, calling `on_entry`
/// after each script is minified.
pub fn render_with(
    map: &AssetMap,
    options: MinifyOptions,
    mut on_entry: impl FnMut(&AssetId),
) -> Result<Bundle, BundleError> {
    let mut parts = Vec::with_capacity(map.len());
    for entry in map {
        let minified =
            minify_js(&entry.content, options).map_err(|message| BundleError::Minify {
                id: entry.id.clone(),
                message,
            })?;
        parts.push(format!("// {}\n{}", entry.id, minified));
        on_entry(&entry.id);
    }

    Ok(Bundle {
        text: parts.join(ENTRY_SEPARATOR),
        entries: parts.len(),
    })
}
