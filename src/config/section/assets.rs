//! `[assets]` section configuration.
//!
//! Where scripts live and in which order they are bundled.
//!
//! # Example
//!
//! ```toml
//! [assets]
//! root = "static"                 # asset root, relative to the config file
//! scripts = "js"                  # script root, relative to the asset root
//! extension = "js"                # only files with this extension are bundled
//! first = [                       # bundled first, in this order (relative to scripts)
//!     "deps/lodash.min.js",
//!     "010-utils.js",
//! ]
//! ignore = ["dist"]               # skipped subtrees (relative to scripts)
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::normalize_relative;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding the entry pages and the script tree.
    pub root: PathBuf,

    /// Script tree, relative to `root`.
    pub scripts: PathBuf,

    /// Script extension, without the dot.
    pub extension: String,

    /// Scripts placed at the head of the bundle, in order.
    pub first: Vec<PathBuf>,

    /// Paths excluded from the walk. Matched as whole path prefixes.
    pub ignore: Vec<PathBuf>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: "static".into(),
            scripts: "js".into(),
            extension: "js".to_string(),
            first: Vec::new(),
            ignore: vec!["dist".into()],
        }
    }
}

impl AssetsConfig {
    pub const FIELD_SCRIPTS: FieldPath = FieldPath::new("assets.scripts");
    pub const FIELD_EXTENSION: FieldPath = FieldPath::new("assets.extension");
    pub const FIELD_FIRST: FieldPath = FieldPath::new("assets.first");
    pub const FIELD_IGNORE: FieldPath = FieldPath::new("assets.ignore");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if normalize_relative(&self.scripts).is_none() {
            diag.error_with_hint(
                Self::FIELD_SCRIPTS,
                format!("`{}` must point inside the asset root", self.scripts.display()),
                "use a relative path such as \"js\"",
            );
        }

        let ext = self.extension.as_str();
        if ext.is_empty() || ext.starts_with('.') {
            diag.error_with_hint(
                Self::FIELD_EXTENSION,
                format!("invalid extension `{ext}`"),
                "write the extension without a leading dot, e.g. \"js\"",
            );
        }

        Self::validate_entries(&self.first, Self::FIELD_FIRST, diag);
        Self::validate_entries(&self.ignore, Self::FIELD_IGNORE, diag);
    }

    fn validate_entries(entries: &[PathBuf], field: FieldPath, diag: &mut ConfigDiagnostics) {
        for (idx, entry) in entries.iter().enumerate() {
            if !is_inside(entry) {
                diag.error(
                    field,
                    format!(
                        "[{idx}] `{}` must be relative to the script root",
                        entry.display()
                    ),
                );
            }
        }
    }
}

fn is_inside(path: &Path) -> bool {
    normalize_relative(path).is_some()
}
