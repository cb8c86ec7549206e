//! `[version]` section configuration.
//!
//! ```toml
//! [version]
//! file = "v"      # single-line `release.major.minor`, relative to the config file
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionConfig {
    pub file: PathBuf,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self { file: "v".into() }
    }
}
