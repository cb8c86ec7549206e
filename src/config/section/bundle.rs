//! `[bundle]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [bundle]
//! output = "js/dist/app.bundle.js"   # relative to the asset root
//! url = "/js/dist/app.bundle.js"     # path the entry page loads it from
//! minify = true                      # strip comments and whitespace
//! compress = false                   # oxc compressor
//! mangle = false                     # rename local bindings
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::bundle::MinifyOptions;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::normalize_relative;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
    /// Bundle location, relative to the asset root.
    pub output: PathBuf,

    /// Public URL of the bundle.
    pub url: String,

    pub minify: bool,
    pub compress: bool,
    pub mangle: bool,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            output: "js/dist/app.bundle.js".into(),
            url: "/js/dist/app.bundle.js".to_string(),
            minify: true,
            compress: false,
            mangle: false,
        }
    }
}

impl BundleConfig {
    pub const FIELD_OUTPUT: FieldPath = FieldPath::new("bundle.output");
    pub const FIELD_URL: FieldPath = FieldPath::new("bundle.url");
    pub const FIELD_MINIFY: FieldPath = FieldPath::new("bundle.minify");

    pub fn minify_options(&self) -> MinifyOptions {
        MinifyOptions {
            enabled: self.minify,
            compress: self.compress,
            mangle: self.mangle,
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if normalize_relative(&self.output).is_none() {
            diag.error(
                Self::FIELD_OUTPUT,
                format!("`{}` must point inside the asset root", self.output.display()),
            );
        }

        if !self.url.starts_with('/') {
            diag.error_with_hint(
                Self::FIELD_URL,
                format!("`{}` is not an absolute URL path", self.url),
                "start the URL with `/`, e.g. \"/js/dist/app.bundle.js\"",
            );
        }

        if !self.minify && (self.compress || self.mangle) {
            diag.warn(
                Self::FIELD_MINIFY,
                "`compress` and `mangle` have no effect while `minify = false`",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_bundle_defaults() {
        let config = test_parse_config("");
        let options = config.bundle.minify_options();
        assert!(options.enabled);
        assert!(!options.compress);
        assert!(!options.mangle);
        assert_eq!(config.bundle.url, "/js/dist/app.bundle.js");
    }

    #[test]
    fn test_bundle_override() {
        let config = test_parse_config(
            "[bundle]\noutput = \"app.js\"\nurl = \"/app.js\"\ncompress = true",
        );
        assert_eq!(config.bundle.output.to_str(), Some("app.js"));
        assert!(config.bundle.minify_options().compress);
    }

    #[test]
    fn test_bundle_validate_url() {
        let config = test_parse_config("[bundle]\nurl = \"js/app.js\"");
        let mut diag = ConfigDiagnostics::new();
        config.bundle.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_bundle_validate_output_escape() {
        let config = test_parse_config("[bundle]\noutput = \"../app.js\"");
        let mut diag = ConfigDiagnostics::new();
        config.bundle.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_bundle_validate_warning_is_not_error() {
        let config = test_parse_config("[bundle]\nminify = false\nmangle = true");
        let mut diag = ConfigDiagnostics::new();
        config.bundle.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
