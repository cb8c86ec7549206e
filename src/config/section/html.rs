//! `[html]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [html]
//! dev = "dev-index.html"          # checked-in entry page (relative to the asset root)
//! prod = "index.html"             # derived entry page, overwritten on every build
//! begin = "Debug imports start"   # <!--Debug imports start-->
//! end = "Debug imports end"       # <!--Debug imports end-->
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::html::RewriteOptions;
use crate::utils::path::normalize_relative;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    pub dev: PathBuf,
    pub prod: PathBuf,
    pub begin: String,
    pub end: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        let markers = RewriteOptions::default();
        Self {
            dev: "dev-index.html".into(),
            prod: "index.html".into(),
            begin: markers.begin,
            end: markers.end,
        }
    }
}

impl HtmlConfig {
    pub const FIELD_DEV: FieldPath = FieldPath::new("html.dev");
    pub const FIELD_PROD: FieldPath = FieldPath::new("html.prod");
    pub const FIELD_BEGIN: FieldPath = FieldPath::new("html.begin");
    pub const FIELD_END: FieldPath = FieldPath::new("html.end");

    /// Rewrite options pointing the entry page at `bundle_url`.
    pub fn rewrite_options(&self, bundle_url: &str) -> RewriteOptions {
        RewriteOptions {
            begin: self.begin.clone(),
            end: self.end.clone(),
            bundle_url: bundle_url.to_string(),
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, path) in [(Self::FIELD_DEV, &self.dev), (Self::FIELD_PROD, &self.prod)] {
            if normalize_relative(path).is_none() {
                diag.error(
                    field,
                    format!("`{}` must point inside the asset root", path.display()),
                );
            }
        }

        if normalize_relative(&self.dev) == normalize_relative(&self.prod) {
            diag.error_with_hint(
                Self::FIELD_PROD,
                "production page would overwrite the development page",
                "pick a different file name for `prod`",
            );
        }

        if self.begin.trim().is_empty() {
            diag.error(Self::FIELD_BEGIN, "begin marker must not be empty");
        }
        if self.end.trim().is_empty() {
            diag.error(Self::FIELD_END, "end marker must not be empty");
        }
        if self.begin == self.end {
            diag.error(Self::FIELD_END, "begin and end markers must differ");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_html_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.html.dev.to_str(), Some("dev-index.html"));
        assert_eq!(config.html.prod.to_str(), Some("index.html"));
        assert_eq!(config.html.begin, "Debug imports start");
        assert_eq!(config.html.end, "Debug imports end");
    }

    #[test]
    fn test_html_rewrite_options() {
        let config = test_parse_config("[html]\nbegin = \"scripts\"\nend = \"/scripts\"");
        let options = config.html.rewrite_options("/bundle.js");
        assert_eq!(options.begin, "scripts");
        assert_eq!(options.end, "/scripts");
        assert_eq!(options.bundle_url, "/bundle.js");
    }

    #[test]
    fn test_html_validate_same_page() {
        let config = test_parse_config("[html]\ndev = \"index.html\"\nprod = \"./index.html\"");
        let mut diag = ConfigDiagnostics::new();
        config.html.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_html_validate_markers() {
        let config = test_parse_config("[html]\nbegin = \"x\"\nend = \"x\"");
        let mut diag = ConfigDiagnostics::new();
        config.html.validate(&mut diag);
        assert_eq!(diag.len(), 1);

        let config = test_parse_config("[html]\nbegin = \" \"");
        let mut diag = ConfigDiagnostics::new();
        config.html.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
