//! Development → production entry page rewrite.
//!
//! ```text
//! <!-- Debug imports start -->          <script src="/js/dist/app.bundle.js"
//! <script src="/js/010-utils.js">  ==>          defer type="application/javascript">
//! <script src="/js/020-ui.js">              </script>
//! <!-- Debug imports end -->
//! ```
//!
//! Every other `<!-- ... -->` is dropped together with the spaces in front of
//! it and the line break after it.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::debug;
use crate::utils::{html::escape_attr, plural_count};

use super::RewriteError;

/// Any HTML comment, with its leading indentation and trailing line breaks.
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)[ \t]*<!--.*?-->[\r\n]*").unwrap());

/// Marker texts and the bundle URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Text right after `<!--` opening the region.
    pub begin: String,
    /// Text right before `-->` closing the region.
    pub end: String,
    /// Public URL of the bundle.
    pub bundle_url: String,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            begin: "Debug imports start".to_string(),
            end: "Debug imports end".to_string(),
            bundle_url: "/js/dist/app.bundle.js".to_string(),
        }
    }
}

/// Compiled rewrite: the region pattern and the replacement tag.
#[derive(Debug, Clone)]
pub struct Rewriter {
    region: Regex,
    script_tag: String,
    options: RewriteOptions,
}

impl Rewriter {
    pub fn new(options: RewriteOptions) -> Result<Self, RewriteError> {
        let pattern = format!(
            r"(?s)<!--[ \t\r\n]*{}.*?{}[ \t\r\n]*-->",
            regex::escape(&options.begin),
            regex::escape(&options.end)
        );
        let region =
            Regex::new(&pattern).map_err(|err| RewriteError::Pattern(err.to_string()))?;
        let script_tag = format!(
            r#"<script src="{}" defer type="application/javascript"></script>"#,
            escape_attr(&options.bundle_url)
        );
        Ok(Self {
            region,
            script_tag,
            options,
        })
    }

    /// Rewrite a development page into its production form.
    ///
    /// Exactly one marker region must be present.
    pub fn rewrite(&self, html: &str) -> Result<String, RewriteError> {
        match self.region.find_iter(html).count() {
            0 => {
                return Err(RewriteError::MarkerNotFound {
                    begin: self.options.begin.clone(),
                    end: self.options.end.clone(),
                });
            }
            1 => {}
            count => return Err(RewriteError::MultipleMarkers { count }),
        }

        let replaced = self.region.replace(html, NoExpand(&self.script_tag));
        debug!("html"; "dropping {}", plural_count(count_comments(&replaced), "comment"));
        Ok(strip_comments(&replaced))
    }

    /// Read `dev`, rewrite it, and overwrite `prod`.
    pub fn rewrite_file(&self, dev: &Path, prod: &Path) -> Result<(), RewriteError> {
        let html = fs::read_to_string(dev).map_err(|err| RewriteError::io(dev, err))?;
        let output = self.rewrite(&html)?;
        if let Some(parent) = prod.parent() {
            fs::create_dir_all(parent).map_err(|err| RewriteError::io(parent, err))?;
        }
        fs::write(prod, output).map_err(|err| RewriteError::io(prod, err))
    }
}

/// Remove every HTML comment.
pub fn strip_comments(html: &str) -> String {
    COMMENT.replace_all(html, "").into_owned()
}

/// Count HTML comments.
pub fn count_comments(html: &str) -> usize {
    COMMENT.find_iter(html).count()
}
