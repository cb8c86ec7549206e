//! URL to filesystem path resolution.

use std::path::{Path, PathBuf};

/// Resolve a request URL against the asset root.
///
/// `/` maps to `index` (the production entry page). Any other URL must name
/// an existing file under `serve_root`; directories are not listed.
pub fn resolve_path(url: &str, serve_root: &Path, index: &Path) -> Option<PathBuf> {
    let clean = normalize_url(url);

    let local = if clean.is_empty() {
        index.to_path_buf()
    } else {
        // Reject paths with suspicious patterns early
        if clean.split('/').any(|segment| segment == "..") {
            return None;
        }
        serve_root.join(&clean)
    };

    // Canonicalize to resolve symlinks and verify path is under serve_root
    let canonical = local.canonicalize().ok()?;
    let root_canonical = serve_root.canonicalize().ok()?;

    if !canonical.starts_with(&root_canonical) {
        return None;
    }

    canonical.is_file().then_some(canonical)
}

/// Normalize URL: decode, strip query string, trim slashes
fn normalize_url(url: &str) -> String {
    use percent_encoding::percent_decode_str;

    let path = url.split(['?', '#']).next().unwrap_or(url);
    let decoded = percent_decode_str(path)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();

    decoded.trim_matches('/').to_string()
}
