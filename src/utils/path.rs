//! Path normalization utilities.
//!
//! - `normalize_relative` - lexically clean a path that must stay under its base
//! - `to_slash` - render a relative path with `/` separators on every platform

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a relative path.
///
/// Drops `.` components and resolves `..` against earlier components.
/// Returns `None` for absolute paths, paths that climb above their base,
/// and paths that normalize to nothing.
///
/// # Example
/// ```ignore
/// normalize_relative(Path::new("./js/../js/app.js")) -> Some("js/app.js")
/// normalize_relative(Path::new("../secret"))          -> None
/// ```
pub fn normalize_relative(path: &Path) -> Option<PathBuf> {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    return None;
                }
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    (!out.as_os_str().is_empty()).then_some(out)
}

/// Join relative path components with `/`.
///
/// Returns `None` if a component is not valid UTF-8.
pub fn to_slash(path: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(parts.join("/"))
}
