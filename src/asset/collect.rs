//! Script collection.
//!
//! ```text
//! static/                 <- asset root (ids are relative to this)
//! └── js/                 <- script root (walk starts here)
//!     ├── 010-utils.js    -> forced first
//!     ├── deps/
//!     │   └── lodash.js   -> forced first
//!     ├── dist/           -> ignored subtree
//!     ├── pages/
//!     │   └── home.js     -> 3rd (subdirectories before files)
//!     └── main.js         -> 4th
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::{debug, log};

use super::{AssetId, AssetMap, CollectError, IgnoreSet};

/// Everything the collector needs, resolved to absolute paths by the caller.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Directory ids are computed against.
    pub asset_root: PathBuf,
    /// Directory the walk starts from. Must live under `asset_root`.
    pub script_root: PathBuf,
    /// Entries placed first, relative to `script_root`.
    pub first: Vec<PathBuf>,
    /// Path prefixes skipped during the walk, relative to `script_root`.
    pub ignore: Vec<PathBuf>,
    /// Script extension without the dot.
    pub extension: String,
    /// Absolute file paths never collected by the walk.
    pub exclude: Vec<PathBuf>,
}

/// Collect scripts: the ordered entries first, then the walk.
///
/// Each skipped directory is logged as `[collect] ignoring <path>`.
pub fn collect(options: &CollectOptions) -> Result<AssetMap, CollectError> {
    collect_with(options, |dir| log!("collect"; "ignoring {}", dir.display()))
}

/// Like [`collect`], reporting each skipped directory to `on_ignored`.
///
/// Paths are relative to the asset root.
pub fn collect_with(
    options: &CollectOptions,
    mut on_ignored: impl FnMut(&Path),
) -> Result<AssetMap, CollectError> {
    let mut ignore = IgnoreSet::new(&options.script_root, &options.ignore)?;
    for path in &options.exclude {
        ignore.push(path.clone());
    }

    let mut map = AssetMap::default();

    for entry in &options.first {
        let path = resolve_first(&options.script_root, entry)?;
        let id = asset_id(&path, &options.asset_root)?;
        if map.contains(&id) {
            continue;
        }
        if path.is_dir() {
            return Err(CollectError::NotAFile(path));
        }
        map.insert(id, read_asset(&path)?);
    }

    let mut walker = Walker {
        asset_root: &options.asset_root,
        extension: &options.extension,
        ignore: &ignore,
        on_ignored: &mut on_ignored,
    };
    for path in walker.walk(&options.script_root)? {
        let id = asset_id(&path, &options.asset_root)?;
        if map.contains(&id) {
            continue;
        }
        map.insert(id, read_asset(&path)?);
    }

    Ok(map)
}

fn resolve_first(script_root: &Path, entry: &Path) -> Result<PathBuf, CollectError> {
    crate::utils::path::normalize_relative(entry)
        .map(|rel| script_root.join(rel))
        .ok_or_else(|| CollectError::OutsideRoot(entry.to_path_buf()))
}

fn asset_id(path: &Path, asset_root: &Path) -> Result<AssetId, CollectError> {
    AssetId::from_path(path, asset_root)
        .ok_or_else(|| CollectError::OutsideRoot(path.to_path_buf()))
}

/// Read a whole script; the handle is closed before returning.
fn read_asset(path: &Path) -> Result<String, CollectError> {
    fs::read_to_string(path).map_err(|err| CollectError::io(path, err))
}

/// Pre-order directory walk yielding matching script paths.
struct Walker<'a> {
    asset_root: &'a Path,
    extension: &'a str,
    ignore: &'a IgnoreSet,
    on_ignored: &'a mut dyn FnMut(&Path),
}

impl Walker<'_> {
    /// Walk `dir`, returning candidate files in emission order.
    ///
    /// Entries are sorted by name. Subdirectories are visited before the
    /// files of the same directory. Symlinked directories are not entered.
    fn walk(&mut self, dir: &Path) -> Result<Vec<PathBuf>, CollectError> {
        if self.ignore.is_ignored(dir) {
            let rel = self.relative(dir);
            (self.on_ignored)(rel);
            return Ok(Vec::new());
        }

        let metadata = fs::metadata(dir).map_err(|err| CollectError::io(dir, err))?;
        if !metadata.is_dir() {
            return Err(CollectError::NotADirectory(dir.to_path_buf()));
        }

        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(|err| CollectError::io(dir, err))? {
            let entry = entry.map_err(|err| CollectError::io(dir, err))?;
            let path = entry.path();
            let file_type = entry
                .file_type()
                .map_err(|err| CollectError::io(&path, err))?;
            if file_type.is_dir() {
                dirs.push(path);
            } else if file_type.is_symlink() && path.is_dir() {
                debug!("collect"; "not following symlinked directory {}", self.relative(&path).display());
            } else if self.is_script(&path) && !self.ignore.is_ignored(&path) {
                files.push(path);
            }
        }
        dirs.sort();
        files.sort();

        let mut found = Vec::new();
        for sub in dirs {
            found.extend(self.walk(&sub)?);
        }
        found.extend(files);
        Ok(found)
    }

    fn is_script(&self, path: &Path) -> bool {
        path.extension().and_then(|ext| ext.to_str()) == Some(self.extension)
    }

    fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(self.asset_root).unwrap_or(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Create `files` (relative to `<tmp>/static/js`) and return options rooted there.
    fn setup(files: &[&str]) -> (TempDir, CollectOptions) {
        let dir = TempDir::new().unwrap();
        let asset_root = dir.path().join("static");
        let script_root = asset_root.join("js");
        fs::create_dir_all(&script_root).unwrap();
        for file in files {
            let path = script_root.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, format!("// {file}\n")).unwrap();
        }
        let options = CollectOptions {
            asset_root,
            script_root,
            first: Vec::new(),
            ignore: Vec::new(),
            extension: "js".to_string(),
            exclude: Vec::new(),
        };
        (dir, options)
    }

    fn ids(map: &AssetMap) -> Vec<String> {
        map.ids().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_first_then_remaining() {
        let (_dir, mut options) = setup(&["a.js", "b.js", "c.js"]);
        options.first = vec!["a.js".into(), "b.js".into()];

        let map = collect(&options).unwrap();
        assert_eq!(ids(&map), ["js/a.js", "js/b.js", "js/c.js"]);
    }

    #[test]
    fn test_first_overrides_alphabetical_order() {
        let (_dir, mut options) = setup(&["a.js", "b.js", "c.js"]);
        options.first = vec!["c.js".into(), "a.js".into()];

        let map = collect(&options).unwrap();
        assert_eq!(ids(&map), ["js/c.js", "js/a.js", "js/b.js"]);
    }

    #[test]
    fn test_first_deduplicated() {
        let (_dir, mut options) = setup(&["a.js", "b.js"]);
        options.first = vec!["b.js".into(), "./b.js".into(), "b.js".into()];

        let map = collect(&options).unwrap();
        assert_eq!(ids(&map), ["js/b.js", "js/a.js"]);
    }

    #[test]
    fn test_subdirectories_before_files() {
        let (_dir, options) = setup(&["z.js", "a.js", "pages/home.js", "lib/util.js"]);

        let map = collect(&options).unwrap();
        assert_eq!(
            ids(&map),
            ["js/lib/util.js", "js/pages/home.js", "js/a.js", "js/z.js"]
        );
    }

    #[test]
    fn test_nested_first_entry() {
        let (_dir, mut options) = setup(&["010-utils.js", "deps/lodash.min.js", "deps/other.js"]);
        options.first = vec!["deps/lodash.min.js".into(), "010-utils.js".into()];

        let map = collect(&options).unwrap();
        assert_eq!(
            ids(&map),
            ["js/deps/lodash.min.js", "js/010-utils.js", "js/deps/other.js"]
        );
    }

    #[test]
    fn test_ignored_subtree_skipped() {
        let (_dir, mut options) = setup(&["main.js", "dist/app.bundle.js", "dist/deep/x.js"]);
        options.ignore = vec!["dist".into()];

        let mut ignored = Vec::new();
        let map = collect_with(&options, |dir| ignored.push(dir.to_path_buf())).unwrap();
        assert_eq!(ids(&map), ["js/main.js"]);
        // Reported once, at the top of the skipped subtree
        assert_eq!(ignored, [PathBuf::from("js/dist")]);
    }

    #[test]
    fn test_nothing_reported_without_ignores() {
        let (_dir, options) = setup(&["a.js", "lib/b.js"]);
        let mut ignored = Vec::new();
        collect_with(&options, |dir| ignored.push(dir.to_path_buf())).unwrap();
        assert!(ignored.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_not_followed() {
        let (_dir, options) = setup(&["a.js", "lib/b.js"]);
        std::os::unix::fs::symlink(&options.script_root, options.script_root.join("lib/loop"))
            .unwrap();

        let map = collect(&options).unwrap();
        assert_eq!(ids(&map), ["js/lib/b.js", "js/a.js"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_collected() {
        let (_dir, options) = setup(&["lib/b.js"]);
        std::os::unix::fs::symlink(
            options.script_root.join("lib/b.js"),
            options.script_root.join("alias.js"),
        )
        .unwrap();

        let map = collect(&options).unwrap();
        assert_eq!(ids(&map), ["js/lib/b.js", "js/alias.js"]);
    }

    #[test]
    fn test_ignore_is_not_substring_match() {
        let (_dir, mut options) = setup(&["dist/a.js", "distance/b.js"]);
        options.ignore = vec!["dist".into()];

        let map = collect(&options).unwrap();
        assert_eq!(ids(&map), ["js/distance/b.js"]);
    }

    #[test]
    fn test_ignored_single_file() {
        let (_dir, mut options) = setup(&["a.js", "debug.js"]);
        options.ignore = vec!["debug.js".into()];

        let map = collect(&options).unwrap();
        assert_eq!(ids(&map), ["js/a.js"]);
    }

    #[test]
    fn test_excluded_output_not_collected() {
        let (_dir, mut options) = setup(&["a.js", "out/app.bundle.js", "out/keep.js"]);
        options.exclude = vec![options.script_root.join("out/app.bundle.js")];

        let map = collect(&options).unwrap();
        assert_eq!(ids(&map), ["js/out/keep.js", "js/a.js"]);
    }

    #[test]
    fn test_non_script_files_skipped() {
        let (_dir, options) = setup(&["a.js", "notes.txt", "style.css", "data.json", "b.mjs"]);

        let map = collect(&options).unwrap();
        assert_eq!(ids(&map), ["js/a.js"]);
    }

    #[test]
    fn test_content_is_raw() {
        let (_dir, options) = setup(&["a.js"]);
        fs::write(options.script_root.join("a.js"), "var a = 1; // keep\n").unwrap();

        let map = collect(&options).unwrap();
        assert_eq!(map.get("js/a.js"), Some("var a = 1; // keep\n"));
    }

    #[test]
    fn test_order_is_stable_across_runs() {
        let (_dir, mut options) = setup(&["m.js", "b/x.js", "a/y.js", "c.js", "a/z/w.js"]);
        options.first = vec!["c.js".into()];

        let first = ids(&collect(&options).unwrap());
        let second = ids(&collect(&options).unwrap());
        assert_eq!(first, second);
        assert_eq!(first, ["js/c.js", "js/a/z/w.js", "js/a/y.js", "js/b/x.js", "js/m.js"]);
    }

    #[test]
    fn test_no_duplicate_ids() {
        let (_dir, mut options) = setup(&["a.js", "sub/b.js", "sub/c.js"]);
        options.first = vec!["sub/c.js".into(), "a.js".into(), "sub/b.js".into()];

        let map = collect(&options).unwrap();
        let mut seen = ids(&map);
        let total = seen.len();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), total);
        assert_eq!(total, 3);
    }

    #[test]
    fn test_missing_first_entry_is_error() {
        let (_dir, mut options) = setup(&["a.js"]);
        options.first = vec!["missing.js".into()];

        let err = collect(&options).unwrap_err();
        match err {
            CollectError::Io { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_first_entry_directory_is_error() {
        let (_dir, mut options) = setup(&["deps/a.js"]);
        options.first = vec!["deps".into()];

        assert!(matches!(
            collect(&options).unwrap_err(),
            CollectError::NotAFile(_)
        ));
    }

    #[test]
    fn test_first_entry_escaping_root_is_error() {
        let (_dir, mut options) = setup(&["a.js"]);
        options.first = vec!["../secret.js".into()];

        assert!(matches!(
            collect(&options).unwrap_err(),
            CollectError::OutsideRoot(_)
        ));
    }

    #[test]
    fn test_walking_a_file_is_structural_error() {
        let (_dir, mut options) = setup(&["a.js"]);
        options.script_root = options.script_root.join("a.js");

        assert!(matches!(
            collect(&options).unwrap_err(),
            CollectError::NotADirectory(_)
        ));
    }

    #[test]
    fn test_missing_script_root_is_io_error() {
        let (_dir, mut options) = setup(&[]);
        options.script_root = options.asset_root.join("nope");

        assert!(matches!(
            collect(&options).unwrap_err(),
            CollectError::Io { .. }
        ));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let (_dir, options) = setup(&[]);
        fs::write(options.script_root.join("bad.js"), [0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(
            collect(&options).unwrap_err(),
            CollectError::Io { .. }
        ));
    }

    #[test]
    fn test_ignored_script_root_yields_only_first() {
        let (_dir, mut options) = setup(&["a.js", "b.js"]);
        options.first = vec!["b.js".into()];
        options.exclude = vec![options.script_root.clone()];

        let mut ignored = Vec::new();
        let map = collect_with(&options, |dir| ignored.push(dir.to_path_buf())).unwrap();
        assert_eq!(ids(&map), ["js/b.js"]);
        assert_eq!(ignored, [PathBuf::from("js")]);
    }
}
