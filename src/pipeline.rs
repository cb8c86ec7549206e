//! Build pipeline.
//!
//! ```text
//! collect ──> render ──> write bundle ──> rewrite entry page
//! ```
//!
//! Stops at the first failing stage. Output written by an earlier stage of
//! the same run stays on disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::{
    asset::collect,
    bundle::render_with,
    config::PackConfig,
    debug,
    html::Rewriter,
    log,
    logger::ProgressLine,
    utils::plural_count,
};

/// What a build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Number of scripts in the bundle.
    pub scripts: usize,
    /// Bundle size in bytes.
    pub bundle_bytes: usize,
    pub bundle_path: PathBuf,
    pub prod_html: PathBuf,
}

/// Run every stage for `config`.
///
/// `quiet` suppresses the progress counter and the summary line.
pub fn run(config: &PackConfig, quiet: bool) -> Result<BuildReport> {
    // Invalid markers fail before anything is written
    let rewriter = Rewriter::new(config.rewrite_options())?;

    let map = collect(&config.collect_options()).context("failed to collect scripts")?;
    debug!("collect"; "{} under {}", plural_count(map.len(), "script"), config.script_root().display());

    let progress = (!quiet && !map.is_empty()).then(|| ProgressLine::new("bundle", map.len()));
    let bundle = render_with(&map, config.minify_options(), |id| {
        debug!("bundle"; "{}", id);
        if let Some(p) = &progress {
            p.inc();
        }
    })?;
    if let Some(p) = progress {
        p.finish();
    }

    let bundle_path = config.bundle_path();
    bundle.write(&bundle_path)?;

    let (dev, prod) = (config.dev_html(), config.prod_html());
    rewriter.rewrite_file(&dev, &prod)?;

    let report = BuildReport {
        scripts: bundle.entries(),
        bundle_bytes: bundle.as_str().len(),
        bundle_path,
        prod_html: prod,
    };

    if !quiet {
        log!(
            "bundle";
            "{} -> {} ({} bytes)",
            plural_count(report.scripts, "script"),
            display_relative(&report.bundle_path, config.get_root()),
            report.bundle_bytes
        );
        log!(
            "html";
            "{} -> {}",
            display_relative(&dev, config.get_root()),
            display_relative(&report.prod_html, config.get_root())
        );
    }

    Ok(report)
}

fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
