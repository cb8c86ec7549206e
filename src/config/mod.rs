//! Project configuration for `shellpack.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── assets     # [assets]
//! │   ├── bundle     # [bundle]
//! │   ├── html       # [html]
//! │   ├── serve      # [serve]
//! │   └── version    # [version]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # find_config_file
//! └── mod.rs         # PackConfig (this file)
//! ```
//!
//! Every section is optional. Without a config file the defaults describe
//! the conventional layout: `static/js/**.js` bundled into
//! `static/js/dist/app.bundle.js`, `static/dev-index.html` rewritten into
//! `static/index.html`.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{AssetsConfig, BundleConfig, HtmlConfig, ServeConfig, VersionConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::asset::CollectOptions;
use crate::bundle::MinifyOptions;
use crate::cli::{BuildArgs, Cli, Commands};
use crate::html::RewriteOptions;
use crate::utils::path::normalize_relative;
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing shellpack.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub bundle: BundleConfig,

    #[serde(default)]
    pub html: HtmlConfig,

    #[serde(default)]
    pub serve: ServeConfig,

    #[serde(default)]
    pub version: VersionConfig,
}

impl PackConfig {
    /// Load configuration for `cli`.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's parent directory, or cwd when no file exists.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cwd, &cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self {
                    config_path: cwd.join(&cli.config),
                    ..Self::default()
                }
            }
        };

        let root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(cwd);
        config.set_root(&root);
        config.apply_command_options(cli);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content).map_err(ConfigError::Toml)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    // ========================================================================
    // resolved paths
    // ========================================================================

    /// Directory ids are computed against and the preview server serves.
    pub fn asset_root(&self) -> PathBuf {
        self.root.join(&self.assets.root)
    }

    /// Directory the collector walks.
    pub fn script_root(&self) -> PathBuf {
        self.under_asset_root(&self.assets.scripts)
    }

    pub fn bundle_path(&self) -> PathBuf {
        self.under_asset_root(&self.bundle.output)
    }

    pub fn dev_html(&self) -> PathBuf {
        self.under_asset_root(&self.html.dev)
    }

    pub fn prod_html(&self) -> PathBuf {
        self.under_asset_root(&self.html.prod)
    }

    pub fn version_file(&self) -> PathBuf {
        self.root.join(&self.version.file)
    }

    /// Join a validated relative path onto the asset root.
    ///
    /// Paths are normalized so they compare equal to the paths the
    /// collector produces while walking.
    fn under_asset_root(&self, path: &Path) -> PathBuf {
        let rel = normalize_relative(path).unwrap_or_else(|| path.to_path_buf());
        self.asset_root().join(rel)
    }

    // ========================================================================
    // stage options
    // ========================================================================

    /// Collector options. The bundle itself is never collected.
    pub fn collect_options(&self) -> CollectOptions {
        CollectOptions {
            asset_root: self.asset_root(),
            script_root: self.script_root(),
            first: self.assets.first.clone(),
            ignore: self.assets.ignore.clone(),
            extension: self.assets.extension.clone(),
            exclude: vec![self.bundle_path()],
        }
    }

    pub fn minify_options(&self) -> MinifyOptions {
        self.bundle.minify_options()
    }

    pub fn rewrite_options(&self) -> RewriteOptions {
        self.html.rewrite_options(&self.bundle.url)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Serve { interface, port } => {
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
            }
            Commands::Version { .. } => {}
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        crate::logger::set_verbose(args.verbose);
        Self::update_option(&mut self.bundle.minify, args.minify.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate all sections, collecting every error before failing.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.assets.validate(&mut diag);
        self.bundle.validate(&mut diag);
        self.html.validate(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> PackConfig {
    let (parsed, ignored) = PackConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
