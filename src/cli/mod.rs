//! Command-line interface module.

mod args;
pub mod build;
pub mod serve;
pub mod version;

pub use args::{BuildArgs, Cli, Commands, VersionAction};
