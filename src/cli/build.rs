//! `build` command.

use anyhow::Result;

use crate::{config::PackConfig, pipeline};

/// Bundle scripts and derive the production entry page.
pub fn build(config: &PackConfig) -> Result<()> {
    pipeline::run(config, false)?;
    Ok(())
}
