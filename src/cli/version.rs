//! `version` command.

use anyhow::{Context, Result};

use crate::{
    cli::VersionAction,
    config::PackConfig,
    log,
    version::{Version, VersionFile},
};

pub fn version(config: &PackConfig, action: &VersionAction) -> Result<()> {
    let file = VersionFile::new(config.version_file());

    match action {
        VersionAction::Get => {
            println!("{}", file.get()?);
        }
        VersionAction::Set { version } => {
            let version: Version = version
                .parse()
                .with_context(|| format!("refusing to write `{version}`"))?;
            file.set(version)?;
            log!("version"; "{}", version);
        }
        VersionAction::Increment { part } => {
            let next = file.increment(*part)?;
            log!("version"; "{}", next);
        }
    }

    Ok(())
}
