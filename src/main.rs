//! shellpack - bundle the scripts of a static web app shell.

mod asset;
mod bundle;
mod cli;
mod config;
mod html;
mod logger;
mod pipeline;
mod utils;
mod version;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::PackConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = PackConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build(&config),
        Commands::Serve { .. } => cli::serve::serve(&config),
        Commands::Version { action } => cli::version::version(&config, action),
    }
}
