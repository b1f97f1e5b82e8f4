//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod config;
pub(crate) mod nav;

use std::path::PathBuf;

use clap::Args;
use folio_config::{CliSettings, SiteConfig};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use config::ConfigArgs;
pub(crate) use nav::NavArgs;

/// Options shared by every command that loads the configuration.
#[derive(Args)]
pub(crate) struct LoadArgs {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site title (overrides config).
    #[arg(long)]
    title: Option<String>,

    /// Content root directory (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,
}

impl LoadArgs {
    /// Load the configuration with CLI overrides applied.
    pub(crate) fn load(self) -> Result<SiteConfig, CliError> {
        let cli_settings = CliSettings {
            title: self.title,
            content_dir: self.content_dir,
        };
        let config = SiteConfig::load(self.config.as_deref(), Some(&cli_settings))?;

        match &config.config_path {
            Some(path) => tracing::info!(path = %path.display(), "Loaded configuration"),
            None => tracing::info!("No configuration file found, using defaults"),
        }

        Ok(config)
    }
}
