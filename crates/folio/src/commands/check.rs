//! `folio check` command implementation.

use clap::Args;
use folio_config::{SiteConfig, group_count};
use folio_nav::lint;

use super::LoadArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    load: LoadArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Load failures are errors; sidebar findings are printed as warnings.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.load.load()?;

        match &config.config_path {
            Some(path) => output.heading(&path.display().to_string()),
            None => output.heading("(no folio.toml found, using defaults)"),
        }
        for line in summary(&config) {
            output.info(&line);
        }

        let findings = lint(&config.sidebar);
        for finding in &findings {
            output.warning(&finding.to_string());
        }

        if findings.is_empty() {
            output.success("Configuration OK");
        } else {
            output.success(&format!(
                "Configuration OK ({})",
                plural(findings.len(), "warning")
            ));
        }

        Ok(())
    }
}

/// Summary lines describing a loaded configuration.
fn summary(config: &SiteConfig) -> Vec<String> {
    let integrations = if config.integrations.is_empty() {
        "none".to_owned()
    } else {
        config
            .integrations
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    vec![
        format!("Title: {}", config.title),
        format!("Content directory: {}", config.content_dir.display()),
        format!(
            "Sidebar: {}, {}",
            plural(group_count(&config.sidebar), "group"),
            plural(config.links().count(), "link")
        ),
        format!("Social links: {}", config.social_links.len()),
        format!("Stylesheets: {}", config.stylesheets.len()),
        format!("Integrations: {integrations}"),
        format!("Image service: {}", config.image_service),
    ]
}

/// `count` followed by `noun`, pluralized with `s` unless `count` is 1.
fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
