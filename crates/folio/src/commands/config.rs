//! `folio config` command implementation.

use clap::Args;
use folio_config::SiteConfig;

use super::LoadArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the config command.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    #[command(flatten)]
    load: LoadArgs,
}

impl ConfigArgs {
    /// Execute the config command.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.load.load()?;
        output.print(&config_json(&config)?);
        Ok(())
    }
}

/// Pretty JSON for a loaded configuration. The source path is not included.
fn config_json(config: &SiteConfig) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PLAYBOOK: &str = r#"
title = "Frontend Architecture Playbook"

[[social]]
icon = "github"
label = "GitHub"
href = "https://github.com/robertoHeCi/frontend-architecture-playbook"

[[sidebar]]
label = "Guides"

[[sidebar.items]]
label = "Introduction"
link = "/guides/getting-started/"

[image]
service = "passthrough"

[[integrations]]
name = "tailwind"

[integrations.options]
apply_base_styles = false
"#;

    #[test]
    fn test_config_json_shape() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("folio.toml");
        std::fs::write(&path, PLAYBOOK).unwrap();

        let config = LoadArgs {
            config: Some(path),
            title: None,
            content_dir: None,
        }
        .load()
        .unwrap();
        assert!(config.config_path.is_some());

        let json: serde_json::Value =
            serde_json::from_str(&config_json(&config).unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "title": "Frontend Architecture Playbook",
                "logo": null,
                "stylesheets": [],
                "social_links": [{
                    "icon": "github",
                    "label": "GitHub",
                    "href": "https://github.com/robertoHeCi/frontend-architecture-playbook"
                }],
                "sidebar": [{
                    "label": "Guides",
                    "items": [{
                        "label": "Introduction",
                        "href": "/guides/getting-started/"
                    }]
                }],
                "integrations": [{
                    "name": "tailwind",
                    "options": { "apply_base_styles": false }
                }],
                "image_service": "passthrough",
                "content_dir": temp_dir.path().join("src/content/docs").to_str().unwrap()
            })
        );
        assert!(json.get("config_path").is_none());
    }

    #[test]
    fn test_config_json_applies_title_override() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("folio.toml");
        std::fs::write(&path, PLAYBOOK).unwrap();

        let config = LoadArgs {
            config: Some(path),
            title: Some("Staging Playbook".to_owned()),
            content_dir: None,
        }
        .load()
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&config_json(&config).unwrap()).unwrap();
        assert_eq!(json["title"], "Staging Playbook");
    }
}
