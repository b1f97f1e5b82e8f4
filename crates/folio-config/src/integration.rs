//! Build-time integrations and the image service mode.

use serde::{Deserialize, Serialize};

/// A named build plugin activated with its own options.
///
/// Options are kept as raw TOML values; their meaning belongs to the plugin.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct IntegrationRef {
    /// Plugin name (e.g. `tailwind`).
    pub name: String,
    /// Plugin options.
    #[serde(default)]
    pub options: toml::Table,
}

impl IntegrationRef {
    /// Look up a single option.
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&toml::Value> {
        self.options.get(key)
    }
}

/// How the site generator treats images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageService {
    /// Optimize and resize images.
    #[default]
    Sharp,
    /// Copy images through unchanged.
    Passthrough,
    /// Leave image handling disabled.
    Noop,
}

impl std::fmt::Display for ImageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Sharp => "sharp",
            Self::Passthrough => "passthrough",
            Self::Noop => "noop",
        })
    }
}

/// `[image]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ImageConfigRaw {
    pub(crate) service: ImageService,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Doc {
        #[serde(default)]
        image: ImageConfigRaw,
        #[serde(default)]
        integrations: Vec<IntegrationRef>,
    }

    #[test]
    fn test_image_service_defaults_to_sharp() {
        let doc: Doc = toml::from_str("").unwrap();
        assert_eq!(doc.image.service, ImageService::Sharp);
    }

    #[test]
    fn test_parse_passthrough_image_service() {
        let doc: Doc = toml::from_str("[image]\nservice = \"passthrough\"\n").unwrap();
        assert_eq!(doc.image.service, ImageService::Passthrough);
        assert_eq!(doc.image.service.to_string(), "passthrough");
    }

    #[test]
    fn test_unknown_image_service_rejected() {
        let result: Result<Doc, _> = toml::from_str("[image]\nservice = \"squoosh\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_integrations_keep_order_and_options() {
        let doc: Doc = toml::from_str(
            r#"
[[integrations]]
name = "tailwind"

[integrations.options]
apply_base_styles = false
config_file = "tailwind.config.mjs"

[[integrations]]
name = "sitemap"
"#,
        )
        .unwrap();

        let names: Vec<_> = doc.integrations.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["tailwind", "sitemap"]);

        let tailwind = &doc.integrations[0];
        assert_eq!(
            tailwind.option("apply_base_styles"),
            Some(&toml::Value::Boolean(false))
        );
        assert_eq!(
            tailwind.option("config_file").and_then(toml::Value::as_str),
            Some("tailwind.config.mjs")
        );
        assert!(tailwind.option("missing").is_none());
        assert!(doc.integrations[1].options.is_empty());
    }
}
