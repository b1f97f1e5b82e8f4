//! Site configuration for Folio.
//!
//! Parses `folio.toml` with serde into a [`SiteConfig`]: title, branding,
//! social links, the sidebar tree, build integrations and the image service
//! mode. Config files are auto-discovered in the current directory and its
//! parents. The loaded value is read once at startup and never rewritten.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! These string values support `${VAR}` and `${VAR:-default}`:
//! - `title`
//! - `logo.src`, `logo.alt`
//! - `stylesheets[]`
//! - `social[].href`
//!
//! ## Example
//!
//! ```
//! use std::path::Path;
//! use folio_config::{SidebarNode, SiteConfig};
//!
//! let config = SiteConfig::from_toml_str(
//!     r#"
//! title = "Frontend Architecture Playbook"
//!
//! [[sidebar]]
//! label = "Guides"
//!
//! [[sidebar.items]]
//! label = "Introduction"
//! link = "/guides/getting-started/"
//! "#,
//!     Path::new("/site"),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     config.sidebar,
//!     vec![SidebarNode::group(
//!         "Guides",
//!         vec![SidebarNode::link("Introduction", "/guides/getting-started/")],
//!     )]
//! );
//! ```

mod expand;
mod integration;
mod sidebar;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use integration::ImageConfigRaw;
use sidebar::SidebarEntryRaw;

pub use integration::{ImageService, IntegrationRef};
pub use sidebar::{Links, SidebarGroup, SidebarLink, SidebarNode, group_count, links};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "folio.toml";

/// Content root used when `content_dir` is not set.
const DEFAULT_CONTENT_DIR: &str = "src/content/docs";

/// Title used when no config file exists.
const DEFAULT_TITLE: &str = "Documentation";

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site title.
    pub title: Option<String>,
    /// Override content root directory.
    pub content_dir: Option<PathBuf>,
}

/// Loaded site configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Site logo.
    pub logo: Option<Logo>,
    /// Global stylesheets, in load order.
    pub stylesheets: Vec<PathBuf>,
    /// Social links shown in the header.
    pub social_links: Vec<SocialLink>,
    /// Sidebar tree in rendering order.
    pub sidebar: Vec<SidebarNode>,
    /// Build integrations in activation order.
    pub integrations: Vec<IntegrationRef>,
    /// Image service mode.
    pub image_service: ImageService,
    /// Directory sidebar hrefs resolve against.
    pub content_dir: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site logo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Logo {
    /// Image path.
    pub src: PathBuf,
    /// Alternative text.
    pub alt: String,
}

/// Social link shown in the site header.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SocialLink {
    /// Icon name (e.g. `github`).
    pub icon: String,
    /// Accessible label.
    pub label: String,
    /// Target URL.
    pub href: String,
}

/// Raw configuration as parsed from TOML (paths as strings, sidebar unchecked).
#[derive(Debug, Deserialize)]
struct SiteConfigRaw {
    title: Option<String>,
    logo: Option<LogoRaw>,
    #[serde(default)]
    stylesheets: Vec<String>,
    #[serde(default)]
    social: Vec<SocialLink>,
    #[serde(default)]
    sidebar: Vec<SidebarEntryRaw>,
    #[serde(default)]
    integrations: Vec<IntegrationRef>,
    #[serde(default)]
    image: ImageConfigRaw,
    content_dir: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LogoRaw {
    src: String,
    #[serde(default)]
    alt: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g. `social[0].href`).
        field: String,
        /// Error message (e.g. "${`GITHUB_ORG`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl SiteConfig {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` in current directory and parents,
    /// falling back to the default configuration when none is found.
    ///
    /// CLI settings are applied after loading and path resolution.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the document is malformed.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else {
            Self::discover_or_default(&std::env::current_dir()?)?
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse configuration from TOML text.
    ///
    /// Relative paths are resolved against `base_dir`. Unknown keys are
    /// logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, environment expansion or validation fails.
    pub fn from_toml_str(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let (mut raw, ignored) = parse_with_ignored(content)?;
        for key in &ignored {
            tracing::warn!(key = %key, "Unknown configuration key ignored");
        }

        raw.expand_env_vars()?;
        let config = raw.resolve(base_dir)?;
        config.validate()?;

        Ok(config)
    }

    /// Links of the sidebar in reading order.
    pub fn links(&self) -> Links<'_> {
        links(&self.sidebar)
    }

    /// Find an integration by name.
    #[must_use]
    pub fn integration(&self, name: &str) -> Option<&IntegrationRef> {
        self.integrations.iter().find(|i| i.name == name)
    }

    /// Validate configuration values.
    ///
    /// Checks required fields are set. Href format and uniqueness are left
    /// to consumers of the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.title, "title")?;

        for (index, social) in self.social_links.iter().enumerate() {
            require_non_empty(&social.icon, &format!("social[{index}].icon"))?;
            require_non_empty(&social.label, &format!("social[{index}].label"))?;
            require_non_empty(&social.href, &format!("social[{index}].href"))?;
        }

        sidebar::validate_nodes(&self.sidebar, "sidebar")?;

        for (index, integration) in self.integrations.iter().enumerate() {
            require_non_empty(&integration.name, &format!("integrations[{index}].name"))?;
        }

        Ok(())
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(title) = &settings.title {
            self.title.clone_from(title);
        }
        if let Some(content_dir) = &settings.content_dir {
            self.content_dir.clone_from(content_dir);
        }
    }

    /// Load the first `folio.toml` found from `start` upwards, or the
    /// default configuration rooted at `start` when there is none.
    fn discover_or_default(start: &Path) -> Result<Self, ConfigError> {
        if let Some(discovered) = Self::discover_config_from(start) {
            Self::load_from_file(&discovered)
        } else {
            tracing::debug!(start = %start.display(), "No {CONFIG_FILENAME} found, using defaults");
            Ok(Self::default_with_base(start))
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            logo: None,
            stylesheets: Vec::new(),
            social_links: Vec::new(),
            sidebar: Vec::new(),
            integrations: Vec::new(),
            image_service: ImageService::default(),
            content_dir: base.join(DEFAULT_CONTENT_DIR),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));

        let mut config = Self::from_toml_str(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());

        tracing::debug!(
            path = %path.display(),
            links = config.links().count(),
            integrations = config.integrations.len(),
            "Loaded site configuration"
        );

        Ok(config)
    }
}

/// Parse TOML content, collecting the paths of unknown keys.
fn parse_with_ignored(content: &str) -> Result<(SiteConfigRaw, Vec<String>), ConfigError> {
    let table: toml::Table = content.parse()?;
    let mut ignored = Vec::new();
    let raw = serde_ignored::deserialize(toml::Value::Table(table), |path| {
        ignored.push(path.to_string());
    })?;
    Ok((raw, ignored))
}

impl SiteConfigRaw {
    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref title) = self.title {
            self.title = Some(expand::expand_env(title, "title")?);
        }

        if let Some(ref mut logo) = self.logo {
            logo.src = expand::expand_env(&logo.src, "logo.src")?;
            logo.alt = expand::expand_env(&logo.alt, "logo.alt")?;
        }

        for (index, stylesheet) in self.stylesheets.iter_mut().enumerate() {
            *stylesheet = expand::expand_env(stylesheet, &format!("stylesheets[{index}]"))?;
        }

        for (index, social) in self.social.iter_mut().enumerate() {
            social.href = expand::expand_env(&social.href, &format!("social[{index}].href"))?;
        }

        Ok(())
    }

    /// Resolve paths against the config directory and check sidebar shape.
    fn resolve(self, config_dir: &Path) -> Result<SiteConfig, ConfigError> {
        let title = self
            .title
            .ok_or_else(|| ConfigError::Validation("title is required".to_owned()))?;

        Ok(SiteConfig {
            title,
            logo: self.logo.map(|logo| Logo {
                src: config_dir.join(logo.src),
                alt: logo.alt,
            }),
            stylesheets: self
                .stylesheets
                .iter()
                .map(|path| config_dir.join(path))
                .collect(),
            social_links: self.social,
            sidebar: sidebar::convert_entries(self.sidebar, "sidebar")?,
            integrations: self.integrations,
            image_service: self.image.service,
            content_dir: config_dir.join(
                self.content_dir
                    .as_deref()
                    .unwrap_or(DEFAULT_CONTENT_DIR),
            ),
            config_path: None,
        })
    }
}
