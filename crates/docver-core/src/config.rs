//! Publisher configuration.
//!
//! The browser switcher is configuration-free; everything here drives the
//! publish-directory maintenance tool.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Configuration for the version publisher.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Version manifest settings.
    #[serde(default)]
    pub manifest: ManifestConfig,

    /// Convenience link settings.
    #[serde(default)]
    pub links: LinkConfig,

    /// Root redirect settings.
    #[serde(default)]
    pub redirect: RedirectConfig,
}

/// Version manifest settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// File name written at the publish root. The browser switcher fetches
    /// this name, so changing it requires a matching page contract.
    #[serde(default = "default_manifest_file")]
    pub file: String,
}

/// Convenience link settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Link name for the newest non-pre-release version.
    #[serde(default = "default_stable_link")]
    pub stable: String,

    /// Link name for the development snapshot.
    #[serde(default = "default_dev_link")]
    pub dev: String,

    /// Directory the dev link points at.
    #[serde(default = "default_dev_target")]
    pub dev_target: String,
}

/// Root redirect settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectConfig {
    /// Whether the root redirect page is written.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Redirect page file name.
    #[serde(default = "default_redirect_file")]
    pub file: String,
}

// Default value functions
fn default_manifest_file() -> String {
    crate::versions::VERSIONS_FILE.to_string()
}

fn default_stable_link() -> String {
    "stable".to_string()
}

fn default_dev_link() -> String {
    "dev".to_string()
}

fn default_dev_target() -> String {
    "main".to_string()
}

fn default_true() -> bool {
    true
}

fn default_redirect_file() -> String {
    "index.html".to_string()
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            file: default_manifest_file(),
        }
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            stable: default_stable_link(),
            dev: default_dev_link(),
            dev_target: default_dev_target(),
        }
    }
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: default_redirect_file(),
        }
    }
}

impl PublishConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: PublishConfig = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate for more flexibility.
    ///
    /// Environment variables prefixed with `DOCVER__` override file values.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("DOCVER").separator("__"))
            .build()?;

        let config: PublishConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.manifest.file.is_empty() {
            return Err(CoreError::config("manifest.file cannot be empty"));
        }

        if self.links.stable.is_empty() || self.links.dev.is_empty() {
            return Err(CoreError::config("link names cannot be empty"));
        }

        if self.links.stable == self.links.dev {
            return Err(CoreError::config(
                "links.stable and links.dev must be distinct",
            ));
        }

        if self.redirect.enabled && self.redirect.file.is_empty() {
            return Err(CoreError::config("redirect.file cannot be empty"));
        }

        if self.manifest.file != crate::versions::VERSIONS_FILE {
            tracing::warn!(
                file = %self.manifest.file,
                "manifest file name differs from the browser switcher default"
            );
        }

        Ok(())
    }
}
