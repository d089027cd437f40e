//! Site configuration
//!
//! Stored as TOML (`<config_dir>/subspace/site.toml` by default). The server
//! hands it to the frontend as JSON; the frontend falls back to
//! [`SiteConfig::default`] until that fetch succeeds.

use crate::error::CoreError;
use crate::nav::{nav_links, section_id, NavLink, NAV_LABELS};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// File name looked up under the platform config directory
pub const CONFIG_FILE_NAME: &str = "site.toml";

/// Branding and navigation shown by the navbar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Text of the logo link
    pub brand: String,
    /// Navbar labels, in display order
    pub nav_labels: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "SubSpace".to_string(),
            nav_labels: NAV_LABELS.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, CoreError> {
        let config: SiteConfig =
            toml::from_str(content).map_err(|source| CoreError::ConfigParse {
                path: origin.to_path_buf(),
                message: source.message().to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate the config file at `path`
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content, path)?;
        tracing::debug!(path = %path.display(), brand = %config.brand, "Loaded site config");
        Ok(config)
    }

    /// Load from `explicit` if given, else from the default location if that
    /// file exists, else fall back to defaults.
    pub fn resolve(explicit: Option<&Path>, config_dir: Option<&Path>) -> Result<Self, CoreError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match config_dir.map(default_config_path) {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                tracing::debug!("No site config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reject configs the navbar cannot render sensibly
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.brand.trim().is_empty() {
            return Err(invalid("brand must not be empty"));
        }

        if self.nav_labels.is_empty() {
            return Err(invalid("nav_labels must contain at least one label"));
        }

        let mut seen = HashSet::new();
        for label in &self.nav_labels {
            let id = section_id(label);
            if id.is_empty() {
                return Err(invalid("nav_labels must not contain blank labels"));
            }
            if id.chars().any(char::is_whitespace) {
                return Err(invalid(format!(
                    "nav label {:?} would produce anchor #{} containing whitespace",
                    label, id
                )));
            }
            if !seen.insert(id.clone()) {
                return Err(invalid(format!(
                    "nav label {:?} duplicates anchor #{}",
                    label, id
                )));
            }
        }

        Ok(())
    }

    pub fn nav_links(&self) -> Vec<NavLink> {
        nav_links(&self.nav_labels)
    }
}

/// `<config_dir>/subspace/site.toml`
pub fn default_config_path(config_dir: &Path) -> PathBuf {
    config_dir.join("subspace").join(CONFIG_FILE_NAME)
}

fn invalid(message: impl Into<String>) -> CoreError {
    CoreError::InvalidConfig {
        message: message.into(),
    }
}
