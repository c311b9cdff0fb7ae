//! Storefront configuration.
//!
//! Every field has a default, so an empty file (or no file) is a valid
//! configuration. Files ending in `.json` are read as JSON, everything else
//! as TOML.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;

/// Top-level storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub home: HomeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load and validate config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StorefrontError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content, is_json(path))
            .map_err(|e| StorefrontError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse config text without touching the filesystem.
    pub fn parse(content: &str, json: bool) -> Result<Self, StorefrontError> {
        if json {
            serde_json::from_str(content).map_err(|e| StorefrontError::Config(e.to_string()))
        } else {
            toml::from_str(content).map_err(|e| StorefrontError::Config(e.to_string()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StorefrontError> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self).map_err(|e| StorefrontError::Config(e.to_string()))?
        } else {
            self.to_toml()?
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, StorefrontError> {
        toml::to_string_pretty(self).map_err(|e| StorefrontError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), StorefrontError> {
        if self.store.brand.trim().is_empty() {
            return Err(StorefrontError::Config("store.brand must not be empty".into()));
        }
        if self.carousel.interval_ms == 0 {
            return Err(StorefrontError::Config(
                "carousel.interval_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Auto-rotation period of the home carousel.
    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel.interval_ms)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Store identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Brand shown in the header, page titles and footer.
    #[serde(default = "default_brand")]
    pub brand: String,
}

fn default_brand() -> String {
    "LUXE".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
        }
    }
}

/// Home carousel settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Milliseconds between automatic slide advances.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Whether the carousel advances on its own.
    #[serde(default = "default_true")]
    pub autoplay: bool,
}

fn default_interval_ms() -> u64 {
    5000
}

fn default_true() -> bool {
    true
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            autoplay: true,
        }
    }
}

/// Home page layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeConfig {
    /// Number of products in the "Featured Products" grid.
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
}

fn default_featured_count() -> usize {
    4
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            featured_count: default_featured_count(),
        }
    }
}

/// Log output settings, applied by binaries that install a subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive (e.g. "info", "luxe_storefront=debug").
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for development).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

/// Generate a commented default `luxe.toml`.
pub fn generate_default_config() -> String {
    r#"# LUXE storefront configuration

[store]
brand = "LUXE"

[carousel]
# Milliseconds between automatic slide advances
interval_ms = 5000
autoplay = true

[home]
featured_count = 4

[logging]
level = "info"
# "human" or "json"
format = "human"
"#
    .to_string()
}
