//! # Application configuration: `recipes.toml`
//!
//! The web binary embeds a `recipes.toml` at build time and parses it into
//! [`AppConfig`]. Every section and field has a default, so an empty file is
//! equivalent to the default configuration.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000/api"   # recipe backend, no trailing slash needed
//!
//! [ui]
//! brand = "Recipe Manager"                  # navbar title
//! ```

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `recipes.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Location of the recipe backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Presentation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_brand")]
    pub brand: String,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_brand() -> String {
    "Recipe Manager".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
        }
    }
}

impl AppConfig {
    /// Builder method to point at a different backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "recipes.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.ui.brand, "Recipe Manager");
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml("[api]\nbase_url = \"https://recipes.example.com/api\"\n")
            .unwrap();
        assert_eq!(config.api.base_url, "https://recipes.example.com/api");
        assert_eq!(config.ui.brand, "Recipe Manager");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default().with_base_url("/api");
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(AppConfig::from_toml("[api]\nbase_url = 5\n").is_err());
    }
}
