//! Configuration for the search backend

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Environment variables checked for the API key, in order
pub const API_KEY_VARS: &[&str] = &["API_KEY", "QOOGLE_API_KEY"];

/// Search backend settings. The API key is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(skip)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            api_base: default_api_base(),
        }
    }
}

impl SearchConfig {
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.trim().is_empty());
        self
    }

    /// Pick up the API key from the process environment
    pub fn with_env_api_key(self) -> Self {
        let key = API_KEY_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()));
        self.with_api_key(key)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// `generateContent` endpoint for the configured model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

/// Settings persisted by the terminal client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub version: String,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            search: SearchConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let config = SearchConfig {
            api_base: "http://localhost:8080/".to_string(),
            ..SearchConfig::default()
        };
        assert_eq!(
            config.endpoint(),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_api_key_is_not_persisted() {
        let settings = Settings {
            search: SearchConfig::default().with_api_key(Some("secret".to_string())),
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(!json.contains("secret"));

        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert!(!parsed.search.has_api_key());
        assert_eq!(parsed.search.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_blank_api_key_is_ignored() {
        let config = SearchConfig::default().with_api_key(Some("  ".to_string()));
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: Settings = serde_json::from_str(r#"{"version":"1.0.0"}"#).unwrap();
        assert_eq!(parsed.search, SearchConfig::default());
    }
}
