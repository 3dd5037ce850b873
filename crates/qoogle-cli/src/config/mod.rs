//! Configuration management

use anyhow::{Context, Result};
use qoogle_core::{SearchConfig, Settings};
use std::path::PathBuf;

pub struct SettingsManager;

impl SettingsManager {
    /// Get the qoogle home directory (~/.qoogle)
    pub fn qoogle_home() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("QOOGLE_HOME") {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".qoogle"))
    }

    /// Get the settings file path
    pub fn settings_path() -> Result<PathBuf> {
        Ok(Self::qoogle_home()?.join("settings.json"))
    }

    /// Directory holding one JSON file per storage key
    pub fn storage_dir() -> Result<PathBuf> {
        Ok(Self::qoogle_home()?.join("storage"))
    }

    /// Load settings from disk, falling back to defaults when absent
    pub fn load() -> Result<Settings> {
        let path = Self::settings_path()?;
        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {:?}", path))
    }

    /// Save settings to disk
    pub fn save(settings: &Settings) -> Result<()> {
        let path = Self::settings_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let content =
            serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write settings to {:?}", path))?;

        // Set permissions on Unix (restrict to owner only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Search settings with the API key from the command line or environment
    pub fn search_config(api_key: Option<String>) -> Result<SearchConfig> {
        let settings = Self::load()?;
        Ok(match api_key {
            Some(key) => settings.search.with_api_key(Some(key)),
            None => settings.search.with_env_api_key(),
        })
    }
}
