//! Config command - Manage CLI configuration

use crate::config::SettingsManager;
use anyhow::{Context, Result};
use colored::Colorize;
use qoogle_core::Settings;

/// Show current configuration
pub async fn show(api_key: Option<String>) -> Result<()> {
    let search = SettingsManager::search_config(api_key)?;
    let home = SettingsManager::qoogle_home()?;

    println!("{}", "Qoogle Configuration".bold().underline());
    println!();

    println!("{}", "Search:".cyan().bold());
    println!("  Model:    {}", search.model);
    println!("  API base: {}", search.api_base);
    println!("  Endpoint: {}", search.endpoint().dimmed());
    if search.has_api_key() {
        println!("  API key:  {}", "configured".green());
    } else {
        println!("  API key:  {}", "not set (mock responses)".yellow());
    }
    println!();

    println!("{}", "Paths:".cyan().bold());
    println!("  Home:     {}", home.display());
    println!(
        "  Settings: {}",
        SettingsManager::settings_path()?.display()
    );
    println!(
        "  Storage:  {}",
        SettingsManager::storage_dir()?.display()
    );

    Ok(())
}

pub async fn set_model(model: &str) -> Result<()> {
    let model = model.trim();
    if model.is_empty() {
        anyhow::bail!("Model name cannot be empty");
    }

    let mut settings = SettingsManager::load().context("Failed to load settings")?;
    settings.search.model = model.to_string();
    SettingsManager::save(&settings).context("Failed to save settings")?;

    println!("{} Model set to: {}", "✓".green(), model.cyan());
    Ok(())
}

pub async fn set_api_base(url: &str) -> Result<()> {
    let url = url.trim().trim_end_matches('/');
    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!(
            "Invalid URL: {}. URL must start with http:// or https://",
            url
        );
    }

    let mut settings = SettingsManager::load().context("Failed to load settings")?;
    settings.search.api_base = url.to_string();
    SettingsManager::save(&settings).context("Failed to save settings")?;

    println!("{} API base set to: {}", "✓".green(), url.cyan());
    println!("  Endpoint: {}", settings.search.endpoint().dimmed());
    Ok(())
}

/// Reset to default configuration
pub async fn reset() -> Result<()> {
    SettingsManager::save(&Settings::default()).context("Failed to save settings")?;
    println!("{} Configuration reset to defaults", "✓".green());
    Ok(())
}
