//! Search command

use super::{open_store, require_user};
use crate::config::SettingsManager;
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use qoogle_core::utils::source_host;
use qoogle_core::SearchService;
use std::time::Duration;

pub async fn run(prompt: &str, api_key: Option<String>) -> Result<()> {
    let store = open_store()?;
    require_user(&store)?;

    let config = SettingsManager::search_config(api_key)?;
    let service = SearchService::from_config(&config);
    if service.is_mock() {
        println!(
            "{}",
            "⚠️  API key not configured, showing a mock response".yellow()
        );
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.magenta} {msg}")?);
    spinner.set_message("Thinking...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = service.search(prompt).await;
    spinner.finish_and_clear();
    let result = result?;

    println!("{} {}", "✨".magenta(), result.text);

    if !result.sources.is_empty() {
        println!();
        println!("{}", "Sources:".dimmed().bold());
        for source in &result.sources {
            println!(
                "   {} {}",
                source_host(&source.web.uri).cyan(),
                source.web.uri.dimmed()
            );
        }
    }

    Ok(())
}
