//! Reels commands

use super::{open_store, require_user};
use anyhow::{Context, Result};
use colored::Colorize;
use qoogle_core::ReelFeed;
use std::path::Path;

/// Extensions accepted by `upload`, matching a `video/*` file picker
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "mov", "webm", "mkv", "avi", "ogv"];

fn is_video(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| VIDEO_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

pub async fn list() -> Result<()> {
    let store = open_store()?;
    let user = require_user(&store)?;
    let feed = ReelFeed::load(&store, &user.username);

    println!("{}", "🎬 Reels".magenta().bold());
    println!();
    for reel in feed.reels() {
        let marker = if feed.is_visible(&reel.id) { "▶" } else { " " };
        println!(
            "   {} {} {}",
            marker.green(),
            reel.author.bold(),
            reel.description
        );
        println!("     {}", reel.url.dimmed());
    }
    Ok(())
}

pub async fn upload(path: &Path) -> Result<()> {
    let store = open_store()?;
    let user = require_user(&store)?;

    let path = path
        .canonicalize()
        .with_context(|| format!("Cannot read {}", path.display()))?;
    if !path.is_file() || !is_video(&path) {
        anyhow::bail!(
            "{} is not a video file (expected one of: {})",
            path.display(),
            VIDEO_EXTENSIONS.join(", ")
        );
    }

    let mut feed = ReelFeed::load(&store, &user.username);
    let reel = feed
        .upload(path.display().to_string(), chrono::Utc::now())
        .clone();
    feed.save(&store, &user.username)
        .context("Failed to save uploaded reel")?;

    println!(
        "{} Uploaded {} as {}",
        "✓".green(),
        reel.url.cyan(),
        reel.author.bold()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_video() {
        assert!(is_video(Path::new("/tmp/clip.mp4")));
        assert!(is_video(Path::new("holiday.MOV")));
        assert!(!is_video(Path::new("notes.txt")));
        assert!(!is_video(Path::new("no_extension")));
    }
}
