//! Streak commands

use super::{open_store, require_user};
use crate::store::FileStore;
use anyhow::Result;
use colored::Colorize;
use qoogle_core::utils::now_millis;
use qoogle_core::{StreakBook, StreakStatus, DECAY_SWEEP_INTERVAL_MS};
use std::time::Duration;
use tracing::info;

fn print_friends(book: &StreakBook<&FileStore>, now: i64) {
    println!("{}", "🔥 Streaks".magenta().bold());
    println!();
    for friend in book.ranked() {
        let status = StreakStatus::of(&friend, now);
        let streak = if friend.is_active() {
            format!("{} {}", friend.streak.to_string().yellow().bold(), status.emoji())
        } else {
            "-".dimmed().to_string()
        };
        println!("   [{}] {} {}", friend.id, format!("{:<10}", friend.name).bold(), streak);
    }
}

pub async fn list() -> Result<()> {
    let store = open_store()?;
    let user = require_user(&store)?;
    let now = now_millis();

    let book = StreakBook::load(&store, &user.username, now);
    print_friends(&book, now);
    Ok(())
}

pub async fn send(id: u32) -> Result<()> {
    let store = open_store()?;
    let user = require_user(&store)?;
    let now = now_millis();

    let mut book = StreakBook::load(&store, &user.username, now);
    let friend = book.send(id, now)?;
    println!(
        "{} Sent to {}: streak {} {}",
        "✓".green(),
        friend.name.cyan(),
        friend.streak.to_string().yellow().bold(),
        StreakStatus::of(friend, now).emoji()
    );
    Ok(())
}

pub async fn sweep() -> Result<()> {
    let store = open_store()?;
    let user = require_user(&store)?;
    let now = now_millis();

    let mut book = StreakBook::open(&store, &user.username, now);
    let expired = book.sweep(now);

    if expired > 0 {
        println!("{} {} streak(s) expired", "⌛".yellow(), expired);
    } else {
        println!("{} No streaks expired", "✓".green());
    }
    Ok(())
}

/// Keep the list open and sweep it on the decay interval until Ctrl-C
pub async fn watch() -> Result<()> {
    let store = open_store()?;
    let user = require_user(&store)?;

    let mut book = StreakBook::load(&store, &user.username, now_millis());
    print_friends(&book, now_millis());
    println!();
    println!("{}", "Watching for expired streaks (Ctrl-C to stop)".dimmed());

    let mut interval =
        tokio::time::interval(Duration::from_millis(u64::from(DECAY_SWEEP_INTERVAL_MS)));
    interval.tick().await;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let now = now_millis();
                let expired = book.sweep(now);
                if expired > 0 {
                    info!("Decay sweep expired {} streak(s)", expired);
                    println!();
                    print_friends(&book, now);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                println!("{}", "Stopped watching".dimmed());
                return Ok(());
            }
        }
    }
}
