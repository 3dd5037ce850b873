//! Subcommand implementations

pub mod auth;
pub mod config;
pub mod reels;
pub mod search;
pub mod streaks;

use crate::config::SettingsManager;
use crate::store::FileStore;
use anyhow::{Context, Result};
use qoogle_core::{AuthService, User};

/// Open the key/value store under the qoogle home directory
pub fn open_store() -> Result<FileStore> {
    let dir = SettingsManager::storage_dir()?;
    FileStore::open(&dir).with_context(|| format!("Failed to open storage at {:?}", dir))
}

/// The signed-in user; every screen command sits behind this gate
pub fn require_user(store: &FileStore) -> Result<User> {
    AuthService::new(store)
        .current_user()
        .context("Not logged in. Run `qoogle auth login` or `qoogle auth signup` first")
}
