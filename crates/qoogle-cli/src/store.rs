//! File-backed key/value store
//!
//! Each key is a JSON file under the storage directory. Characters outside
//! `[A-Za-z0-9_-]` are hex-escaped so usernames cannot escape the directory.

use qoogle_core::{KeyValueStore, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", encode_key(key)))
    }
}

fn encode_key(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        debug!("Writing {} ({} bytes)", path.display(), value.len());
        std::fs::write(path, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qoogle_core::{AuthService, StreakBook};

    #[test]
    fn test_round_trip_and_remove() -> anyhow::Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let store = FileStore::open(temp_dir.path().join("storage"))?;

        assert_eq!(store.get("qoogle-users")?, None);
        store.set("qoogle-users", r#"{"alice":"secret1"}"#)?;
        assert_eq!(
            store.get("qoogle-users")?.as_deref(),
            Some(r#"{"alice":"secret1"}"#)
        );
        assert!(store.root().join("qoogle-users.json").exists());

        store.remove("qoogle-users")?;
        store.remove("qoogle-users")?;
        assert_eq!(store.get("qoogle-users")?, None);
        Ok(())
    }

    #[test]
    fn test_keys_stay_inside_root() -> anyhow::Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let store = FileStore::open(temp_dir.path())?;

        store.set("friends-streaks-../../etc/passwd", "[]")?;
        let entries: Vec<_> = std::fs::read_dir(temp_dir.path())?.collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            encode_key("friends-streaks-../x"),
            "friends-streaks-%2E%2E%2Fx"
        );
        Ok(())
    }

    #[test]
    fn test_services_persist_across_reopen() -> anyhow::Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let now = 1_760_000_000_000;

        {
            let store = FileStore::open(temp_dir.path())?;
            let auth = AuthService::new(&store);
            auth.signup("alice", "password")?;
            let mut book = StreakBook::load(&store, "alice", now);
            book.send(4, now)?;
        }

        let store = FileStore::open(temp_dir.path())?;
        let auth = AuthService::new(&store);
        assert_eq!(auth.current_user().map(|u| u.username), Some("alice".to_string()));
        let book = StreakBook::load(&store, "alice", now);
        assert_eq!(book.get(4).map(|f| f.streak), Some(113));
        Ok(())
    }
}
