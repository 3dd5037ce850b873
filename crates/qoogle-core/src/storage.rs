//! Key/value storage port
//!
//! Every persisted record is a complete JSON document stored under a string
//! key, mirroring browser `localStorage`. Writes always replace the whole
//! value.

use crate::error::Result;
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Plaintext username -> password map
pub const USERS_KEY: &str = "qoogle-users";

/// Currently signed-in user
pub const CURRENT_USER_KEY: &str = "qoogle-currentUser";

/// String key/value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;

    /// Read and decode a JSON value
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>
    where
        Self: Sized,
    {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Encode and write a JSON value
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-memory store backed by DashMap
#[derive(Clone, Default)]
pub struct MemoryStore {
    data: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.data.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_basic_operations() {
        let store = MemoryStore::new();

        store.set("key1", "value").unwrap();
        assert_eq!(store.get("key1").unwrap().as_deref(), Some("value"));
        assert_eq!(store.get("nonexistent").unwrap(), None);

        store.remove("key1").unwrap();
        assert_eq!(store.get("key1").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_json_helpers_replace_whole_value() {
        let store = MemoryStore::new();
        let mut users = HashMap::new();
        users.insert("alice".to_string(), "secret1".to_string());
        store.set_json(USERS_KEY, &users).unwrap();

        users.insert("bob".to_string(), "secret2".to_string());
        store.set_json(USERS_KEY, &users).unwrap();

        let loaded: HashMap<String, String> = store.get_json(USERS_KEY).unwrap().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_json_reports_corrupt_value() {
        let store = MemoryStore::new();
        store.set("broken", "{not json").unwrap();
        let result: Result<Option<Vec<u32>>> = store.get_json("broken");
        assert!(result.is_err());
    }
}
