//! Browser localStorage adapter

use qoogle_core::{KeyValueStore, QoogleError, Result};
use wasm_bindgen::JsValue;

/// `window.localStorage` behind the core key/value port
#[derive(Clone)]
pub struct BrowserStore {
    storage: Option<web_sys::Storage>,
}

impl BrowserStore {
    pub fn local() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("localStorage is unavailable; nothing will be saved");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| QoogleError::Storage("localStorage is unavailable".to_string()))
    }
}

fn js_error(e: JsValue) -> QoogleError {
    QoogleError::Storage(format!("{:?}", e))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}
