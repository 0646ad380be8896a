//! # `localStorage` session store — browser-side persistence
//!
//! [`LocalStore`] is the [`SessionStore`] used on the **web platform**. It reads
//! and writes plain string values in `window.localStorage`, so the stored
//! username survives page loads and browser restarts.
//!
//! ## Error handling
//!
//! All methods silently swallow errors (a missing window, storage disabled by
//! privacy settings, quota exceeded). Reads then return `None` and writes do
//! nothing, which degrades to "signed out" rather than crashing the page.

use crate::session::SessionStore;
use web_sys::Storage;

/// `window.localStorage`-backed SessionStore for web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
