//! # Session identity
//!
//! The client remembers exactly one thing between page loads: the username of
//! whoever signed in on this browser. [`Session`] wraps a [`SessionStore`]
//! backend and applies the configured [`SessionPolicy`] when reading it back.
//!
//! ## Storage layout
//!
//! | Key | Value |
//! |-----|-------|
//! | [`USERNAME_KEY`] (`"username"`) | the username as a plain string |
//! | [`SIGNED_IN_AT_KEY`] (`"username_signed_in_at"`) | sign-in time in milliseconds since the Unix epoch |
//!
//! The timestamp only matters under [`SessionPolicy::ExpireAfter`]. A username
//! without a readable timestamp counts as expired under that policy.

use crate::config::SessionPolicy;

pub const USERNAME_KEY: &str = "username";
pub const SIGNED_IN_AT_KEY: &str = "username_signed_in_at";

/// Synchronous string key/value persistence.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Explicit session context: created at startup, updated on sign-in,
/// cleared on sign-out.
#[derive(Clone, Debug)]
pub struct Session<S: SessionStore> {
    store: S,
    policy: SessionPolicy,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S, policy: SessionPolicy) -> Self {
        Self { store, policy }
    }

    /// The signed-in username, if any and not expired.
    pub fn username(&self) -> Option<String> {
        self.username_at(current_timestamp_ms())
    }

    /// Same as [`Session::username`] with an explicit clock.
    ///
    /// An expired identity is removed from storage before returning `None`.
    pub fn username_at(&self, now_ms: u64) -> Option<String> {
        let user = self.store.get(USERNAME_KEY).filter(|u| !u.is_empty())?;

        if let SessionPolicy::ExpireAfter { secs } = self.policy {
            let signed_in_at = self
                .store
                .get(SIGNED_IN_AT_KEY)
                .and_then(|v| v.parse::<u64>().ok());
            let fresh = matches!(
                signed_in_at,
                Some(at) if now_ms.saturating_sub(at) <= secs.saturating_mul(1000)
            );
            if !fresh {
                self.sign_out();
                return None;
            }
        }

        Some(user)
    }

    pub fn is_signed_in(&self) -> bool {
        self.username().is_some()
    }

    pub fn sign_in(&self, username: &str) {
        self.sign_in_at(username, current_timestamp_ms());
    }

    pub fn sign_in_at(&self, username: &str, now_ms: u64) {
        self.store.set(USERNAME_KEY, username);
        self.store.set(SIGNED_IN_AT_KEY, &now_ms.to_string());
    }

    pub fn sign_out(&self) {
        self.store.remove(USERNAME_KEY);
        self.store.remove(SIGNED_IN_AT_KEY);
    }
}

/// Milliseconds since the Unix epoch.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn current_timestamp_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Milliseconds since the Unix epoch.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn current_timestamp_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
