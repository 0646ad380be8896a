//! # Client configuration — `marketplace.toml`
//!
//! The web client reads a small TOML document at startup. It names the remote
//! API and decides how long a stored session identity stays trusted.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//!
//! [session]
//! policy = "trust_forever"      # or "expire_after"
//! expire_after_secs = 604800    # only read with policy = "expire_after"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with TOML (de)serialisation and an env-style override for the API base. |
//! | [`ApiConfig`] | `base_url` of the remote marketplace API. |
//! | [`SessionConfig`] | Which [`SessionPolicy`] the session follows. |
//!
//! Every section derives `Default`, so a missing or empty document is the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `marketplace.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Remote API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme, host and port of the marketplace API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// How a persisted session identity is trusted over time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPolicyKind {
    /// The stored username is trusted until the user signs out.
    #[default]
    TrustForever,
    /// The stored username is dropped once `expire_after_secs` have passed since sign-in.
    ExpireAfter,
}

/// Session section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub policy: SessionPolicyKind,
    #[serde(default = "default_expire_after")]
    pub expire_after_secs: u64,
}

fn default_expire_after() -> u64 {
    60 * 60 * 24 * 7
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            policy: SessionPolicyKind::default(),
            expire_after_secs: default_expire_after(),
        }
    }
}

/// Resolved lifecycle policy handed to [`crate::Session`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPolicy {
    TrustForever,
    ExpireAfter { secs: u64 },
}

impl SessionConfig {
    pub fn policy(&self) -> SessionPolicy {
        match self.policy {
            SessionPolicyKind::TrustForever => SessionPolicy::TrustForever,
            SessionPolicyKind::ExpireAfter => SessionPolicy::ExpireAfter {
                secs: self.expire_after_secs,
            },
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given API base.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            session: SessionConfig::default(),
        }
    }

    /// Builder method to switch the session to a fixed lifetime.
    pub fn with_session_expiry(mut self, secs: u64) -> Self {
        self.session.policy = SessionPolicyKind::ExpireAfter;
        self.session.expire_after_secs = secs;
        self
    }

    /// Replace the API base when an override is present and non-empty.
    pub fn with_api_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(base) = base_url.map(str::trim).filter(|b| !b.is_empty()) {
            self.api.base_url = base.to_string();
        }
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "marketplace.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.session.policy(), SessionPolicy::TrustForever);
    }

    #[test]
    fn test_expire_after_policy() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://market.example"

            [session]
            policy = "expire_after"
            expire_after_secs = 3600
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://market.example");
        assert_eq!(
            config.session.policy(),
            SessionPolicy::ExpireAfter { secs: 3600 }
        );
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let parsed = ClientConfig::from_toml("[session]\npolicy = \"sometimes\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_api_override() {
        let config = ClientConfig::default().with_api_override(Some("  https://api.example  "));
        assert_eq!(config.api.base_url, "https://api.example");

        let config = ClientConfig::default().with_api_override(Some(""));
        assert_eq!(config.api.base_url, "http://localhost:8000");

        let config = ClientConfig::default().with_api_override(None);
        assert_eq!(config.api.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_toml_roundtrip_keeps_policy() {
        let config = ClientConfig::new("http://10.0.0.2:8000").with_session_expiry(60);
        let text = config.to_toml().unwrap();
        let loaded = ClientConfig::from_toml(&text).unwrap();
        assert_eq!(loaded, config);
    }
}
