//! # Contractor profile
//!
//! [`Contractor`] is the read-only projection of a contractor returned by
//! `GET /api/contractors` and `GET /api/contractors/{username}`. Every field but
//! `username` is optional on the wire; the helpers below encode the display
//! fallbacks the directory and profile pages share:
//!
//! - [`Contractor::display_name`]: `full_name`, falling back to `username`.
//! - [`Contractor::rating_value`] / [`Contractor::experience_value`]: missing
//!   numbers read as zero, which is how sorting treats them.
//! - [`Contractor::category_city`]: category and city joined with `" · "`,
//!   skipping absent parts.
//! - [`Contractor::social_links`]: `socials` entries in server order, keeping
//!   only string URLs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Contractor record as served by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contractor {
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub experience_years: Option<f64>,
    /// Label → URL, in the order the server sent them.
    #[serde(default)]
    pub socials: Option<Map<String, Value>>,
}

impl Contractor {
    /// Full name, or the username when the name is missing or empty.
    pub fn display_name(&self) -> &str {
        non_empty(&self.full_name).unwrap_or(&self.username)
    }

    pub fn category(&self) -> &str {
        non_empty(&self.category).unwrap_or("")
    }

    pub fn description(&self) -> &str {
        non_empty(&self.description).unwrap_or("")
    }

    pub fn rating_value(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    pub fn experience_value(&self) -> f64 {
        self.experience_years.unwrap_or(0.0)
    }

    /// `"Plumbing · Kazan"`, `"Plumbing"`, `"Kazan"` or `""`.
    pub fn category_city(&self) -> String {
        [non_empty(&self.category), non_empty(&self.city)]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" · ")
    }

    /// `(label, url)` pairs for every social entry with a string URL.
    pub fn social_links(&self) -> Vec<(String, String)> {
        self.socials
            .iter()
            .flatten()
            .filter_map(|(label, url)| url.as_str().map(|u| (label.clone(), u.to_string())))
            .collect()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
