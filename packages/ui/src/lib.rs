//! Shared Dioxus UI for the marketplace front end: session context, page
//! views and the components they are built from.

use dioxus::prelude::*;

pub mod browser;
pub mod contractors;
pub mod files;
pub mod loader;
pub mod navbar;
pub mod paths;
pub mod posts;
pub mod profile;
pub mod rating;
pub mod session;
pub mod strings;
pub mod views;

#[cfg(test)]
mod testing;

pub use navbar::{AuthLink, Navbar};
pub use session::{use_services, use_session, AppProvider, LogoutButton, Services, SessionState};

pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[cfg(test)]
mod tests {
    const STYLESHEET: &str = include_str!("../assets/tailwind.css");
    const SOURCES: &[&str] = &[
        include_str!("contractors.rs"),
        include_str!("navbar.rs"),
        include_str!("posts.rs"),
        include_str!("profile.rs"),
        include_str!("rating.rs"),
        include_str!("views/auth.rs"),
        include_str!("views/directory.rs"),
        include_str!("views/feed.rs"),
        include_str!("views/order.rs"),
    ];
    /// Hooks for tests and the app stylesheet, not utilities.
    const MARKERS: &[&str] = &["auth-link", "contractor-card", "post-card"];

    fn used_classes() -> Vec<&'static str> {
        let mut classes = Vec::new();
        for source in SOURCES {
            for chunk in source.split("class: \"").skip(1) {
                let Some((list, _)) = chunk.split_once('"') else {
                    continue;
                };
                classes.extend(
                    list.split_whitespace()
                        .filter(|c| !c.contains('{') && !MARKERS.contains(c)),
                );
            }
        }
        classes.sort_unstable();
        classes.dedup();
        classes
    }

    #[test]
    fn test_every_utility_class_has_a_rule() {
        let classes = used_classes();
        assert!(classes.contains(&"bg-white"));
        for class in classes {
            let selector = format!(".{}", class.replace(':', "\\:"));
            assert!(STYLESHEET.contains(&selector), "no rule for {class}");
        }
    }
}
