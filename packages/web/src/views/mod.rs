//! Route targets. Each wraps the shared view from `ui`.

use dioxus::prelude::*;
use ui::profile::ProfileView;
use ui::views::{DirectoryView, FeedView, LoginView, OrderView, RegisterView};
use ui::Navbar;

use crate::Route;

/// Navbar above every page.
#[component]
pub fn Shell() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "container mx-auto px-4 py-8",
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { FeedView {} }
}

#[component]
pub fn Login() -> Element {
    rsx! { LoginView {} }
}

#[component]
pub fn Register() -> Element {
    rsx! { RegisterView {} }
}

#[component]
pub fn Contractors() -> Element {
    rsx! { DirectoryView {} }
}

#[component]
pub fn NewOrder() -> Element {
    rsx! { OrderView {} }
}

/// `/profile?username=...`. The router has already decoded the value; a
/// missing parameter renders an empty profile.
#[component]
pub fn Profile(username: String) -> Element {
    rsx! { ProfileView { username: username } }
}
