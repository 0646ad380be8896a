use dioxus::prelude::*;

use store::ClientConfig;
use ui::AppProvider;
use views::{Contractors, Home, Login, NewOrder, Profile, Register, Shell};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/contractors")]
        Contractors {},
        #[route("/orders/new")]
        NewOrder {},
        #[route("/profile?:username")]
        Profile { username: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

const CONFIG_TOML: &str = include_str!("../marketplace.toml");

/// Embedded `marketplace.toml`, with the API base optionally replaced at
/// build time through `MARKETPLACE_API_BASE`.
fn load_config() -> ClientConfig {
    let config = ClientConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("invalid {}, using defaults: {}", ClientConfig::filename(), e);
        ClientConfig::default()
    });
    config.with_api_override(option_env!("MARKETPLACE_API_BASE"))
}

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    tracing::debug!("API base {}", config.api.base_url);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppProvider {
            config: config,
            Router::<Route> {}
        }
    }
}
