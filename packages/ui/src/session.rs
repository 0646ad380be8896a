//! Session context and hooks for the UI.
//!
//! [`AppProvider`] builds the [`Services`] (API client and session store)
//! once at the root and exposes them, together with a reactive
//! [`SessionState`], through the Dioxus context.

use api::HttpApi;
use dioxus::prelude::*;
use store::{ClientConfig, Session};

use crate::browser;
use crate::paths;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// Create the platform-appropriate session: `localStorage` on the web,
/// memory elsewhere.
pub fn make_session(config: &ClientConfig) -> Session<PlatformStore> {
    Session::new(PlatformStore::new(), config.session.policy())
}

/// Long-lived collaborators shared by every page.
#[derive(Clone)]
pub struct Services {
    pub api: HttpApi,
    pub session: Session<PlatformStore>,
}

impl Services {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            api: HttpApi::new(config.api.base_url.clone()),
            session: make_session(config),
        }
    }
}

/// Who is signed in, as far as the rendered UI knows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<String>,
}

/// Get the reactive session state.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Provider component that owns the services and the session state.
/// Wrap the router with it.
#[component]
pub fn AppProvider(config: ClientConfig, children: Element) -> Element {
    let services = use_hook(|| Services::new(&config));
    let session = services.session.clone();
    let session_state = use_signal(move || SessionState {
        user: session.username(),
    });

    use_context_provider(|| services);
    use_context_provider(|| session_state);

    rsx! {
        {children}
    }
}

/// Button that clears the stored identity and returns to the home page.
#[component]
pub fn LogoutButton(
    #[props(default = crate::strings::LOG_OUT.to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let services = use_services();
    let mut session_state = use_session();

    let onclick = move |_| {
        services.session.sign_out();
        session_state.set(SessionState::default());
        tracing::info!("signed out");
        browser::go_to(paths::HOME);
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_services_follow_config() {
        let config = ClientConfig::new("https://market.example/").with_session_expiry(60);
        let services = Services::new(&config);
        assert_eq!(services.api.base_url(), "https://market.example");

        services.session.sign_in_at("alice", 0);
        assert!(services.session.username().is_none());
    }
}
