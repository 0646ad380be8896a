use dioxus::prelude::*;

use crate::paths;
use crate::session::{use_session, LogoutButton};
use crate::strings::{signed_in_as, SIGN_IN_OR_REGISTER};

/// Label and href of an auth link for the given session user. Signed-in
/// links point nowhere.
pub fn auth_link_target(user: Option<&str>) -> (String, &'static str) {
    match user {
        Some(user) => (signed_in_as(user), "#"),
        None => (SIGN_IN_OR_REGISTER.to_string(), paths::LOGIN),
    }
}

#[component]
pub fn AuthLink(#[props(default = "".to_string())] class: String) -> Element {
    let session = use_session();
    let (label, href) = auth_link_target(session().user.as_deref());

    rsx! {
        a {
            class: "auth-link {class}",
            href: "{href}",
            "{label}"
        }
    }
}

#[component]
pub fn Navbar() -> Element {
    let session = use_session();

    rsx! {
        header {
            class: "bg-white shadow",
            nav {
                class: "container mx-auto flex items-center justify-between px-4 py-4",
                a { class: "text-xl font-bold text-blue-600", href: paths::HOME, "МастерХаб" }
                div {
                    class: "flex items-center space-x-6",
                    a { class: "hover:text-blue-600", href: paths::HOME, "Лента" }
                    a { class: "hover:text-blue-600", href: paths::CONTRACTORS, "Исполнители" }
                    a { class: "hover:text-blue-600", href: paths::NEW_ORDER, "Разместить заказ" }
                    AuthLink { class: "text-blue-600" }
                    if session().user.is_some() {
                        LogoutButton { class: "text-gray-500 hover:text-red-600" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_link_signed_in() {
        let (label, href) = auth_link_target(Some("alice"));
        assert_eq!(label, "Вы: alice");
        assert_eq!(href, "#");
    }

    #[test]
    fn test_auth_link_signed_out() {
        let (label, href) = auth_link_target(None);
        assert_eq!(label, "Вход / Регистрация");
        assert_eq!(href, "/login");
    }

    #[test]
    fn test_auth_link_is_idempotent() {
        assert_eq!(auth_link_target(Some("bob")), auth_link_target(Some("bob")));
    }
}
