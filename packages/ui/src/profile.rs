use api::{ApiError, Contractor, MarketplaceApi};
use dioxus::prelude::*;

use crate::loader::LoadGuard;
use crate::paths;
use crate::posts::PostFeed;
use crate::rating::{rating_label, stars};
use crate::session::use_services;
use crate::strings::{NO_DESCRIPTION, NO_RATING, PROFILE_NOT_FOUND};

/// What the rating slot shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RatingDisplay {
    /// Nothing loaded yet.
    #[default]
    Blank,
    Stars { stars: String, label: String },
    NoRating,
}

/// Every field of the profile page. Starts blank; a failed load only
/// touches `about`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    pub name: String,
    pub category_city: String,
    pub rating: RatingDisplay,
    pub about: String,
    pub socials: Vec<(String, String)>,
    /// Set after a successful load; scopes the profile's post feed.
    pub loaded_user: Option<String>,
}

impl ProfileState {
    pub fn apply(&mut self, result: Result<Contractor, ApiError>) {
        match result {
            Ok(contractor) => {
                self.name = contractor.display_name().to_string();
                self.category_city = contractor.category_city();
                self.rating = match rating_label(contractor.rating) {
                    Some(label) => RatingDisplay::Stars {
                        stars: stars(contractor.rating_value()),
                        label,
                    },
                    None => RatingDisplay::NoRating,
                };
                self.about = match contractor.description() {
                    "" => NO_DESCRIPTION.to_string(),
                    text => text.to_string(),
                };
                self.socials = contractor.social_links();
                self.loaded_user = Some(contractor.username);
            }
            Err(e) => {
                tracing::error!("failed to load profile: {}", e);
                self.about = PROFILE_NOT_FOUND.to_string();
            }
        }
    }
}

pub async fn load_profile(
    api: &impl MarketplaceApi,
    username: &str,
) -> Result<Contractor, ApiError> {
    api.get_contractor(username).await
}

/// Contractor profile page. An empty `username` leaves the page blank.
#[component]
pub fn ProfileView(username: ReadOnlySignal<String>) -> Element {
    let services = use_services();
    let guard = use_hook(LoadGuard::default);
    let mut profile = use_signal(ProfileState::default);

    use_effect(move || {
        let username = username();
        if username.is_empty() {
            return;
        }
        let ticket = guard.begin();
        let api = services.api.clone();
        let guard = guard.clone();
        spawn(async move {
            let result = load_profile(&api, &username).await;
            if guard.is_current(ticket) {
                profile.write().apply(result);
            }
        });
    });

    let state = profile();

    rsx! {
        div {
            id: "profileHeader",
            class: "bg-white rounded-lg shadow p-6 flex items-center",
            img {
                class: "w-20 h-20 rounded-full object-cover",
                src: "https://via.placeholder.com/100",
                alt: "avatar",
            }
            div {
                class: "ml-6",
                h1 { id: "profileName", class: "text-2xl font-bold", "{state.name}" }
                p { id: "profileCategoryCity", class: "text-gray-500", "{state.category_city}" }
                div {
                    id: "profileRating",
                    class: "flex items-center text-yellow-400 mt-1",
                    {match state.rating {
                        RatingDisplay::Blank => rsx! {},
                        RatingDisplay::Stars { stars, label } => rsx! {
                            span { "{stars}" }
                            span { class: "text-gray-600 ml-1", "{label}" }
                        },
                        RatingDisplay::NoRating => rsx! {
                            span { class: "text-gray-600", "{NO_RATING}" }
                        },
                    }}
                }
                div {
                    id: "profileSocials",
                    class: "mt-2",
                    for (label, url) in state.socials {
                        a {
                            key: "{label}",
                            class: "text-blue-600 hover:underline mr-4",
                            href: paths::safe_url(&url).to_string(),
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{label}"
                        }
                    }
                }
            }
        }

        div {
            id: "profileAbout",
            class: "bg-white rounded-lg shadow p-6 mt-6",
            h2 { class: "text-xl font-semibold mb-2", "О себе" }
            p { class: "text-gray-700", "{state.about}" }
        }

        if let Some(user) = state.loaded_user {
            div {
                class: "mt-6",
                h2 { class: "text-xl font-semibold mb-4", "Публикации" }
                PostFeed {
                    username: Some(user),
                    version: 0u32,
                    container_id: "profilePostsContainer",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ivan() -> Contractor {
        serde_json::from_str(
            r#"{"username":"ivan","full_name":"Иван Петров","category":"Сантехника","city":"Казань",
                "description":"Опыт 10 лет","rating":4.7,
                "socials":{"telegram":"https://t.me/ivan","vk":"https://vk.com/ivan"}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_successful_load_fills_every_field() {
        let mut state = ProfileState::default();
        state.apply(Ok(ivan()));
        assert_eq!(state.name, "Иван Петров");
        assert_eq!(state.category_city, "Сантехника · Казань");
        assert_eq!(
            state.rating,
            RatingDisplay::Stars {
                stars: "★★★★★".into(),
                label: "4.7".into()
            }
        );
        assert_eq!(state.about, "Опыт 10 лет");
        assert_eq!(
            state.socials,
            vec![
                ("telegram".to_string(), "https://t.me/ivan".to_string()),
                ("vk".to_string(), "https://vk.com/ivan".to_string()),
            ]
        );
        assert_eq!(state.loaded_user.as_deref(), Some("ivan"));
    }

    #[test]
    fn test_missing_rating_and_description_fallbacks() {
        let mut state = ProfileState::default();
        state.apply(Ok(Contractor {
            username: "zed".into(),
            rating: Some(0.0),
            ..Default::default()
        }));
        assert_eq!(state.name, "zed");
        assert_eq!(state.rating, RatingDisplay::NoRating);
        assert_eq!(state.about, "Описание отсутствует");
        assert!(state.socials.is_empty());
    }

    #[test]
    fn test_not_found_only_touches_about() {
        let mut state = ProfileState::default();
        state.apply(Ok(ivan()));
        let before = state.clone();

        state.apply(Err(ApiError::Http {
            status: 404,
            detail: Some("Not Found".into()),
        }));
        assert_eq!(state.about, "Профиль не найден.");
        assert_eq!(state.name, before.name);
        assert_eq!(state.rating, before.rating);
        assert_eq!(state.socials, before.socials);
        assert_eq!(state.loaded_user, before.loaded_user);
    }

    #[test]
    fn test_network_failure_on_blank_page() {
        let mut state = ProfileState::default();
        state.apply(Err(ApiError::Network("offline".into())));
        assert_eq!(state.about, "Профиль не найден.");
        assert_eq!(state.name, "");
        assert_eq!(state.rating, RatingDisplay::Blank);
        assert!(state.loaded_user.is_none());
    }
}
