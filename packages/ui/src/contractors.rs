use api::{Contractor, DirectoryQuery, MarketplaceApi};
use dioxus::prelude::*;

use crate::loader::{use_guarded_loader, ListState};
use crate::paths;
use crate::rating::RatingStars;
use crate::session::use_services;
use crate::strings::{CATEGORIES, CONTRACTORS_FAILED, NOTHING_FOUND, VIEW_PROFILE};

/// Fetch the whole collection and narrow it with `query`.
pub async fn load_contractors(
    api: &impl MarketplaceApi,
    query: &DirectoryQuery,
) -> ListState<Contractor> {
    let result = api
        .list_contractors()
        .await
        .map(|contractors| query.apply(contractors));
    ListState::from_result("contractors", result)
}

/// Card for one contractor in the directory.
#[component]
pub fn ContractorCard(contractor: Contractor) -> Element {
    let name = contractor.display_name().to_string();
    let subtitle = contractor.category_city();
    let description = contractor.description().to_string();
    let profile = paths::profile(&contractor.username);

    rsx! {
        div {
            class: "contractor-card bg-white rounded-lg shadow border hover:shadow-lg transition p-5",
            div {
                class: "flex items-center mb-4",
                img {
                    class: "w-12 h-12 rounded-full object-cover",
                    src: "https://via.placeholder.com/60",
                    alt: "avatar",
                }
                div {
                    class: "ml-3",
                    h3 { class: "text-lg font-semibold", "{name}" }
                    p { class: "text-sm text-gray-500", "{subtitle}" }
                    div {
                        class: "flex items-center text-sm mt-1",
                        RatingStars { rating: contractor.rating }
                    }
                }
            }
            p { class: "text-gray-600", "{description}" }
            a {
                class: "mt-4 inline-block text-blue-600 hover:underline",
                href: "{profile}",
                "{VIEW_PROFILE}"
            }
        }
    }
}

/// Renders a contractor list state into its container.
#[component]
pub fn ContractorList(state: ListState<Contractor>) -> Element {
    rsx! {
        div {
            id: "contractorList",
            class: "grid gap-6 md:grid-cols-2 lg:grid-cols-3",
            {match state {
                ListState::Loading => rsx! {},
                ListState::Empty => rsx! {
                    p { class: "text-gray-600", "{NOTHING_FOUND}" }
                },
                ListState::Failed => rsx! {
                    p { class: "text-red-600", "{CONTRACTORS_FAILED}" }
                },
                ListState::Ready(contractors) => rsx! {
                    for (index, contractor) in contractors.into_iter().enumerate() {
                        ContractorCard {
                            key: "{index}-{contractor.username}",
                            contractor: contractor,
                        }
                    }
                },
            }}
        }
    }
}

/// Search form plus the contractor list it drives.
#[component]
pub fn ContractorDirectory() -> Element {
    let services = use_services();
    let mut text = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut sort = use_signal(String::new);
    let mut query = use_signal(DirectoryQuery::default);

    let contractors = use_guarded_loader(move || {
        let current = query();
        let api = services.api.clone();
        async move { load_contractors(&api, &current).await }
    });

    let handle_search = move |evt: FormEvent| {
        evt.prevent_default();
        query.set(DirectoryQuery::new(&text(), &category(), &sort()));
    };

    rsx! {
        form {
            class: "flex flex-wrap gap-3 mb-6",
            onsubmit: handle_search,
            input {
                id: "searchQuery",
                class: "flex-1 border rounded px-3 py-2",
                r#type: "text",
                placeholder: "Имя, услуга или описание",
                value: text(),
                oninput: move |evt: FormEvent| text.set(evt.value()),
            }
            select {
                id: "searchCategory",
                class: "border rounded px-3 py-2",
                value: category(),
                onchange: move |evt: FormEvent| category.set(evt.value()),
                option { value: "", "Все категории" }
                for name in CATEGORIES.iter() {
                    option { key: "{name}", value: "{name}", "{name}" }
                }
            }
            select {
                id: "searchSort",
                class: "border rounded px-3 py-2",
                value: sort(),
                onchange: move |evt: FormEvent| sort.set(evt.value()),
                option { value: "", "Без сортировки" }
                option { value: "rating", "По рейтингу" }
                option { value: "experience", "По опыту" }
                option { value: "name", "По имени" }
            }
            button {
                id: "searchButton",
                class: "bg-blue-600 text-white rounded px-4 py-2 hover:bg-blue-700",
                r#type: "submit",
                "Найти"
            }
        }

        ContractorList { state: contractors() }
    }
}
