use api::actions::{self, PostForm};
use api::{MarketplaceApi, Post, SubmitError};
use dioxus::prelude::*;

use crate::browser::report_failure;
use crate::files::PickedFile;
use crate::loader::{use_guarded_loader, ListState};
use crate::paths;
use crate::session::use_services;
use crate::strings::{FEED_FAILED, FILE_READ_FAILED, NO_POSTS, POST_FAILED, POST_SIGN_IN, VIEW_PROFILE};

/// Fetch the feed, optionally only one author's posts.
pub async fn load_posts(api: &impl MarketplaceApi, username: Option<&str>) -> ListState<Post> {
    ListState::from_result("posts", api.list_posts(username).await)
}

#[component]
pub fn PostCard(post: Post) -> Element {
    let profile = paths::profile(&post.username);
    let image = post.image_src().map(paths::safe_url).map(str::to_string);

    rsx! {
        div {
            class: "post-card bg-white rounded-lg shadow px-6 py-6",
            div {
                class: "flex items-center mb-4",
                img {
                    class: "w-10 h-10 rounded-full object-cover",
                    src: "https://via.placeholder.com/50",
                    alt: "avatar",
                }
                div {
                    class: "ml-3",
                    p { class: "font-semibold", "{post.username}" }
                    p { class: "text-sm text-gray-500", "#{post.id}" }
                }
            }
            p { class: "text-gray-700 mb-4", "{post.content}" }
            if let Some(src) = image {
                img { class: "w-full rounded-lg", src: "{src}", alt: "post image" }
            }
            div {
                class: "flex items-center justify-between mt-4 text-sm text-gray-600",
                div {
                    class: "flex space-x-4",
                    button { class: "flex items-center focus:outline-none", "❤️ " span { class: "ml-1", "0" } }
                    button { class: "flex items-center focus:outline-none", "💬 " span { class: "ml-1", "0" } }
                }
                a { class: "text-blue-600 hover:underline", href: "{profile}", "{VIEW_PROFILE}" }
            }
        }
    }
}

/// Post feed loader. Reloads whenever `username` or `version` changes.
#[component]
pub fn PostFeed(
    username: ReadOnlySignal<Option<String>>,
    version: ReadOnlySignal<u32>,
    #[props(default = "postsContainer".to_string())] container_id: String,
) -> Element {
    let services = use_services();

    let posts = use_guarded_loader(move || {
        let author = username();
        let _ = version();
        let api = services.api.clone();
        async move { load_posts(&api, author.as_deref()).await }
    });

    rsx! {
        PostList { state: posts(), container_id: container_id }
    }
}

/// Renders a post list state into the container `container_id`.
#[component]
pub fn PostList(state: ListState<Post>, container_id: String) -> Element {
    rsx! {
        div {
            id: "{container_id}",
            class: "space-y-6",
            {match state {
                ListState::Loading => rsx! {},
                ListState::Empty => rsx! {
                    p { class: "text-gray-600", "{NO_POSTS}" }
                },
                ListState::Failed => rsx! {
                    p { class: "text-red-600", "{FEED_FAILED}" }
                },
                ListState::Ready(posts) => rsx! {
                    for (index, post) in posts.into_iter().enumerate() {
                        PostCard { key: "{index}-{post.id}", post: post }
                    }
                },
            }}
        }
    }
}

/// Composer for a new post. Calls `on_published` after a successful submit,
/// once the form is cleared.
#[component]
pub fn PostComposer(on_published: EventHandler<()>) -> Element {
    let services = use_services();
    let mut content = use_signal(String::new);
    let mut picked = use_signal(|| Option::<PickedFile>::None);
    let mut file_input_generation = use_signal(|| 0u32);
    let mut sending = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let services = services.clone();
        spawn(async move {
            if actions::require_user(&services.session).is_err() {
                report_failure(SubmitError::SignInRequired, POST_SIGN_IN, POST_FAILED);
                return;
            }

            sending.set(true);
            let image = match picked() {
                Some(file) => match file.to_data_url().await {
                    Ok(url) => Some(url),
                    Err(e) => {
                        tracing::error!("{}: {}", FILE_READ_FAILED, e);
                        None
                    }
                },
                None => None,
            };
            let form = PostForm {
                content: content(),
                image,
            };

            match actions::publish_post(&services.api, &services.session, form).await {
                Ok(()) => {
                    content.set(String::new());
                    picked.set(None);
                    file_input_generation += 1;
                    on_published.call(());
                }
                Err(e) => report_failure(e, POST_SIGN_IN, POST_FAILED),
            }
            sending.set(false);
        });
    };

    rsx! {
        form {
            id: "postForm",
            class: "bg-white rounded-lg shadow p-6 space-y-4",
            onsubmit: handle_submit,
            textarea {
                id: "postContent",
                class: "w-full border rounded px-3 py-2",
                rows: 3,
                required: true,
                placeholder: "Поделитесь новостью или результатом работы",
                value: content(),
                oninput: move |evt: FormEvent| content.set(evt.value()),
            }
            // Re-keyed after each publish so the browser drops the picked file.
            for generation in [file_input_generation()] {
                input {
                    key: "{generation}",
                    id: "postImage",
                    r#type: "file",
                    accept: "image/*",
                    onchange: move |evt: FormEvent| {
                        picked.set(evt.files().and_then(PickedFile::first));
                    },
                }
            }
            button {
                class: "bg-blue-600 text-white rounded px-4 py-2 hover:bg-blue-700",
                r#type: "submit",
                disabled: sending(),
                "Опубликовать"
            }
        }
    }
}
