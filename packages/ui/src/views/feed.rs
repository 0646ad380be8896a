use dioxus::prelude::*;

use crate::posts::{PostComposer, PostFeed};
use crate::session::use_session;

/// Home page: the composer for signed-in users above the full feed.
#[component]
pub fn FeedView() -> Element {
    let session = use_session();
    let mut feed_version = use_signal(|| 0u32);
    let user = session().user;

    rsx! {
        h1 { class: "text-2xl font-bold mb-6", "Лента" }
        if user.is_some() {
            div {
                class: "mb-8",
                PostComposer { on_published: move |_| feed_version += 1 }
            }
        }
        PostFeed { username: None::<String>, version: feed_version }
    }
}
