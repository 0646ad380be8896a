use dioxus::prelude::*;

use crate::contractors::ContractorDirectory;

#[component]
pub fn DirectoryView() -> Element {
    rsx! {
        h1 { class: "text-2xl font-bold mb-6", "Исполнители" }
        ContractorDirectory {}
    }
}
