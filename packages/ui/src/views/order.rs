use api::actions::{self, OrderForm};
use dioxus::prelude::*;

use crate::browser::{alert, go_to, report_failure};
use crate::paths;
use crate::session::use_services;
use crate::strings::{CATEGORIES, ORDER_FAILED, ORDER_OK, ORDER_SIGN_IN};

/// New order form. Signed-out submissions are sent to the login page
/// without a request.
#[component]
pub fn OrderView() -> Element {
    let services = use_services();
    let mut form = use_signal(OrderForm::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let services = services.clone();
        let values = form();
        spawn(async move {
            match actions::place_order(&services.api, &services.session, values).await {
                Ok(()) => {
                    alert(ORDER_OK);
                    go_to(paths::HOME);
                }
                Err(e) => report_failure(e, ORDER_SIGN_IN, ORDER_FAILED),
            }
        });
    };

    rsx! {
        div {
            class: "max-w-2xl mx-auto bg-white rounded-lg shadow p-8",
            h1 { class: "text-2xl font-bold mb-6", "Разместить заказ" }
            form {
                id: "orderForm",
                class: "space-y-4",
                onsubmit: handle_submit,
                input {
                    id: "title",
                    class: "w-full border rounded px-3 py-2",
                    r#type: "text",
                    placeholder: "Что нужно сделать",
                    required: true,
                    value: form().title,
                    oninput: move |evt: FormEvent| form.write().title = evt.value(),
                }
                select {
                    id: "category",
                    class: "w-full border rounded px-3 py-2",
                    required: true,
                    value: form().category,
                    onchange: move |evt: FormEvent| form.write().category = evt.value(),
                    option { value: "", "Выберите категорию" }
                    for name in CATEGORIES.iter() {
                        option { key: "{name}", value: "{name}", "{name}" }
                    }
                }
                textarea {
                    id: "description",
                    class: "w-full border rounded px-3 py-2",
                    rows: 4,
                    placeholder: "Подробности",
                    required: true,
                    value: form().description,
                    oninput: move |evt: FormEvent| form.write().description = evt.value(),
                }
                div {
                    class: "grid grid-cols-2 gap-4",
                    input {
                        id: "budget",
                        class: "border rounded px-3 py-2",
                        r#type: "number",
                        min: "0",
                        placeholder: "Бюджет, руб",
                        value: form().budget,
                        oninput: move |evt: FormEvent| form.write().budget = evt.value(),
                    }
                    input {
                        id: "deadline",
                        class: "border rounded px-3 py-2",
                        r#type: "date",
                        value: form().deadline,
                        oninput: move |evt: FormEvent| form.write().deadline = evt.value(),
                    }
                }
                input {
                    id: "address",
                    class: "w-full border rounded px-3 py-2",
                    r#type: "text",
                    placeholder: "Адрес",
                    value: form().address,
                    oninput: move |evt: FormEvent| form.write().address = evt.value(),
                }
                button {
                    class: "w-full bg-blue-600 text-white rounded px-4 py-2 hover:bg-blue-700",
                    r#type: "submit",
                    "Опубликовать заказ"
                }
            }
        }
    }
}
