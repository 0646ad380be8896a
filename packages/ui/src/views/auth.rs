use api::actions::{self, LoginForm, RegisterForm};
use dioxus::prelude::*;

use crate::browser::{alert, go_to, report_failure};
use crate::paths;
use crate::session::{use_services, use_session, SessionState};
use crate::strings::{LOGIN_FAILED, LOGIN_OK, REGISTER_FAILED, REGISTER_OK};

/// Registration page. On success the user is sent to the login page.
#[component]
pub fn RegisterView() -> Element {
    let services = use_services();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = services.api.clone();
        let form = RegisterForm {
            username: username(),
            email: email(),
            password: password(),
        };
        spawn(async move {
            match actions::register(&api, form).await {
                Ok(()) => {
                    alert(REGISTER_OK);
                    go_to(paths::LOGIN);
                }
                Err(e) => report_failure(e, "", REGISTER_FAILED),
            }
        });
    };

    rsx! {
        div {
            class: "max-w-md mx-auto bg-white rounded-lg shadow p-8",
            h1 { class: "text-2xl font-bold mb-6", "Регистрация" }
            form {
                id: "registerForm",
                class: "space-y-4",
                onsubmit: handle_submit,
                input {
                    id: "username",
                    class: "w-full border rounded px-3 py-2",
                    r#type: "text",
                    placeholder: "Имя пользователя",
                    required: true,
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                input {
                    id: "email",
                    class: "w-full border rounded px-3 py-2",
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    id: "password",
                    class: "w-full border rounded px-3 py-2",
                    r#type: "password",
                    placeholder: "Пароль",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    class: "w-full bg-blue-600 text-white rounded px-4 py-2 hover:bg-blue-700",
                    r#type: "submit",
                    "Зарегистрироваться"
                }
            }
            p {
                class: "mt-4 text-sm text-gray-600",
                "Уже есть аккаунт? "
                a { class: "text-blue-600 hover:underline", href: paths::LOGIN, "Войти" }
            }
        }
    }
}

/// Login page. Persists the returned username and goes home on success.
#[component]
pub fn LoginView() -> Element {
    let services = use_services();
    let mut session_state = use_session();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let services = services.clone();
        let form = LoginForm {
            username: username(),
            password: password(),
        };
        spawn(async move {
            match actions::login(&services.api, &services.session, form).await {
                Ok(user) => {
                    session_state.set(SessionState { user: Some(user) });
                    alert(LOGIN_OK);
                    go_to(paths::HOME);
                }
                Err(e) => report_failure(e, "", LOGIN_FAILED),
            }
        });
    };

    rsx! {
        div {
            class: "max-w-md mx-auto bg-white rounded-lg shadow p-8",
            h1 { class: "text-2xl font-bold mb-6", "Вход" }
            form {
                id: "loginForm",
                class: "space-y-4",
                onsubmit: handle_submit,
                input {
                    id: "username",
                    class: "w-full border rounded px-3 py-2",
                    r#type: "text",
                    placeholder: "Имя пользователя",
                    required: true,
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                input {
                    id: "password",
                    class: "w-full border rounded px-3 py-2",
                    r#type: "password",
                    placeholder: "Пароль",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    class: "w-full bg-blue-600 text-white rounded px-4 py-2 hover:bg-blue-700",
                    r#type: "submit",
                    "Войти"
                }
            }
            p {
                class: "mt-4 text-sm text-gray-600",
                "Нет аккаунта? "
                a { class: "text-blue-600 hover:underline", href: paths::REGISTER, "Зарегистрироваться" }
            }
        }
    }
}
