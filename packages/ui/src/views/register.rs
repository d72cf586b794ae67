//! Registration page view with email/password form.

use api::RegisterRequest;
use dioxus::prelude::*;

use crate::use_session;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn RegisterView(on_signed_in: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let mut session = use_session();
    let brand = session.brand();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        if session.is_authenticated() {
            on_signed_in.call(());
        }
    });

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Password is required".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            let request = RegisterRequest {
                name: n,
                email: e,
                password: p,
            };
            match session.client().register(&request).await {
                Ok(signed_in) => {
                    loading.set(false);
                    session.sign_in(signed_in);
                }
                Err(e) => {
                    tracing::error!("Registration failed: {}", e);
                    loading.set(false);
                    error.set(Some(e.user_message("Registration failed")));
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "auth-container",

            h1 { class: "auth-title", "Create Account" }
            p { class: "auth-subtitle", "Sign up for {brand}" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    div { class: "alert alert-danger", "{err}" }
                }

                input {
                    class: "form-control",
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                input {
                    class: "form-control",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "form-control",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    class: "form-control",
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                a {
                    href: "#",
                    onclick: move |evt: Event<MouseData>| {
                        evt.prevent_default();
                        on_login.call(());
                    },
                    "Sign in"
                }
            }
        }
    }
}
