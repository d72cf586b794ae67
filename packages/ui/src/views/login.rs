//! Login page view with email/password form.

use api::LoginRequest;
use dioxus::prelude::*;

use crate::use_session;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn LoginView(
    /// Called after signing in, and on mount when a session already exists.
    on_signed_in: EventHandler<()>,
    on_register: EventHandler<()>,
) -> Element {
    let mut session = use_session();
    let brand = session.brand();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go to the dashboard
    use_effect(move || {
        if session.is_authenticated() {
            on_signed_in.call(());
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            let request = LoginRequest {
                email: e,
                password: p,
            };
            match session.client().login(&request).await {
                Ok(signed_in) => {
                    loading.set(false);
                    session.sign_in(signed_in);
                }
                Err(e) => {
                    tracing::error!("Login failed: {}", e);
                    loading.set(false);
                    error.set(Some(if e.is_unauthorized() {
                        "Invalid email or password".to_string()
                    } else {
                        e.user_message("Login failed")
                    }));
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "auth-container",

            h1 { class: "auth-title", "🍳 {brand}" }
            p { class: "auth-subtitle", "Sign in to your recipes" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "alert alert-danger", "{err}" }
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

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                a {
                    href: "#",
                    onclick: move |evt: Event<MouseData>| {
                        evt.prevent_default();
                        on_register.call(());
                    },
                    "Sign up"
                }
            }
        }
    }
}
