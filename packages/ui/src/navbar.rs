use dioxus::prelude::*;

use crate::icons::FaRightFromBracket;
use crate::{use_session, Icon};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top bar with the brand, the signed-in user's name and a logout button.
#[component]
pub fn Navbar(on_logout: EventHandler<()>) -> Element {
    let mut session = use_session();
    let brand = session.brand();
    let name = session
        .user()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            div {
                class: "navbar-inner",
                span { class: "navbar-brand", "🍳 {brand}" }
                div {
                    class: "navbar-user",
                    span { class: "navbar-welcome", "Welcome, {name}" }
                    button {
                        class: "btn btn-light btn-sm",
                        onclick: move |_| {
                            session.sign_out();
                            on_logout.call(());
                        },
                        Icon { icon: FaRightFromBracket, width: 12, height: 12 }
                        " Logout"
                    }
                }
            }
        }
    }
}
