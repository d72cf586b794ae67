use dioxus::prelude::*;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn NotFoundView(path: String, on_home: EventHandler<()>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "empty-state",
            div { class: "empty-state-icon", "🥄" }
            h3 { "Page not found" }
            p { "Nothing lives at /{path}" }
            button {
                class: "btn btn-primary",
                onclick: move |_| on_home.call(()),
                "Go to my recipes"
            }
        }
    }
}
