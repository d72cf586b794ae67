use dioxus::prelude::*;
use store::{Recipe, RecipeId};

use crate::icons::{FaPenToSquare, FaTrashCan};
use crate::Icon;

/// Dashboard card. Clicking the card opens the recipe; its buttons do not
/// bubble up to the card.
#[component]
pub fn RecipeCard(
    recipe: Recipe,
    on_open: EventHandler<RecipeId>,
    on_toggle_favorite: EventHandler<RecipeId>,
    on_edit: EventHandler<RecipeId>,
    on_delete: EventHandler<RecipeId>,
) -> Element {
    let open_id = recipe.id.clone();
    let favorite_id = recipe.id.clone();
    let edit_id = recipe.id.clone();
    let delete_id = recipe.id.clone();
    let heart = if recipe.is_favorite { "❤️" } else { "🤍" };
    let timing = recipe.timing_summary();

    rsx! {
        div {
            class: "recipe-card",
            onclick: move |_| on_open.call(open_id.clone()),

            div {
                class: "recipe-card-media",
                if let Some(url) = recipe.image_url.as_deref() {
                    img { src: "{url}", alt: "{recipe.title}" }
                } else {
                    div { class: "recipe-card-placeholder", "🍳" }
                }
                button {
                    class: "favorite-btn",
                    title: "Toggle favorite",
                    onclick: move |evt: Event<MouseData>| {
                        evt.stop_propagation();
                        on_toggle_favorite.call(favorite_id.clone());
                    },
                    "{heart}"
                }
            }

            div {
                class: "recipe-card-body",
                h3 { class: "recipe-card-title", "{recipe.title}" }
                if let Some(category) = recipe.category {
                    span { class: "badge", {format!("{} {}", category.emoji(), category)} }
                }
                if let Some(description) = recipe.description.as_deref() {
                    p { class: "recipe-card-description", "{description}" }
                }
                if let Some(timing) = timing {
                    p { class: "recipe-card-timing", "{timing}" }
                }
                div {
                    class: "recipe-card-actions",
                    button {
                        class: "btn btn-outline btn-sm",
                        onclick: move |evt: Event<MouseData>| {
                            evt.stop_propagation();
                            on_edit.call(edit_id.clone());
                        },
                        Icon { icon: FaPenToSquare, width: 12, height: 12 }
                        " Edit"
                    }
                    button {
                        class: "btn btn-danger btn-sm",
                        onclick: move |evt: Event<MouseData>| {
                            evt.stop_propagation();
                            on_delete.call(delete_id.clone());
                        },
                        Icon { icon: FaTrashCan, width: 12, height: 12 }
                        " Delete"
                    }
                }
            }
        }
    }
}
