use dioxus::prelude::*;
use store::{Recipe, RecipeId};

use crate::icons::{FaArrowLeft, FaPenToSquare, FaPrint, FaTrashCan};
use crate::{browser, load_failure_message, use_session, Icon, LoadState};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared recipe detail view.
///
/// Loads one recipe, toggles its favorite flag in place, deletes it, and
/// prints the page. Platform packages provide the navigation callbacks.
#[component]
pub fn RecipeDetailView(
    id: RecipeId,
    /// Called after deleting and from the Back button: go to the listing.
    on_back: EventHandler<()>,
    on_edit: EventHandler<RecipeId>,
) -> Element {
    let mut session = use_session();

    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let mut state = use_signal(|| LoadState::<Recipe>::Loading);

    let _loader = use_resource(move || {
        let id = id_signal();
        async move {
            state.set(LoadState::Loading);
            let result = session.client().get_recipe(&id).await;
            if let Err(e) = &result {
                session.report("Failed to load recipe", e);
            }
            state.set(LoadState::from_result(result, |e| load_failure_message(&e)));
        }
    });

    let toggle_favorite = move |_| {
        let id = id_signal.peek().clone();
        spawn(async move {
            match session.client().toggle_favorite(&id).await {
                Ok(updated) => state.set(LoadState::Ready(updated)),
                Err(e) => session.report("Failed to toggle favorite", &e),
            }
        });
    };

    let delete_recipe = move |_| {
        if !browser::confirm("Delete this recipe?") {
            return;
        }
        let id = id_signal.peek().clone();
        spawn(async move {
            match session.client().delete_recipe(&id).await {
                Ok(()) => on_back.call(()),
                Err(e) => session.report("Failed to delete recipe", &e),
            }
        });
    };

    let recipe = match state() {
        LoadState::Loading => {
            return rsx! {
                div { class: "page-status", "Loading..." }
            };
        }
        LoadState::Failed(message) => {
            return rsx! {
                document::Link { rel: "stylesheet", href: VIEWS_CSS }
                div {
                    class: "page-narrow",
                    div { class: "alert alert-danger", "{message}" }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_back.call(()),
                        "← Back"
                    }
                }
            };
        }
        LoadState::Ready(recipe) => recipe,
    };

    let heart = if recipe.is_favorite { "❤️" } else { "🤍" };
    let edit_id = recipe.id.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "recipe-detail",

            if let Some(url) = recipe.image_url.as_deref() {
                img { class: "recipe-detail-image", src: "{url}", alt: "{recipe.title}" }
            } else {
                div { class: "recipe-detail-placeholder", "🍳" }
            }

            div {
                class: "recipe-detail-body",

                div {
                    class: "recipe-detail-header",
                    div {
                        h1 { class: "recipe-detail-title", "{recipe.title}" }
                        if let Some(category) = recipe.category {
                            span { class: "badge", {format!("{} {}", category.emoji(), category)} }
                        }
                    }
                    button {
                        class: "favorite-btn favorite-btn-large",
                        title: "Toggle favorite",
                        onclick: toggle_favorite,
                        "{heart}"
                    }
                }

                if let Some(description) = recipe.description.as_deref() {
                    p { class: "recipe-detail-description", "{description}" }
                }

                div {
                    class: "recipe-meta",
                    if let Some(prep) = recipe.prep_minutes() {
                        div { strong { "⏱️ Prep Time:" } br {} "{prep} min" }
                    }
                    if let Some(cook) = recipe.cook_minutes() {
                        div { strong { "🔥 Cook Time:" } br {} "{cook} min" }
                    }
                    if let Some(servings) = recipe.serving_count() {
                        div { strong { "🍽️ Servings:" } br {} "{servings}" }
                    }
                    if recipe.rating > 0 {
                        div { strong { "⭐ Rating:" } br {} {recipe.rating_glyphs()} }
                    }
                }

                hr {}

                h3 { "📝 Ingredients" }
                ul {
                    class: "ingredient-list",
                    for (index, ingredient) in recipe.ingredient_list().into_iter().enumerate() {
                        li { key: "{index}", "{ingredient}" }
                    }
                }

                h3 { "👨‍🍳 Instructions" }
                ol {
                    class: "step-list",
                    for (index, step) in recipe.step_list().into_iter().enumerate() {
                        li { key: "{index}", "{step}" }
                    }
                }

                if let Some(notes) = recipe.notes.as_deref() {
                    h3 { "📌 Notes" }
                    p { class: "recipe-detail-notes", "{notes}" }
                }

                hr {}

                div {
                    class: "recipe-detail-actions no-print",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_edit.call(edit_id.clone()),
                        Icon { icon: FaPenToSquare, width: 14, height: 14 }
                        " Edit"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: delete_recipe,
                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                        " Delete"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| browser::print_page(),
                        Icon { icon: FaPrint, width: 14, height: 14 }
                        " Print"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_back.call(()),
                        Icon { icon: FaArrowLeft, width: 14, height: 14 }
                        " Back"
                    }
                }
            }
        }
    }
}
