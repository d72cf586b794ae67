use api::{ApiError, RecipeQuery, RequestSequence};
use dioxus::prelude::*;
use store::{Category, Recipe, RecipeId};

use crate::{browser, use_session, CategoryOptions, RecipeCard};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Inline notice for the latest listing response. A successful re-fetch
/// clears it; the previous grid stays visible under a failure.
fn listing_notice(result: &Result<Vec<Recipe>, ApiError>) -> Option<String> {
    result
        .as_ref()
        .err()
        .map(|e| e.user_message("Failed to load recipes"))
}

/// Recipe listing with search, category and favorites filters.
///
/// Every filter change re-queries the backend. Toggling a favorite or
/// deleting re-fetches the whole list afterwards.
#[component]
pub fn DashboardView(
    on_open_recipe: EventHandler<RecipeId>,
    on_edit_recipe: EventHandler<RecipeId>,
    on_add_recipe: EventHandler<()>,
) -> Element {
    let mut session = use_session();
    let mut search = use_signal(String::new);
    let mut category = use_signal(|| Option::<Category>::None);
    let mut favorites_only = use_signal(|| false);
    let mut recipes = use_signal(Vec::<Recipe>::new);
    let mut loaded = use_signal(|| false);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut sequence = use_signal(RequestSequence::new);
    // bumped to re-fetch after a mutation
    let mut reload = use_signal(|| 0u32);

    let _listing = use_resource(move || {
        let query = RecipeQuery {
            search: search(),
            category: category(),
            favorites_only: favorites_only(),
        };
        let _ = reload();
        let ticket = sequence.write().issue();
        async move {
            let result = session.client().list_recipes(&query).await;
            if !sequence.peek().is_current(ticket) {
                tracing::debug!("Discarding stale recipe listing");
                return;
            }
            load_error.set(listing_notice(&result));
            match result {
                Ok(list) => {
                    recipes.set(list);
                    loaded.set(true);
                }
                Err(e) => session.report("Failed to load recipes", &e),
            }
        }
    });

    let toggle_favorite = move |id: RecipeId| {
        spawn(async move {
            match session.client().toggle_favorite(&id).await {
                Ok(_) => reload += 1,
                Err(e) => session.report("Failed to toggle favorite", &e),
            }
        });
    };

    let delete_recipe = move |id: RecipeId| {
        if !browser::confirm("Delete this recipe?") {
            return;
        }
        spawn(async move {
            match session.client().delete_recipe(&id).await {
                Ok(()) => reload += 1,
                Err(e) => session.report("Failed to delete recipe", &e),
            }
        });
    };

    let category_value = category().map(|c| c.as_str()).unwrap_or_default();
    let favorites_class = if favorites_only() {
        "btn btn-favorites active"
    } else {
        "btn btn-favorites"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "container",

            div {
                class: "page-header",
                h2 { class: "page-title", "🍽️ My Recipes" }
                button {
                    class: "btn btn-add-recipe",
                    onclick: move |_| on_add_recipe.call(()),
                    "+ Add Recipe"
                }
            }

            div {
                class: "filters",
                input {
                    class: "form-control filter-search",
                    r#type: "text",
                    placeholder: "🔍 Search recipes...",
                    value: "{search}",
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
                select {
                    class: "form-select filter-category",
                    value: "{category_value}",
                    onchange: move |evt: FormEvent| category.set(evt.value().parse().ok()),
                    CategoryOptions { placeholder: "All Categories" }
                }
                button {
                    class: "{favorites_class}",
                    onclick: move |_| favorites_only.toggle(),
                    if favorites_only() { "❤️ Favorites" } else { "🤍 All" }
                }
            }

            if let Some(message) = load_error() {
                div { class: "alert alert-danger", "{message}" }
            }

            div {
                class: "recipe-grid",
                for recipe in recipes() {
                    RecipeCard {
                        key: "{recipe.id}",
                        recipe: recipe.clone(),
                        on_open: move |id: RecipeId| on_open_recipe.call(id),
                        on_toggle_favorite: toggle_favorite,
                        on_edit: move |id: RecipeId| on_edit_recipe.call(id),
                        on_delete: delete_recipe,
                    }
                }
            }

            if loaded() && recipes.read().is_empty() {
                div {
                    class: "empty-state",
                    div { class: "empty-state-icon", "🍳" }
                    h3 { "No recipes yet!" }
                    p { "Start by adding your first delicious recipe" }
                }
            }
        }
    }
}
