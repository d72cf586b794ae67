use dioxus::prelude::*;
use store::RecipeId;
use ui::views::RecipeDetailView;

use crate::Route;

#[component]
pub fn RecipeDetail(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        RecipeDetailView {
            id: RecipeId::from(id),
            on_back: move |_| {
                nav.push(Route::Dashboard {});
            },
            on_edit: move |id: RecipeId| {
                nav.push(Route::EditRecipe { id: id.to_string() });
            },
        }
    }
}
