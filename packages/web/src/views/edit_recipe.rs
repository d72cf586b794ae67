use dioxus::prelude::*;
use store::RecipeId;
use ui::views::EditRecipeView;

use crate::Route;

#[component]
pub fn EditRecipe(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        EditRecipeView {
            id: RecipeId::from(id),
            on_saved: move |_| {
                nav.push(Route::Dashboard {});
            },
            on_cancel: move |_| {
                nav.push(Route::Dashboard {});
            },
        }
    }
}
