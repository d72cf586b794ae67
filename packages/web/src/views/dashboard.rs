use dioxus::prelude::*;
use store::RecipeId;
use ui::views::DashboardView;

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();

    rsx! {
        DashboardView {
            on_open_recipe: move |id: RecipeId| {
                nav.push(Route::RecipeDetail { id: id.to_string() });
            },
            on_edit_recipe: move |id: RecipeId| {
                nav.push(Route::EditRecipe { id: id.to_string() });
            },
            on_add_recipe: move |_| {
                nav.push(Route::AddRecipe {});
            },
        }
    }
}
