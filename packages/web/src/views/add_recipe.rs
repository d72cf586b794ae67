use dioxus::prelude::*;
use ui::views::AddRecipeView;

use crate::Route;

#[component]
pub fn AddRecipe() -> Element {
    let nav = use_navigator();

    rsx! {
        AddRecipeView {
            on_saved: move |_| {
                nav.push(Route::Dashboard {});
            },
            on_cancel: move |_| {
                nav.push(Route::Dashboard {});
            },
        }
    }
}
