use dioxus::prelude::*;

use store::AppConfig;
use ui::SessionProvider;
use views::{AddRecipe, Dashboard, EditRecipe, Guarded, Login, NotFound, RecipeDetail, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(Guarded)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/add-recipe")]
        AddRecipe {},
        #[route("/edit-recipe/:id")]
        EditRecipe { id: String },
        #[route("/recipe/:id")]
        RecipeDetail { id: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../recipes.toml");

fn main() {
    dioxus::launch(App);
}

/// Parse the bundled config, falling back to defaults.
fn load_config() -> AppConfig {
    match AppConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {}", AppConfig::filename(), e);
            AppConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "{config.ui.brand}" }

        SessionProvider {
            config: config.clone(),
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/dashboard`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}
