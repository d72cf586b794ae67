//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod browser;
pub mod page_state;
pub mod views;

mod session;
pub use session::{make_session_store, use_session, SessionContext, SessionProvider};

mod guard;
pub use guard::{access_for, Access, RequireSession};

mod navbar;
pub use navbar::Navbar;

mod category;
pub use category::CategoryOptions;

mod star_rating;
pub use star_rating::{star_glyph, StarRating};

mod recipe_card;
pub use recipe_card::RecipeCard;

mod recipe_form;
pub use recipe_form::RecipeForm;

pub use page_state::{load_failure_message, LoadState, SubmitState};
