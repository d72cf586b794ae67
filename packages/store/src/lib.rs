pub mod config;
pub mod draft;
pub mod models;
pub mod session;

mod lenient;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::AppConfig;
pub use draft::{PersonalFields, RecipeDraft, RecipePayload};
pub use models::{split_lines, Category, Recipe, RecipeId, Session, UserProfile};
pub use session::{KeyValueStorage, SessionStore, StoreError};
