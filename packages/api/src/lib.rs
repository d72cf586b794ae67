//! # API crate: typed client for the recipe backend
//!
//! Every page of the app talks to the backend through [`ApiClient`]. The
//! backend itself is an external REST service; this crate only knows its
//! contract.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: bearer credential, JSON bodies, recipe and auth endpoints |
//! | [`error`] | [`ApiError`] taxonomy and the user-facing message fallback |
//! | [`query`] | [`RecipeQuery`]: dashboard filters to collection query parameters |
//! | [`sequence`] | [`RequestSequence`]: drops responses to superseded requests |
//!
//! ## Endpoints
//!
//! | Method | Path | Body | Returns |
//! |--------|------|------|---------|
//! | `GET` | `/recipes?search=&category=&favorite=true` | | `[Recipe]` |
//! | `POST` | `/recipes` | [`store::RecipePayload`] | `Recipe` |
//! | `GET` | `/recipes/{id}` | | `Recipe` |
//! | `PUT` | `/recipes/{id}` | [`store::RecipePayload`] | `Recipe` |
//! | `PATCH` | `/recipes/{id}/favorite` | | `Recipe` |
//! | `DELETE` | `/recipes/{id}` | | |
//! | `POST` | `/auth/login` | [`LoginRequest`] | [`store::Session`] |
//! | `POST` | `/auth/register` | [`RegisterRequest`] | [`store::Session`] |

pub mod client;
pub mod error;
pub mod query;
pub mod sequence;

pub use client::{ApiClient, LoginRequest, RegisterRequest};
pub use error::ApiError;
pub use query::RecipeQuery;
pub use sequence::{RequestSequence, Ticket};

pub use store::{Category, Recipe, RecipeId, RecipePayload, Session, UserProfile};
