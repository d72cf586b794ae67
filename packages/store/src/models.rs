//! # Domain models for recipes and sessions
//!
//! Defines the records exchanged with the recipe backend and held in the
//! browser session. All types are `Serialize + Deserialize` so they can be sent
//! over HTTP by the `api` crate and persisted by [`crate::SessionStore`].
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Recipe`] | A stored recipe as returned by the backend. Decoding is lenient, see [`crate::lenient`]. |
//! | [`RecipeId`] | The backend's opaque identifier, kept as text whether it arrives as a number or a string. |
//! | [`Category`] | One of the six meal categories, with its display emoji. |
//! | [`UserProfile`] | The signed-in user as reported by the auth endpoints. |
//! | [`Session`] | A credential token paired with its [`UserProfile`]. |
//!
//! [`split_lines`] turns a newline-delimited field (ingredients, steps) into
//! the ordered list shown on the detail page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::lenient;

/// Opaque recipe identifier assigned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecipeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecipeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Meal category of a recipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
    Snack,
    Beverage,
}

impl Category {
    /// All categories in the order the selectors list them.
    pub const ALL: [Category; 6] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Dinner,
        Category::Dessert,
        Category::Snack,
        Category::Beverage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::Dessert => "Dessert",
            Category::Snack => "Snack",
            Category::Beverage => "Beverage",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Breakfast => "🍳",
            Category::Lunch => "🥗",
            Category::Dinner => "🍽️",
            Category::Dessert => "🍰",
            Category::Snack => "🍿",
            Category::Beverage => "🥤",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a label is not one of the six categories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A recipe record as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(deserialize_with = "lenient::id")]
    pub id: RecipeId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description: Option<String>,
    /// One ingredient per line.
    #[serde(default, deserialize_with = "lenient::text")]
    pub ingredients: String,
    /// One instruction per line.
    #[serde(default, deserialize_with = "lenient::text")]
    pub steps: String,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::category")]
    pub category: Option<Category>,
    /// Minutes.
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub prep_time: Option<u32>,
    /// Minutes.
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub cook_time: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub servings: Option<u32>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_favorite: bool,
    /// 0 means unrated, otherwise 1-5.
    #[serde(default, deserialize_with = "lenient::rating")]
    pub rating: u8,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub notes: Option<String>,
}

impl Recipe {
    pub fn ingredient_list(&self) -> Vec<&str> {
        split_lines(&self.ingredients)
    }

    pub fn step_list(&self) -> Vec<&str> {
        split_lines(&self.steps)
    }

    /// Prep time when set to a positive number of minutes.
    pub fn prep_minutes(&self) -> Option<u32> {
        self.prep_time.filter(|m| *m > 0)
    }

    /// Cook time when set to a positive number of minutes.
    pub fn cook_minutes(&self) -> Option<u32> {
        self.cook_time.filter(|m| *m > 0)
    }

    pub fn serving_count(&self) -> Option<u32> {
        self.servings.filter(|s| *s > 0)
    }

    /// One ⭐ per rating point, empty when unrated.
    pub fn rating_glyphs(&self) -> String {
        "⭐".repeat(self.rating as usize)
    }

    /// Compact timing line for recipe cards, e.g. `⏱️ 15min • 🔥 30min`.
    pub fn timing_summary(&self) -> Option<String> {
        match (self.prep_minutes(), self.cook_minutes()) {
            (Some(prep), Some(cook)) => Some(format!("⏱️ {prep}min • 🔥 {cook}min")),
            (Some(prep), None) => Some(format!("⏱️ {prep}min")),
            (None, Some(cook)) => Some(format!("🔥 {cook}min")),
            (None, None) => None,
        }
    }
}

/// Split a newline-delimited field into its non-blank lines.
///
/// Lines are split on `\n` only and kept verbatim; a line is dropped when it
/// is empty after trimming. Order and duplicates are preserved.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').filter(|line| !line.trim().is_empty()).collect()
}

/// Profile of the signed-in user.
///
/// Fields the client does not use are kept in `extra` so the profile survives
/// a round trip through session storage unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    /// Get display name, falling back to email, then to an empty string.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or_default()
    }
}

/// An authenticated session: the credential and who it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub user: UserProfile,
}
