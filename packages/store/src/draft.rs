//! Form-side recipe drafts and the request bodies built from them.
//!
//! A [`RecipeDraft`] mirrors the create/edit form: every field is the raw text
//! the user typed, so half-typed numbers never get lost while editing. On
//! submit it becomes a [`RecipePayload`], the typed body sent with `POST
//! /recipes` or `PUT /recipes/{id}`.

use serde::{Deserialize, Serialize};

use crate::models::{Category, Recipe};

/// In-memory copy of a recipe's fields held by a create or edit form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub steps: String,
    pub image_url: String,
    /// Category label, empty for none.
    pub category: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub rating: u8,
    pub notes: String,
    /// Favorite flag of the record being edited, carried through a full update.
    pub is_favorite: bool,
}

/// Request body for creating or replacing a recipe.
///
/// Creates carry no [`PersonalFields`]; updates always carry all of them, so a
/// cleared note goes out as `null` instead of being left off.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipePayload {
    pub title: String,
    pub description: Option<String>,
    pub ingredients: String,
    pub steps: String,
    pub image_url: Option<String>,
    pub category: Option<Category>,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub servings: Option<u32>,
    #[serde(flatten)]
    pub personal: Option<PersonalFields>,
}

/// Edit-only part of a full update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonalFields {
    pub rating: u8,
    pub notes: Option<String>,
    pub is_favorite: bool,
}

impl RecipeDraft {
    /// Hydrate a draft from a fetched record for editing.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        fn number(value: Option<u32>) -> String {
            value.map(|n| n.to_string()).unwrap_or_default()
        }

        Self {
            title: recipe.title.clone(),
            description: recipe.description.clone().unwrap_or_default(),
            ingredients: recipe.ingredients.clone(),
            steps: recipe.steps.clone(),
            image_url: recipe.image_url.clone().unwrap_or_default(),
            category: recipe
                .category
                .map(|c| c.as_str().to_string())
                .unwrap_or_default(),
            prep_time: number(recipe.prep_time),
            cook_time: number(recipe.cook_time),
            servings: number(recipe.servings),
            rating: recipe.rating,
            notes: recipe.notes.clone().unwrap_or_default(),
            is_favorite: recipe.is_favorite,
        }
    }

    /// Set the rating from the star picker. Values above 5 are capped.
    pub fn set_rating(&mut self, star: u8) {
        self.rating = star.min(5);
    }

    /// Whether the fields the form marks `required` are filled in.
    pub fn has_required_fields(&self) -> bool {
        [&self.title, &self.ingredients, &self.steps]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// Body for `POST /recipes`.
    pub fn to_create_payload(&self) -> RecipePayload {
        self.base_payload()
    }

    /// Body for `PUT /recipes/{id}`: the whole record, including rating,
    /// notes and the current favorite flag.
    pub fn to_update_payload(&self) -> RecipePayload {
        RecipePayload {
            personal: Some(PersonalFields {
                rating: self.rating,
                notes: Some(self.notes.clone()).filter(|n| !n.is_empty()),
                is_favorite: self.is_favorite,
            }),
            ..self.base_payload()
        }
    }

    fn base_payload(&self) -> RecipePayload {
        fn optional(value: &str) -> Option<String> {
            Some(value.to_string()).filter(|v| !v.is_empty())
        }

        fn minutes(value: &str) -> Option<u32> {
            value.trim().parse().ok()
        }

        RecipePayload {
            title: self.title.clone(),
            description: optional(&self.description),
            ingredients: self.ingredients.clone(),
            steps: self.steps.clone(),
            image_url: optional(&self.image_url),
            category: self.category.parse().ok(),
            prep_time: minutes(&self.prep_time),
            cook_time: minutes(&self.cook_time),
            servings: minutes(&self.servings),
            personal: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeId;
    use serde_json::json;

    fn pancake_draft() -> RecipeDraft {
        RecipeDraft {
            title: "Pancakes".to_string(),
            ingredients: "Flour\nMilk\nEgg".to_string(),
            steps: "Mix\nCook".to_string(),
            ..RecipeDraft::default()
        }
    }

    #[test]
    fn test_create_payload_nulls_empty_fields() {
        let body = serde_json::to_value(pancake_draft().to_create_payload()).unwrap();
        assert_eq!(
            body,
            json!({
                "title": "Pancakes",
                "description": null,
                "ingredients": "Flour\nMilk\nEgg",
                "steps": "Mix\nCook",
                "image_url": null,
                "category": null,
                "prep_time": null,
                "cook_time": null,
                "servings": null
            })
        );
    }

    #[test]
    fn test_create_payload_parses_numbers_and_category() {
        let draft = RecipeDraft {
            category: "Breakfast".to_string(),
            prep_time: " 15 ".to_string(),
            cook_time: "abc".to_string(),
            servings: "-2".to_string(),
            ..pancake_draft()
        };
        let payload = draft.to_create_payload();
        assert_eq!(payload.category, Some(Category::Breakfast));
        assert_eq!(payload.prep_time, Some(15));
        assert_eq!(payload.cook_time, None);
        assert_eq!(payload.servings, None);
        assert_eq!(payload.personal, None);
    }

    #[test]
    fn test_update_payload_carries_rating_notes_and_favorite() {
        let mut draft = pancake_draft();
        draft.set_rating(4);
        draft.notes = "Less sugar".to_string();
        draft.is_favorite = true;

        let body = serde_json::to_value(draft.to_update_payload()).unwrap();
        assert_eq!(body["rating"], json!(4));
        assert_eq!(body["notes"], json!("Less sugar"));
        assert_eq!(body["is_favorite"], json!(true));
    }

    #[test]
    fn test_update_payload_sends_cleared_notes_as_null() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": 3,
            "title": "Soup",
            "ingredients": "Water",
            "steps": "Boil",
            "notes": "old note"
        }))
        .unwrap();
        let mut draft = RecipeDraft::from_recipe(&recipe);
        draft.notes.clear();

        let body = serde_json::to_value(draft.to_update_payload()).unwrap();
        let fields = body.as_object().unwrap();
        assert!(fields.contains_key("notes"), "body: {body}");
        assert_eq!(body["notes"], json!(null));
        for key in [
            "title", "description", "ingredients", "steps", "image_url", "category",
            "prep_time", "cook_time", "servings", "rating", "is_favorite",
        ] {
            assert!(fields.contains_key(key), "missing {key} in {body}");
        }
    }

    #[test]
    fn test_set_rating_caps_at_five() {
        let mut draft = RecipeDraft::default();
        draft.set_rating(9);
        assert_eq!(draft.rating, 5);
        draft.set_rating(4);
        assert_eq!(draft.rating, 4);
    }

    #[test]
    fn test_required_fields() {
        assert!(pancake_draft().has_required_fields());
        let draft = RecipeDraft {
            steps: "  ".to_string(),
            ..pancake_draft()
        };
        assert!(!draft.has_required_fields());
    }

    #[test]
    fn test_hydrate_from_recipe() {
        let recipe = Recipe {
            id: RecipeId::from("1"),
            title: "Tea".to_string(),
            description: None,
            ingredients: "Water\nLeaves".to_string(),
            steps: "Steep".to_string(),
            image_url: Some("https://example.com/tea.png".to_string()),
            category: Some(Category::Beverage),
            prep_time: Some(2),
            cook_time: None,
            servings: Some(1),
            is_favorite: true,
            rating: 3,
            notes: Some("Green".to_string()),
        };
        let draft = RecipeDraft::from_recipe(&recipe);
        assert_eq!(draft.category, "Beverage");
        assert_eq!(draft.prep_time, "2");
        assert_eq!(draft.cook_time, "");
        assert_eq!(draft.rating, 3);
        assert!(draft.is_favorite);

        let payload = draft.to_update_payload();
        assert_eq!(payload.title, recipe.title);
        assert_eq!(payload.image_url, recipe.image_url);
        assert_eq!(payload.category, recipe.category);
        assert_eq!(payload.prep_time, recipe.prep_time);
        assert_eq!(payload.servings, recipe.servings);
        assert_eq!(payload.personal.map(|p| p.notes), Some(recipe.notes));
    }
}
