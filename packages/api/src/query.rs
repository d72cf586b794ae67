use store::Category;

/// Dashboard filter state, turned into collection query parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeQuery {
    pub search: String,
    pub category: Option<Category>,
    pub favorites_only: bool,
}

impl RecipeQuery {
    /// Query parameters for `GET /recipes`. Inactive filters are omitted.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.search.is_empty() {
            params.push(("search", self.search.clone()));
        }
        if let Some(category) = self.category {
            params.push(("category", category.as_str().to_string()));
        }
        if self.favorites_only {
            params.push(("favorite", "true".to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_has_no_params() {
        assert!(RecipeQuery::default().to_params().is_empty());
    }

    #[test]
    fn test_all_filters() {
        let query = RecipeQuery {
            search: "pan cakes".to_string(),
            category: Some(Category::Breakfast),
            favorites_only: true,
        };
        assert_eq!(
            query.to_params(),
            vec![
                ("search", "pan cakes".to_string()),
                ("category", "Breakfast".to_string()),
                ("favorite", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_favorite_only_when_toggled() {
        let query = RecipeQuery {
            favorites_only: false,
            category: Some(Category::Dessert),
            ..RecipeQuery::default()
        };
        assert_eq!(query.to_params(), vec![("category", "Dessert".to_string())]);
    }
}
