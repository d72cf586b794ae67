use store::RecipeDraft;

const REQUIRED_FIELDS_MESSAGE: &str = "Title, ingredients and steps are required";

/// Checked before a draft is sent. The inputs' `required` attribute lets
/// whitespace-only values through.
fn check_required(draft: &RecipeDraft) -> Result<(), &'static str> {
    if draft.has_required_fields() {
        Ok(())
    } else {
        Err(REQUIRED_FIELDS_MESSAGE)
    }
}

mod dashboard;
pub use dashboard::DashboardView;

mod add_recipe;
pub use add_recipe::AddRecipeView;

mod edit_recipe;
pub use edit_recipe::EditRecipeView;

mod recipe_detail;
pub use recipe_detail::RecipeDetailView;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod not_found;
pub use not_found::NotFoundView;
