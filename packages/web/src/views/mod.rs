mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod guarded;
pub use guarded::Guarded;

mod dashboard;
pub use dashboard::Dashboard;

mod add_recipe;
pub use add_recipe::AddRecipe;

mod edit_recipe;
pub use edit_recipe::EditRecipe;

mod recipe_detail;
pub use recipe_detail::RecipeDetail;

mod not_found;
pub use not_found::NotFound;
