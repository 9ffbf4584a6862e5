pub mod draft_banner;
pub mod recipe_form;
pub mod recipe_view;
pub mod saved_recipes;
pub mod settings;
