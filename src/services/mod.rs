pub mod drafts;
pub mod recipe_api;
pub mod recipe_store;
pub mod scaling;
pub mod settings;
pub mod storage;
