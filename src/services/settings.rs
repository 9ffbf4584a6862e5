use crate::models::AppSettings;
use crate::services::storage::{load_json, save_json, KeyValueStore};

pub const KEY_SETTINGS: &str = "recipe_settings_v1";

pub fn load_settings(store: &impl KeyValueStore) -> AppSettings {
    load_json(store, KEY_SETTINGS).unwrap_or_default()
}

pub fn save_settings(store: &impl KeyValueStore, settings: &AppSettings) {
    save_json(store, KEY_SETTINGS, settings);
}
