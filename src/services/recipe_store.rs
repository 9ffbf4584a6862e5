use log::{info, warn};

use crate::error::StoreError;
use crate::models::{CountBadge, Recipe};
use crate::services::storage::{save_json, try_load_json, KeyValueStore};

pub const KEY_SAVED_RECIPES: &str = "saved_recipes_v1";

/// Receives the UI signals the store emits after changing the collection.
pub trait StoreObserver {
    fn alert(&self, message: &str);
    fn render_saved(&self, recipes: &[Recipe]);
    fn update_count(&self, badge: &CountBadge);
}

/// No sink attached.
impl StoreObserver for () {
    fn alert(&self, _message: &str) {}
    fn render_saved(&self, _recipes: &[Recipe]) {}
    fn update_count(&self, _badge: &CountBadge) {}
}

/// The saved collection, kept as one JSON array under [`KEY_SAVED_RECIPES`].
///
/// Names are unique under case-insensitive comparison; insertion order is
/// the display order.
pub struct RecipeStore<S, O = ()> {
    storage: S,
    observer: O,
}

impl<S: KeyValueStore> RecipeStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            observer: (),
        }
    }
}

impl<S: KeyValueStore, O: StoreObserver> RecipeStore<S, O> {
    pub fn with_observer(storage: S, observer: O) -> Self {
        Self { storage, observer }
    }

    /// Stored recipes in display order. Absent or unreadable storage lists as empty.
    pub fn list(&self) -> Vec<Recipe> {
        self.load().unwrap_or_default()
    }

    /// Reads the collection for a mutation. An unreadable collection must not be overwritten.
    fn load(&self) -> Result<Vec<Recipe>, StoreError> {
        match try_load_json(&self.storage, KEY_SAVED_RECIPES) {
            Ok(recipes) => Ok(recipes.unwrap_or_default()),
            Err(e) => {
                warn!("saved recipes under {} do not decode: {}", KEY_SAVED_RECIPES, e);
                Err(StoreError::Unreadable(e.to_string()))
            }
        }
    }

    pub fn exists(&self, name: &str) -> bool {
        self.list().iter().any(|r| r.has_name(name))
    }

    pub fn get(&self, name: &str) -> Option<Recipe> {
        self.list().into_iter().find(|r| r.has_name(name))
    }

    /// Appends `recipe` unless its name is taken. Rejections are also reported through `alert`.
    pub fn add(&self, recipe: Recipe) -> Result<(), StoreError> {
        let mut recipes = self.load()?;
        if recipes.iter().any(|r| r.has_name(&recipe.name)) {
            let err = StoreError::DuplicateName(recipe.name);
            self.observer.alert(&err.to_string());
            return Err(err);
        }
        info!("saving recipe {:?}", recipe.name);
        recipes.push(recipe);
        save_json(&self.storage, KEY_SAVED_RECIPES, &recipes);
        self.refresh_count();
        Ok(())
    }

    /// Replaces the first recipe called `name` in place. Unknown names are ignored.
    pub fn update(&self, name: &str, recipe: Recipe) {
        let Ok(mut recipes) = self.load() else {
            return;
        };
        let Some(slot) = recipes.iter_mut().find(|r| r.has_name(name)) else {
            return;
        };
        info!("updating recipe {:?}", name);
        *slot = recipe;
        self.persist(&recipes);
    }

    pub fn remove(&self, name: &str) {
        let Ok(mut recipes) = self.load() else {
            return;
        };
        let before = recipes.len();
        recipes.retain(|r| !r.has_name(name));
        if recipes.len() == before {
            return;
        }
        info!("removed recipe {:?}", name);
        self.persist(&recipes);
    }

    /// Sets the rating (clamped to 1..=5) of a saved recipe.
    pub fn rate(&self, name: &str, rating: u8) {
        if let Some(mut recipe) = self.get(name) {
            recipe.rating = Some(rating.clamp(1, 5));
            self.update(name, recipe);
        }
    }

    pub fn count_badge(&self) -> CountBadge {
        CountBadge::from_count(self.list().len())
    }

    pub fn refresh_count(&self) -> CountBadge {
        let badge = self.count_badge();
        self.observer.update_count(&badge);
        badge
    }

    fn persist(&self, recipes: &[Recipe]) {
        save_json(&self.storage, KEY_SAVED_RECIPES, recipes);
        self.refresh_count();
        self.observer.render_saved(recipes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryStorage;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Signals {
        alerts: RefCell<Vec<String>>,
        renders: RefCell<Vec<Vec<String>>>,
        badges: RefCell<Vec<CountBadge>>,
    }

    impl StoreObserver for &Signals {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn render_saved(&self, recipes: &[Recipe]) {
            let names = recipes.iter().map(|r| r.name.clone()).collect();
            self.renders.borrow_mut().push(names);
        }

        fn update_count(&self, badge: &CountBadge) {
            self.badges.borrow_mut().push(badge.clone());
        }
    }

    fn recipe(name: &str) -> Recipe {
        Recipe {
            name: name.to_string(),
            description: format!("{} description", name),
            ingredients: vec!["200g Reis".into()],
            servings: Some(2),
            ..Recipe::default()
        }
    }

    fn names(store: &RecipeStore<&MemoryStorage, &Signals>) -> Vec<String> {
        store.list().into_iter().map(|r| r.name).collect()
    }

    #[test]
    fn empty_storage_lists_nothing() {
        let storage = MemoryStorage::new();
        let store = RecipeStore::new(&storage);
        assert!(store.list().is_empty());
        assert!(!store.exists("anything"));
        assert_eq!(store.count_badge(), CountBadge { text: String::new(), visible: false });
    }

    #[test]
    fn add_appends_and_refreshes_count_without_render() {
        let storage = MemoryStorage::new();
        let signals = Signals::default();
        let store = RecipeStore::with_observer(&storage, &signals);

        store.add(recipe("Risotto")).unwrap();
        store.add(recipe("Curry")).unwrap();

        assert_eq!(names(&store), vec!["Risotto", "Curry"]);
        assert!(signals.renders.borrow().is_empty());
        assert_eq!(
            signals.badges.borrow().last(),
            Some(&CountBadge { text: "2".into(), visible: true })
        );
    }

    #[test]
    fn names_are_unique_ignoring_case() {
        let storage = MemoryStorage::new();
        let signals = Signals::default();
        let store = RecipeStore::with_observer(&storage, &signals);

        store.add(recipe("Käsespätzle")).unwrap();
        assert!(store.exists("Käsespätzle"));
        assert!(store.exists("KÄSESPÄTZLE"));

        let writes = storage.writes();
        let err = store.add(recipe("käsespätzle")).unwrap_err();
        assert_eq!(err, StoreError::DuplicateName("käsespätzle".into()));
        assert_eq!(err.to_string(), crate::error::DUPLICATE_NAME_MESSAGE);
        assert_eq!(store.list().len(), 1);
        assert_eq!(storage.writes(), writes);
        assert_eq!(*signals.alerts.borrow(), vec!["A recipe with this name already exists."]);
    }

    #[test]
    fn update_replaces_in_place() {
        let storage = MemoryStorage::new();
        let signals = Signals::default();
        let store = RecipeStore::with_observer(&storage, &signals);
        store.add(recipe("Suppe")).unwrap();
        store.add(recipe("Salat")).unwrap();
        store.add(recipe("Kuchen")).unwrap();

        let mut changed = recipe("Salat");
        changed.description = "mit Walnüssen".into();
        store.update("SALAT", changed.clone());

        assert_eq!(store.list()[1], changed);
        assert_eq!(names(&store), vec!["Suppe", "Salat", "Kuchen"]);
        assert_eq!(*signals.renders.borrow(), vec![vec!["Suppe", "Salat", "Kuchen"]]);
    }

    #[test]
    fn update_of_unknown_name_writes_nothing() {
        let storage = MemoryStorage::new();
        let signals = Signals::default();
        let store = RecipeStore::with_observer(&storage, &signals);
        store.add(recipe("Suppe")).unwrap();

        let stored = storage.get(KEY_SAVED_RECIPES);
        let writes = storage.writes();
        let badges = signals.badges.borrow().len();
        store.update("Eintopf", recipe("Eintopf"));

        assert_eq!(storage.get(KEY_SAVED_RECIPES), stored);
        assert_eq!(storage.writes(), writes);
        assert_eq!(signals.badges.borrow().len(), badges);
        assert!(signals.renders.borrow().is_empty());
    }

    #[test]
    fn remove_drops_matching_recipe() {
        let storage = MemoryStorage::new();
        let signals = Signals::default();
        let store = RecipeStore::with_observer(&storage, &signals);
        store.add(recipe("Suppe")).unwrap();
        store.add(recipe("Salat")).unwrap();

        store.remove("suppe");

        assert_eq!(names(&store), vec!["Salat"]);
        assert_eq!(*signals.renders.borrow(), vec![vec!["Salat"]]);
        assert_eq!(
            signals.badges.borrow().last(),
            Some(&CountBadge { text: "1".into(), visible: true })
        );
    }

    #[test]
    fn remove_of_unknown_name_is_silent() {
        let storage = MemoryStorage::new();
        let signals = Signals::default();
        let store = RecipeStore::with_observer(&storage, &signals);
        store.add(recipe("Suppe")).unwrap();

        let writes = storage.writes();
        let badges = signals.badges.borrow().len();
        store.remove("Salat");

        assert_eq!(storage.writes(), writes);
        assert_eq!(signals.badges.borrow().len(), badges);
        assert!(signals.renders.borrow().is_empty());
        assert!(signals.alerts.borrow().is_empty());
    }

    #[test]
    fn removing_last_recipe_hides_badge() {
        let storage = MemoryStorage::new();
        let signals = Signals::default();
        let store = RecipeStore::with_observer(&storage, &signals);
        store.add(recipe("Suppe")).unwrap();
        store.remove("Suppe");

        assert_eq!(signals.badges.borrow().last(), Some(&CountBadge::default()));
    }

    #[test]
    fn unreadable_collection_is_never_overwritten() {
        let storage = MemoryStorage::new();
        let signals = Signals::default();
        let store = RecipeStore::with_observer(&storage, &signals);
        let raw = r#"[{"name":"Suppe","servings":"vier"}]"#;
        storage.set(KEY_SAVED_RECIPES, raw);
        let writes = storage.writes();

        assert!(store.list().is_empty());
        let err = store.add(recipe("Salat")).unwrap_err();
        assert!(matches!(err, StoreError::Unreadable(_)));
        store.update("Suppe", recipe("Suppe"));
        store.remove("Suppe");
        store.rate("Suppe", 4);

        assert_eq!(storage.get(KEY_SAVED_RECIPES).as_deref(), Some(raw));
        assert_eq!(storage.writes(), writes);
        assert!(signals.alerts.borrow().is_empty());
        assert!(signals.renders.borrow().is_empty());
    }

    #[test]
    fn rating_is_clamped_and_stored() {
        let storage = MemoryStorage::new();
        let store = RecipeStore::new(&storage);
        store.add(recipe("Suppe")).unwrap();

        store.rate("suppe", 9);
        assert_eq!(store.get("Suppe").and_then(|r| r.rating), Some(5));
        store.rate("Suppe", 0);
        assert_eq!(store.get("Suppe").and_then(|r| r.rating), Some(1));
    }

    #[test]
    fn badge_text_matches_count() {
        assert_eq!(CountBadge::from_count(0), CountBadge { text: String::new(), visible: false });
        assert_eq!(CountBadge::from_count(12), CountBadge { text: "12".into(), visible: true });
    }
}
