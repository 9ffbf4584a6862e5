use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::JsValue;
use web_sys::window;

/// Whole-value key/value persistence. Every write replaces the stored value.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// Browser `localStorage` of the current origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        let window = window()?;
        window.local_storage().ok()?
    }

    /// Logs a rejected storage call. Returns whether the call went through.
    fn check(result: Result<(), JsValue>, action: &str, key: &str) -> bool {
        match result {
            Ok(()) => true,
            Err(_) => {
                warn!("localStorage rejected {} of {}", action, key);
                false
            }
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            Self::check(storage.set_item(key, value), "write", key);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            Self::check(storage.remove_item(key), "removal", key);
        }
    }
}

/// In-memory store. Counts mutations so callers can check that nothing was written.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    removals: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn removals(&self) -> usize {
        self.removals.get()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.writes.set(self.writes.get() + 1);
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.removals.set(self.removals.get() + 1);
        self.values.borrow_mut().remove(key);
    }
}

/// Reads and decodes a JSON value. `Ok(None)` means nothing is stored under `key`.
pub fn try_load_json<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
) -> Result<Option<T>, serde_json::Error> {
    match store.get(key) {
        Some(json) => serde_json::from_str(&json).map(Some),
        None => Ok(None),
    }
}

/// Like [`try_load_json`], but undecodable values are logged and read as `None`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    match try_load_json(store, key) {
        Ok(value) => value,
        Err(e) => {
            warn!("ignoring undecodable value under {}: {}", key, e);
            None
        }
    }
}

pub fn save_json<T: Serialize + ?Sized>(store: &impl KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => {
            debug!("persisting {} ({} bytes)", key, json.len());
            store.set(key, &json);
        }
        Err(e) => warn!("could not encode value for {}: {}", key, e),
    }
}
