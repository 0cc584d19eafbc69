use gloo::storage::{LocalStorage, SessionStorage, Storage};
use shared::FlagStore;

use crate::services::logging::Logger;

#[derive(Clone, Copy, PartialEq)]
enum Scope {
    Local,
    Session,
}

/// Browser-backed flag store. Values are stored as raw strings, not JSON.
#[derive(Clone, Copy, PartialEq)]
pub struct BrowserFlagStore {
    scope: Scope,
}

impl BrowserFlagStore {
    /// Survives across visits
    pub fn local() -> Self {
        Self { scope: Scope::Local }
    }

    /// Cleared when the tab closes
    pub fn session() -> Self {
        Self { scope: Scope::Session }
    }

    fn raw(&self) -> web_sys::Storage {
        match self.scope {
            Scope::Local => LocalStorage::raw(),
            Scope::Session => SessionStorage::raw(),
        }
    }
}

impl FlagStore for BrowserFlagStore {
    fn get(&self, key: &str) -> Option<String> {
        self.raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if self.raw().set_item(key, value).is_err() {
            Logger::warn_with_component("storage", &format!("Could not persist '{}'", key));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_values_are_stored_raw() {
        let store = BrowserFlagStore::session();
        store.set("zestha-test-flag", "dark");
        assert_eq!(store.get("zestha-test-flag").as_deref(), Some("dark"));
        assert_eq!(SessionStorage::raw().get_item("zestha-test-flag").ok().flatten().as_deref(), Some("dark"));
    }

    #[wasm_bindgen_test]
    fn test_missing_key() {
        assert_eq!(BrowserFlagStore::local().get("zestha-never-set"), None);
    }
}
