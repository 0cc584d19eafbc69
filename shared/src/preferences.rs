//! Visitor preferences backed by browser key/value storage.
//!
//! Controllers load their flag once, change it only through their own
//! setters and write every change straight back to the store.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const THEME_KEY: &str = "theme";
pub const MODAL_SHOWN_KEY: &str = "modalShown";

/// String key/value store (local or session storage in the browser)
pub trait FlagStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryFlagStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Anything but "dark" reads as light
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle button label: the theme you would switch to
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    pub fn body_class(&self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark-theme"),
        }
    }
}

pub struct ThemeController<S: FlagStore> {
    store: S,
    theme: Theme,
}

impl<S: FlagStore> ThemeController<S> {
    pub fn load(store: S) -> Self {
        let theme = Theme::parse(store.get(THEME_KEY).as_deref());
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.set(THEME_KEY, theme.as_str());
    }

    pub fn toggle(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }
}

/// Once-per-session promotional modal
pub struct PromoModalController<S: FlagStore> {
    store: S,
    already_shown: bool,
}

impl<S: FlagStore> PromoModalController<S> {
    pub fn load(store: S) -> Self {
        let already_shown = store.get(MODAL_SHOWN_KEY).is_some();
        Self { store, already_shown }
    }

    /// Whether to show the modal on this page load; marks it shown for the session
    pub fn arm(&mut self) -> bool {
        if self.already_shown {
            return false;
        }
        self.already_shown = true;
        self.store.set(MODAL_SHOWN_KEY, "true");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse() {
        assert_eq!(Theme::parse(Some("dark")), Theme::Dark);
        assert_eq!(Theme::parse(Some("light")), Theme::Light);
        assert_eq!(Theme::parse(Some("purple")), Theme::Light);
        assert_eq!(Theme::parse(None), Theme::Light);
    }

    #[test]
    fn test_theme_icons() {
        assert_eq!(Theme::Dark.icon(), "☀️");
        assert_eq!(Theme::Light.icon(), "🌙");
        assert_eq!(Theme::Dark.body_class(), Some("dark-theme"));
    }

    #[test]
    fn test_toggle_flushes_to_store() {
        let store = MemoryFlagStore::new();
        let mut controller = ThemeController::load(store.clone());
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

        let reloaded = ThemeController::load(store.clone());
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[test]
    fn test_promo_modal_once_per_session() {
        let session = MemoryFlagStore::new();
        let mut first = PromoModalController::load(session.clone());
        assert!(first.arm());
        assert!(!first.arm());
        assert_eq!(session.get(MODAL_SHOWN_KEY).as_deref(), Some("true"));

        let mut second_load = PromoModalController::load(session.clone());
        assert!(!second_load.arm());

        let mut new_session = PromoModalController::load(MemoryFlagStore::new());
        assert!(new_session.arm());
    }
}
