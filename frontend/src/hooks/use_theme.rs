use shared::{Theme, ThemeController};
use yew::prelude::*;

use crate::services::page::set_body_class;
use crate::services::storage::BrowserFlagStore;

pub struct UseThemeResult {
    pub theme: Theme,
    pub toggle: Callback<MouseEvent>,
}

/// Theme loaded from local storage; toggling writes it back
#[hook]
pub fn use_theme() -> UseThemeResult {
    let controller = use_mut_ref(|| ThemeController::load(BrowserFlagStore::local()));
    let theme = use_state(|| controller.borrow().theme());

    use_effect_with(*theme, |theme| {
        set_body_class("dark-theme", theme.body_class().is_some());
    });

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = controller.borrow_mut().toggle();
            theme.set(next);
        })
    };

    UseThemeResult {
        theme: *theme,
        toggle,
    }
}
