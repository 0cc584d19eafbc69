use gloo::events::EventListener;
use yew::prelude::*;

use crate::services::page::scroll_y;

/// Vertical scroll offset of the window, updated on every scroll event
#[hook]
pub fn use_scroll_position() -> f64 {
    let position = use_state(scroll_y);

    {
        let position = position.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "scroll", move |_| {
                    position.set(scroll_y());
                })
            });
            move || drop(listener)
        });
    }

    *position
}
