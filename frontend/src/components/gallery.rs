use gloo::events::EventListener;
use shared::{Lightbox, LightboxKey};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::content::GALLERY;
use crate::services::logging::Logger;
use crate::services::page::set_scroll_locked;

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let lightbox = use_state(|| match Lightbox::new(GALLERY.len()) {
        Ok(lightbox) => Some(lightbox),
        Err(e) => {
            Logger::error_with_component("gallery", &e.to_string());
            None
        }
    });

    // Keyboard navigation and scroll lock while the lightbox is open
    use_effect_with(*lightbox, {
        let lightbox = lightbox.clone();
        move |current| {
            let is_open = current.map(|l| l.is_open()).unwrap_or(false);
            set_scroll_locked(is_open);

            let current = *current;
            let listener = web_sys::window()
                .and_then(|w| w.document())
                .filter(|_| is_open)
                .map(|document| {
                    EventListener::new(&document, "keydown", move |event| {
                        let key = event
                            .dyn_ref::<KeyboardEvent>()
                            .and_then(|e| LightboxKey::from_key(&e.key()));
                        if let (Some(key), Some(mut next)) = (key, current) {
                            if next.handle_key(key) {
                                lightbox.set(Some(next));
                            }
                        }
                    })
                });
            move || drop(listener)
        }
    });

    let update = {
        let lightbox = lightbox.clone();
        move |change: fn(&mut Lightbox)| {
            let lightbox = lightbox.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                if let Some(mut next) = *lightbox {
                    change(&mut next);
                    lightbox.set(Some(next));
                }
            })
        }
    };

    let on_close = update(Lightbox::close);
    let on_prev = update(|l| {
        l.previous();
    });
    let on_next = update(|l| {
        l.next();
    });
    let on_image_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let thumbnails = GALLERY.iter().enumerate().map(|(index, image)| {
        let onclick = {
            let lightbox = lightbox.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(mut next) = *lightbox {
                    match next.open_at(index) {
                        Ok(_) => lightbox.set(Some(next)),
                        Err(e) => Logger::warn_with_component("gallery", &e.to_string()),
                    }
                }
            })
        };
        html! {
            <div class="gallery-item" {onclick}>
                <img src={image.src} alt={image.alt} loading="lazy" />
            </div>
        }
    });

    let overlay = match *lightbox {
        Some(current) if current.is_open() => {
            let image = &GALLERY[current.current()];
            html! {
                <div id="lightbox" class="lightbox active" onclick={on_close.clone()}>
                    <button class="lightbox-close" onclick={on_close}>{"×"}</button>
                    <button class="lightbox-nav prev" onclick={on_prev}>{"‹"}</button>
                    <img id="lightboxImg" src={image.src} alt={image.alt} onclick={on_image_click} />
                    <button class="lightbox-nav next" onclick={on_next}>{"›"}</button>
                </div>
            }
        }
        _ => html! {},
    };

    html! {
        <section id="gallery" class="gallery-section">
            <div class="container">
                <h2 class="section-title">{"Gallery"}</h2>
                <div class="gallery-grid">
                    {for thumbnails}
                </div>
            </div>
            {overlay}
        </section>
    }
}
