use shared::navigation::{scroll_target, SectionBounds};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};

pub fn scroll_y() -> f64 {
    window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

/// Smooth-scroll so the section sits just below the fixed header
pub fn scroll_to_section(id: &str, header_offset: f64) -> bool {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };
    let element_top = element.get_bounding_client_rect().top();
    smooth_scroll_to(scroll_target(element_top, scroll_y(), header_offset));
    true
}

/// Current layout of the given sections; missing ones are skipped
pub fn section_bounds(ids: &[&str]) -> Vec<SectionBounds> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    ids.iter()
        .filter_map(|id| {
            let element = document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
            Some(SectionBounds {
                id: id.to_string(),
                top: f64::from(element.offset_top()),
                height: f64::from(element.client_height()),
            })
        })
        .collect()
}

/// Lock page scrolling behind an overlay
pub fn set_scroll_locked(locked: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let value = if locked { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", value);
    }
}

pub fn set_body_class(class: &str, enabled: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.class_list().toggle_with_force(class, enabled);
    }
}
