use gloo::events::EventListener;
use shared::navigation::nav_href;
use shared::{MobileMenu, Theme};
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};
use yew::prelude::*;

use super::section_link::SectionLink;
use crate::content::NAV_ENTRIES;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active_section: Option<String>,
    pub scrolled: bool,
    pub theme: Theme,
    pub on_toggle_theme: Callback<MouseEvent>,
    pub header_offset: f64,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu = use_state(MobileMenu::default);
    let toggle_ref = use_node_ref();
    let menu_ref = use_node_ref();

    // Close the mobile menu on clicks outside both the toggle and the menu
    {
        let menu = menu.clone();
        let toggle_ref = toggle_ref.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with(*menu, move |state| {
            let state = *state;
            let listener = web_sys::window().and_then(|w| w.document()).filter(|_| state.is_open()).map(|document| {
                EventListener::new(&document, "click", move |event| {
                    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let inside = |node_ref: &NodeRef| {
                        node_ref
                            .get()
                            .map(|node| node.contains(target.as_ref()))
                            .unwrap_or(false)
                    };
                    let mut next = state;
                    next.document_click(inside(&toggle_ref), inside(&menu_ref));
                    if next != state {
                        menu.set(next);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.toggle();
            menu.set(next);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| {
            if menu.is_open() {
                menu.set(MobileMenu::default());
            }
        })
    };

    let nav_links = NAV_ENTRIES.iter().map(|entry| {
        let is_active = props.active_section.as_deref() == Some(entry.id);
        html! {
            <li>
                <SectionLink
                    href={nav_href(entry.id)}
                    class={classes!("nav-link", is_active.then_some("active"))}
                    header_offset={props.header_offset}
                    on_navigate={close_menu.clone()}
                >
                    {entry.label}
                </SectionLink>
            </li>
        }
    });

    html! {
        <header id="mainHeader" class={classes!("header", props.scrolled.then_some("scrolled"))}>
            <div class="container nav-container">
                <SectionLink
                    href="#home"
                    class="logo"
                    header_offset={props.header_offset}
                    on_navigate={close_menu.clone()}
                >
                    {"Zestha"}
                </SectionLink>
                <ul ref={menu_ref} class={classes!("nav-menu", menu.is_open().then_some("active"))}>
                    {for nav_links}
                </ul>
                <div class="header-actions">
                    <button id="themeToggle" class="theme-toggle" onclick={props.on_toggle_theme.clone()}>
                        {props.theme.icon()}
                    </button>
                    <button
                        ref={toggle_ref}
                        class={classes!("mobile-menu-toggle", menu.is_open().then_some("active"))}
                        onclick={on_toggle_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
        </header>
    }
}
