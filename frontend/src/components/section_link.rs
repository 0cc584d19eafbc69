use shared::navigation::section_from_href;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::page::scroll_to_section;

#[derive(Properties, PartialEq)]
pub struct SectionLinkProps {
    /// In-page target, e.g. "#reservation"
    pub href: AttrValue,
    pub header_offset: f64,
    #[prop_or_default]
    pub class: Classes,
    /// Fired after the page starts scrolling to an existing section
    #[prop_or_default]
    pub on_navigate: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

/// Anchor to a page section; smooth-scrolls to land below the fixed header
#[function_component(SectionLink)]
pub fn section_link(props: &SectionLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let header_offset = props.header_offset;
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let scrolled = section_from_href(&href)
                .map(|id| scroll_to_section(id, header_offset))
                .unwrap_or(false);
            if scrolled {
                on_navigate.emit(());
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            {props.children.clone()}
        </a>
    }
}
