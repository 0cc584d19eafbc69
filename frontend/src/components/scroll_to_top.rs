use yew::prelude::*;

use crate::services::page::scroll_to_top;

#[derive(Properties, PartialEq)]
pub struct ScrollToTopProps {
    pub visible: bool,
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top_button(props: &ScrollToTopProps) -> Html {
    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());
    html! {
        <button id="scrollToTop" class={classes!("scroll-to-top", props.visible.then_some("visible"))} {onclick}>
            {"↑"}
        </button>
    }
}
