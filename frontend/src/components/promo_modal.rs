use gloo::timers::callback::Timeout;
use shared::PromoModalController;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::section_link::SectionLink;
use crate::services::logging::Logger;
use crate::services::storage::BrowserFlagStore;

#[derive(Properties, PartialEq)]
pub struct PromoModalProps {
    pub delay_ms: u32,
    pub header_offset: f64,
}

/// Special-offer popup, shown once per browser session
#[function_component(PromoModal)]
pub fn promo_modal(props: &PromoModalProps) -> Html {
    let is_open = use_state(|| false);

    {
        let is_open = is_open.clone();
        use_effect_with(props.delay_ms, move |delay_ms| {
            let mut controller = PromoModalController::load(BrowserFlagStore::session());
            let timeout = if controller.arm() {
                Some(Timeout::new(*delay_ms, move || is_open.set(true)))
            } else {
                Logger::debug_with_component("promo-modal", "Already shown this session");
                None
            };
            move || drop(timeout)
        });
    }

    let on_close = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };

    let on_backdrop_click = {
        let on_close = on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(e);
        })
    };

    let on_reserve = {
        let is_open = is_open.clone();
        Callback::from(move |_: ()| is_open.set(false))
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    html! {
        <div id="specialModal" class={classes!("modal", is_open.then_some("show"))} onclick={on_backdrop_click}>
            <div class="modal-content" onclick={on_modal_click}>
                <button class="modal-close" onclick={on_close}>{"×"}</button>
                <h2>{"🎉 Special Offer!"}</h2>
                <p>{"Book a table this week and enjoy a complimentary glass of prosecco."}</p>
                <SectionLink
                    href="#reservation"
                    class="btn btn-primary"
                    header_offset={props.header_offset}
                    on_navigate={on_reserve}
                >
                    {"Reserve Now"}
                </SectionLink>
            </div>
        </div>
    }
}
