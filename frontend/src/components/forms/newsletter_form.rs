use shared::{FormKind, Notification};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_form::use_form;

#[derive(Properties, PartialEq)]
pub struct NewsletterFormProps {
    pub submit_delay_ms: u32,
    pub notify: Callback<Notification>,
}

/// Footer signup; checks the email pattern on submit only
#[function_component(NewsletterForm)]
pub fn newsletter_form(props: &NewsletterFormProps) -> Html {
    let form = use_form(FormKind::Newsletter, props.submit_delay_ms, props.notify.clone());

    let oninput = {
        let on_input = form.actions.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(("email".to_string(), input.value()));
        })
    };

    let onsubmit = {
        let on_submit = form.actions.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form id="newsletterForm" class="newsletter-form" novalidate={true} {onsubmit}>
            <input
                type="email"
                id="newsletterEmail"
                placeholder="Your email address"
                value={form.state.value("email").to_string()}
                {oninput}
            />
            <button type="submit" class="btn btn-primary">{"Subscribe"}</button>
        </form>
    }
}
