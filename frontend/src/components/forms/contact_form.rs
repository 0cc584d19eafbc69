use shared::{FormKind, Notification, SubmissionStatus};
use yew::prelude::*;

use super::form_field::FormField;
use crate::hooks::use_form::use_form;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub submit_delay_ms: u32,
    pub notify: Callback<Notification>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_form(FormKind::Contact, props.submit_delay_ms, props.notify.clone());
    let state = &form.state;
    let is_pending = state.status == SubmissionStatus::Pending;

    let onsubmit = {
        let on_submit = form.actions.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let fields = [
        ("name", "contactName", "Your Name", "text"),
        ("email", "contactEmail", "Your Email", "email"),
        ("subject", "subject", "Subject", "text"),
        ("message", "message", "Message", "textarea"),
    ];

    html! {
        <form id="contactForm" class="contact-form" novalidate={true} {onsubmit}>
            {for fields.iter().map(|(name, id, label, input_type)| html! {
                <FormField
                    name={*name}
                    id={*id}
                    label={*label}
                    input_type={*input_type}
                    value={state.value(name).to_string()}
                    error={state.error(name).map(str::to_string)}
                    required={true}
                    on_input={form.actions.on_input.clone()}
                    on_blur={form.actions.on_blur.clone()}
                />
            })}
            <button type="submit" class="btn btn-primary" disabled={is_pending}>
                {if is_pending { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}
