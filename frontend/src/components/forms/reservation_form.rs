use shared::{reservation_date_bounds, FormKind, Notification, SiteConfig, SubmissionStatus};
use yew::prelude::*;

use super::form_field::FormField;
use crate::hooks::use_form::use_form;
use crate::services::date_utils::{to_input_date, today};

#[derive(Properties, PartialEq)]
pub struct ReservationFormProps {
    pub config: SiteConfig,
    pub notify: Callback<Notification>,
}

const GUEST_OPTIONS: [(&str, &str); 7] = [
    ("", "Select guests"),
    ("1", "1 Guest"),
    ("2", "2 Guests"),
    ("3", "3 Guests"),
    ("4", "4 Guests"),
    ("5", "5 Guests"),
    ("6+", "6+ Guests"),
];

const OCCASION_OPTIONS: [(&str, &str); 5] = [
    ("", "None"),
    ("birthday", "Birthday"),
    ("anniversary", "Anniversary"),
    ("business", "Business Dinner"),
    ("other", "Other"),
];

#[function_component(ReservationForm)]
pub fn reservation_form(props: &ReservationFormProps) -> Html {
    let form = use_form(FormKind::Reservation, props.config.submit_delay_ms, props.notify.clone());
    let (min_date, max_date) = reservation_date_bounds(today(), props.config.reservation_horizon_months);

    let onsubmit = {
        let on_submit = form.actions.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let state = &form.state;
    let field = |name: &'static str, id: &'static str, label: &'static str, input_type: &'static str| {
        html! {
            <FormField
                name={name}
                id={id}
                label={label}
                input_type={input_type}
                value={state.value(name).to_string()}
                error={state.error(name).map(str::to_string)}
                required={true}
                on_input={form.actions.on_input.clone()}
                on_blur={form.actions.on_blur.clone()}
            />
        }
    };

    html! {
        <section id="reservation" class="reservation-section">
            <div class="container">
                <h2 class="section-title">{"Reserve a Table"}</h2>
                <form id="reservationForm" class="reservation-form" novalidate={true} {onsubmit}>
                    <div class="form-row">
                        {field("name", "name", "Full Name", "text")}
                        {field("email", "email", "Email", "email")}
                    </div>
                    <div class="form-row">
                        {field("phone", "phone", "Phone", "tel")}
                        <FormField
                            name="date"
                            id="date"
                            label="Date"
                            input_type="date"
                            value={state.value("date").to_string()}
                            error={state.error("date").map(str::to_string)}
                            required={true}
                            min={AttrValue::from(to_input_date(min_date))}
                            max={AttrValue::from(to_input_date(max_date))}
                            on_input={form.actions.on_input.clone()}
                            on_blur={form.actions.on_blur.clone()}
                        />
                    </div>
                    <div class="form-row">
                        {field("time", "time", "Time", "time")}
                        <FormField
                            name="guests"
                            id="guests"
                            label="Guests"
                            input_type="select"
                            options={GUEST_OPTIONS.to_vec()}
                            value={state.value("guests").to_string()}
                            error={state.error("guests").map(str::to_string)}
                            required={true}
                            on_input={form.actions.on_input.clone()}
                            on_blur={form.actions.on_blur.clone()}
                        />
                    </div>
                    <FormField
                        name="occasion"
                        id="occasion"
                        label="Occasion"
                        input_type="select"
                        options={OCCASION_OPTIONS.to_vec()}
                        value={state.value("occasion").to_string()}
                        on_input={form.actions.on_input.clone()}
                        on_blur={form.actions.on_blur.clone()}
                    />
                    <FormField
                        name="requests"
                        id="requests"
                        label="Special Requests"
                        input_type="textarea"
                        value={state.value("requests").to_string()}
                        on_input={form.actions.on_input.clone()}
                        on_blur={form.actions.on_blur.clone()}
                    />
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled={state.status == SubmissionStatus::Pending}
                    >
                        {if state.status == SubmissionStatus::Pending {
                            "Processing..."
                        } else {
                            "Book Now"
                        }}
                    </button>
                </form>
            </div>
        </section>
    }
}
