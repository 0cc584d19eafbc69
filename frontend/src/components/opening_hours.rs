use shared::todays_special;
use yew::prelude::*;

use crate::hooks::use_open_status::use_open_status;
use crate::services::date_utils::current_weekday;

#[derive(Properties, PartialEq)]
pub struct OpeningHoursProps {
    pub refresh_ms: u32,
}

#[function_component(OpeningHours)]
pub fn opening_hours(props: &OpeningHoursProps) -> Html {
    let status = use_open_status(props.refresh_ms);
    let special = todays_special(current_weekday());

    html! {
        <div class="hours-card">
            <h3>{"Opening Hours"}</h3>
            <ul class="hours-list">
                <li><span>{"Monday - Thursday"}</span><span>{"12:00 PM - 11:00 PM"}</span></li>
                <li><span>{"Friday - Saturday"}</span><span>{"12:00 PM - 12:00 AM"}</span></li>
                <li><span>{"Sunday"}</span><span>{"11:00 AM - 11:00 PM"}</span></li>
            </ul>
            <div id="currentStatus" class={classes!("current-status", if status.is_open { "open" } else { "closed" })}>
                {status.message()}
            </div>
            <div id="todaySpecial" class="today-special">
                <h3>{special.name}</h3>
                <p>{special.description}</p>
                <p class="special-discount">{special.discount}</p>
            </div>
        </div>
    }
}
