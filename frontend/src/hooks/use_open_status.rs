use shared::OpenStatus;
use yew::prelude::*;

use super::use_periodic_refresh::{use_periodic_refresh, PeriodicRefreshConfig};
use crate::services::date_utils::current_local_datetime;

/// Live open/closed status, recomputed every `refresh_ms`
#[hook]
pub fn use_open_status(refresh_ms: u32) -> OpenStatus {
    let status = use_state(|| shared::evaluate(current_local_datetime()));

    let refresh = {
        let status = status.clone();
        Callback::from(move |_: ()| {
            status.set(shared::evaluate(current_local_datetime()));
        })
    };

    use_periodic_refresh(
        PeriodicRefreshConfig {
            interval_ms: refresh_ms,
            run_immediately: false,
        },
        refresh,
    );

    *status
}
