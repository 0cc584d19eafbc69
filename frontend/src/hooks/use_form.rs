use shared::{simulate_submission, FieldValidator, FormKind, FormState, Notification};
use yew::prelude::*;

use crate::services::date_utils::today;
use crate::services::logging::Logger;
use crate::services::scheduler::GlooScheduler;

#[derive(Clone)]
pub struct UseFormActions {
    /// (field name, new value)
    pub on_input: Callback<(String, String)>,
    /// Field name that lost focus
    pub on_blur: Callback<String>,
    pub on_submit: Callback<()>,
}

pub struct UseFormResult {
    pub state: FormState,
    pub actions: UseFormActions,
}

/// Form state with inline validation and a simulated submission
///
/// Notifications (failure, pending, success) go to `notify`; the success
/// one arrives `submit_delay_ms` after a valid submit, together with a reset.
#[hook]
pub fn use_form(kind: FormKind, submit_delay_ms: u32, notify: Callback<Notification>) -> UseFormResult {
    let form = use_mut_ref(|| FormState::new(kind));
    let trigger = use_force_update();

    let on_input = {
        let form = form.clone();
        let trigger = trigger.clone();
        Callback::from(move |(name, value): (String, String)| {
            form.borrow_mut().set_value(&name, &value, &FieldValidator::new(today()));
            trigger.force_update();
        })
    };

    let on_blur = {
        let form = form.clone();
        let trigger = trigger.clone();
        Callback::from(move |name: String| {
            form.borrow_mut().check_field(&name, &FieldValidator::new(today()));
            trigger.force_update();
        })
    };

    let on_submit = {
        let form = form.clone();
        let trigger = trigger.clone();
        Callback::from(move |_: ()| {
            let result = form.borrow_mut().submit(&FieldValidator::new(today()));
            trigger.force_update();

            let pending = match result {
                Ok(pending) => pending,
                Err(failure) => {
                    notify.emit(failure);
                    return;
                }
            };

            let payload = serde_json::to_string(&form.borrow().payload()).unwrap_or_default();
            Logger::info_with_component("forms", &format!("{:?} Data: {}", kind, payload));
            notify.emit(pending);

            let form = form.clone();
            let trigger = trigger.clone();
            let notify = notify.clone();
            simulate_submission(&GlooScheduler, submit_delay_ms, kind, move || {
                let success = form.borrow_mut().complete();
                trigger.force_update();
                notify.emit(success);
            });
        })
    };

    let state = form.borrow().clone();
    UseFormResult {
        state,
        actions: UseFormActions {
            on_input,
            on_blur,
            on_submit,
        },
    }
}
