use gloo::timers::callback::Timeout;
use shared::{Notification, ToastSlot};
use yew::prelude::*;

pub struct UseNotificationResult {
    pub current: Option<Notification>,
    pub notify: Callback<Notification>,
}

/// Single toast slot. A new notification replaces the visible one, and each
/// one removes itself after `lifetime_ms` unless it was replaced.
#[hook]
pub fn use_notification(lifetime_ms: u32) -> UseNotificationResult {
    let slot = use_mut_ref(ToastSlot::default);
    let trigger = use_force_update();

    let notify = {
        let slot = slot.clone();
        let trigger = trigger.clone();
        Callback::from(move |notification: Notification| {
            let ticket = slot.borrow_mut().show(notification);
            trigger.force_update();

            let slot = slot.clone();
            let trigger = trigger.clone();
            Timeout::new(lifetime_ms, move || {
                if slot.borrow_mut().expire(ticket) {
                    trigger.force_update();
                }
            })
            .forget();
        })
    };

    let current = slot.borrow().current().cloned();
    UseNotificationResult { current, notify }
}
