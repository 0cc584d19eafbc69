use shared::{Notification, NotificationLevel};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notification: Option<Notification>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let Some(notification) = props.notification.as_ref() else {
        return html! {};
    };
    let level = match notification.level {
        NotificationLevel::Info => "notification-info",
        NotificationLevel::Success => "notification-success",
        NotificationLevel::Error => "notification-error",
    };
    html! {
        <div class={classes!("notification", level)} role="status">
            {&notification.message}
        </div>
    }
}
