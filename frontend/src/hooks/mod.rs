pub mod use_form;
pub mod use_notification;
pub mod use_open_status;
pub mod use_periodic_refresh;
pub mod use_scroll_position;
pub mod use_theme;
