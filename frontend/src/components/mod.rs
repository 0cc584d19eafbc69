pub mod forms;
pub mod gallery;
pub mod header;
pub mod menu_section;
pub mod notification;
pub mod opening_hours;
pub mod promo_modal;
pub mod scroll_to_top;
pub mod section_link;
pub mod testimonials;
