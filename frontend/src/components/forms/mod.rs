pub mod contact_form;
pub mod form_field;
pub mod newsletter_form;
pub mod reservation_form;

pub use contact_form::ContactForm;
pub use newsletter_form::NewsletterForm;
pub use reservation_form::ReservationForm;
