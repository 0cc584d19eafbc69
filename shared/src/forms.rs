//! Form definitions and the simulated submission flow.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::scheduler::Scheduler;
use crate::validation::{is_valid_email, FieldInput, FieldKind, FieldValidator};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// Toast message shown to the visitor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn info(message: &str) -> Self {
        Self { message: message.to_string(), level: NotificationLevel::Info }
    }

    pub fn success(message: &str) -> Self {
        Self { message: message.to_string(), level: NotificationLevel::Success }
    }

    pub fn error(message: &str) -> Self {
        Self { message: message.to_string(), level: NotificationLevel::Error }
    }
}

/// The one visible toast. Each `show` hands back a ticket; only the ticket of
/// the newest toast can dismiss it, so a replaced toast's timer is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastSlot {
    current: Option<Notification>,
    generation: u32,
}

impl ToastSlot {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn show(&mut self, notification: Notification) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(notification);
        self.generation
    }

    /// Clear the toast if `ticket` is still the newest. Returns whether it cleared.
    pub fn expire(&mut self, ticket: u32) -> bool {
        if ticket != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FormKind {
    Reservation,
    Contact,
    Newsletter,
}

impl FormKind {
    pub fn failure_message(&self) -> &'static str {
        match self {
            FormKind::Reservation | FormKind::Contact => "Please fill in all required fields correctly",
            FormKind::Newsletter => "Please enter a valid email address",
        }
    }

    pub fn pending_message(&self) -> &'static str {
        match self {
            FormKind::Reservation => "Processing your reservation...",
            FormKind::Contact => "Sending your message...",
            FormKind::Newsletter => "Subscribing...",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            FormKind::Reservation => "Thank you! Your reservation has been confirmed. We will contact you shortly.",
            FormKind::Contact => "Thank you for contacting us! We will respond within 24 hours.",
            FormKind::Newsletter => "Successfully subscribed to our newsletter!",
        }
    }

    /// Empty controls in page order
    pub fn fields(&self) -> Vec<FieldInput> {
        match self {
            FormKind::Reservation => vec![
                FieldInput::new("name", FieldKind::Text, true),
                FieldInput::new("email", FieldKind::Email, true),
                FieldInput::new("phone", FieldKind::Telephone, true),
                FieldInput::new("date", FieldKind::Date, true),
                FieldInput::new("time", FieldKind::Text, true),
                FieldInput::new("guests", FieldKind::Text, true),
                FieldInput::new("occasion", FieldKind::Text, false),
                FieldInput::new("requests", FieldKind::Text, false),
            ],
            FormKind::Contact => vec![
                FieldInput::new("name", FieldKind::Text, true),
                FieldInput::new("email", FieldKind::Email, true),
                FieldInput::new("subject", FieldKind::Text, true),
                FieldInput::new("message", FieldKind::Text, true),
            ],
            FormKind::Newsletter => vec![FieldInput::new("email", FieldKind::Email, true)],
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Pending,
    Succeeded,
}

/// Values, inline errors and submission status of one form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormState {
    pub kind: FormKind,
    pub fields: Vec<FieldInput>,
    pub errors: BTreeMap<String, String>,
    pub status: SubmissionStatus,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            fields: kind.fields(),
            errors: BTreeMap::new(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(|field| field.value.as_str()).unwrap_or("")
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    fn field(&self, name: &str) -> Option<&FieldInput> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Store a new value. A field already showing an error is re-checked as the visitor types.
    pub fn set_value(&mut self, name: &str, value: &str, validator: &FieldValidator) {
        if let Some(field) = self.fields.iter_mut().find(|field| field.name == name) {
            field.value = value.to_string();
        }
        if self.errors.contains_key(name) {
            self.check_field(name, validator);
        }
    }

    /// Blur handler: validate one field and update its inline error
    pub fn check_field(&mut self, name: &str, validator: &FieldValidator) -> bool {
        let Some(field) = self.field(name) else { return true };
        let result = validator.validate(field.kind, &field.value, field.required);
        match result.message() {
            Some(message) => {
                self.errors.insert(name.to_string(), message.to_string());
                false
            }
            None => {
                self.errors.remove(name);
                true
            }
        }
    }

    /// Validate and move to `Pending`, or record errors and report the failure
    pub fn submit(&mut self, validator: &FieldValidator) -> Result<Notification, Notification> {
        if self.kind == FormKind::Newsletter {
            let email = self.value("email").to_string();
            if !is_valid_email(&email) {
                return Err(Notification::error(self.kind.failure_message()));
            }
        } else {
            let validation = validator.validate_form(&self.fields);
            self.errors = validation.errors;
            if !self.errors.is_empty() {
                log::debug!("{:?} form rejected: {} invalid fields", self.kind, self.errors.len());
                return Err(Notification::error(self.kind.failure_message()));
            }
        }

        self.status = SubmissionStatus::Pending;
        Ok(Notification::info(self.kind.pending_message()))
    }

    /// Finish a pending submission: clear the form and report success
    pub fn complete(&mut self) -> Notification {
        let kind = self.kind;
        *self = Self::new(kind);
        self.status = SubmissionStatus::Succeeded;
        Notification::success(kind.success_message())
    }

    /// Field values keyed by name, for logging the payload
    pub fn payload(&self) -> BTreeMap<&str, &str> {
        self.fields
            .iter()
            .map(|field| (field.name.as_str(), field.value.as_str()))
            .collect()
    }
}

/// Resolve a submission after `delay_ms`. There is no way to cancel it.
///
/// `on_done` typically calls `FormState::complete` and shows the notification it returns.
pub fn simulate_submission<S: Scheduler>(
    scheduler: &S,
    delay_ms: u32,
    kind: FormKind,
    on_done: impl FnOnce() + 'static,
) {
    log::debug!("simulating {:?} submission ({}ms)", kind, delay_ms);
    scheduler.once(delay_ms, Box::new(on_done));
}

/// Earliest and latest bookable dates: tomorrow through `horizon_months` from today
pub fn reservation_date_bounds(today: NaiveDate, horizon_months: u32) -> (NaiveDate, NaiveDate) {
    let min = today.checked_add_days(Days::new(1)).unwrap_or(today);
    let max = today
        .checked_add_months(Months::new(horizon_months))
        .unwrap_or(today);
    (min, max)
}
