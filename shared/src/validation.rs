//! Field validation for the reservation, contact and newsletter forms.
//!
//! Rules run in a fixed order and the first failure wins:
//! required, then the kind-specific check on non-empty values.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number";
pub const DATE_MESSAGE: &str = "Please select a future date";

// Permissive local@domain.tld shape, not RFC 5322
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s+\-()]{10,}$").expect("valid phone regex"));

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, select or textarea: only the required rule applies
    Text,
    Email,
    Telephone,
    Date,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    fn invalid(message: &str) -> Self {
        Self::Invalid(message.to_string())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message),
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Validates fields against a fixed "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValidator {
    today: NaiveDate,
}

impl FieldValidator {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn validate(&self, kind: FieldKind, value: &str, required: bool) -> ValidationResult {
        if required && value.trim().is_empty() {
            return ValidationResult::invalid(REQUIRED_MESSAGE);
        }
        if value.is_empty() {
            return ValidationResult::Valid;
        }

        match kind {
            FieldKind::Email if !is_valid_email(value) => ValidationResult::invalid(EMAIL_MESSAGE),
            FieldKind::Telephone if !is_valid_phone(value) => ValidationResult::invalid(PHONE_MESSAGE),
            FieldKind::Date if !self.is_today_or_later(value) => ValidationResult::invalid(DATE_MESSAGE),
            _ => ValidationResult::Valid,
        }
    }

    // Unparseable dates count as past dates
    fn is_today_or_later(&self, value: &str) -> bool {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map(|date| date >= self.today)
            .unwrap_or(false)
    }

    /// Check every field; nothing short-circuits so all errors surface together
    pub fn validate_form(&self, fields: &[FieldInput]) -> FormValidation {
        let errors = fields
            .iter()
            .filter(|field| field.required || !field.value.is_empty())
            .filter_map(|field| {
                self.validate(field.kind, &field.value, field.required)
                    .message()
                    .map(|message| (field.name.clone(), message.to_string()))
            })
            .collect();
        FormValidation { errors }
    }
}

/// One form control as submitted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldInput {
    pub name: String,
    pub kind: FieldKind,
    pub value: String,
    pub required: bool,
}

impl FieldInput {
    pub fn new(name: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            kind,
            value: String::new(),
            required,
        }
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }
}

/// Errors keyed by field name
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormValidation {
    pub errors: BTreeMap<String, String>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> FieldValidator {
        FieldValidator::new(NaiveDate::from_ymd_opt(2025, 6, 17).unwrap())
    }

    #[test]
    fn test_required_empty() {
        let v = validator();
        assert_eq!(
            v.validate(FieldKind::Text, "", true),
            ValidationResult::Invalid("This field is required".to_string())
        );
        assert_eq!(
            v.validate(FieldKind::Text, "   ", true),
            ValidationResult::Invalid("This field is required".to_string())
        );
        assert_eq!(v.validate(FieldKind::Text, "", false), ValidationResult::Valid);
    }

    #[test]
    fn test_email() {
        let v = validator();
        assert_eq!(
            v.validate(FieldKind::Email, "not-an-email", true),
            ValidationResult::Invalid("Please enter a valid email".to_string())
        );
        assert_eq!(v.validate(FieldKind::Email, "a@b.com", true), ValidationResult::Valid);
        assert!(!v.validate(FieldKind::Email, "a b@c.com", true).is_valid());
        assert!(!v.validate(FieldKind::Email, "a@@b.com", true).is_valid());
        assert!(!v.validate(FieldKind::Email, "a@bcom", true).is_valid());
    }

    #[test]
    fn test_required_wins_over_kind_check() {
        let v = validator();
        assert_eq!(v.validate(FieldKind::Email, " ", true).message(), Some(REQUIRED_MESSAGE));
        // Not required: whitespace still goes through the email check
        assert_eq!(v.validate(FieldKind::Email, " ", false).message(), Some(EMAIL_MESSAGE));
    }

    #[test]
    fn test_phone() {
        let v = validator();
        assert!(v.validate(FieldKind::Telephone, "+1 (555) 123-4567", true).is_valid());
        assert!(v.validate(FieldKind::Telephone, "0123456789", true).is_valid());
        assert_eq!(
            v.validate(FieldKind::Telephone, "12345", true).message(),
            Some(PHONE_MESSAGE)
        );
        assert_eq!(
            v.validate(FieldKind::Telephone, "555-CALL-NOW", true).message(),
            Some(PHONE_MESSAGE)
        );
    }

    #[test]
    fn test_date() {
        let v = validator();
        assert_eq!(
            v.validate(FieldKind::Date, "2000-01-01", true),
            ValidationResult::Invalid("Please select a future date".to_string())
        );
        assert!(v.validate(FieldKind::Date, "2025-06-17", true).is_valid());
        assert!(v.validate(FieldKind::Date, "2025-06-18", true).is_valid());
        assert!(!v.validate(FieldKind::Date, "2025-06-16", true).is_valid());
        assert!(!v.validate(FieldKind::Date, "someday", true).is_valid());
    }

    #[test]
    fn test_form_collects_every_error() {
        let v = validator();
        let fields = vec![
            FieldInput::new("name", FieldKind::Text, true),
            FieldInput::new("email", FieldKind::Email, true).with_value("nope"),
            FieldInput::new("phone", FieldKind::Telephone, true).with_value("5551234567"),
            FieldInput::new("requests", FieldKind::Text, false),
        ];
        let result = v.validate_form(&fields);
        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.error_for("name"), Some(REQUIRED_MESSAGE));
        assert_eq!(result.error_for("email"), Some(EMAIL_MESSAGE));
        assert_eq!(result.error_for("phone"), None);
    }

    #[test]
    fn test_optional_filled_field_is_checked() {
        let v = validator();
        let fields = vec![FieldInput::new("backup_email", FieldKind::Email, false).with_value("x@y")];
        assert_eq!(v.validate_form(&fields).error_for("backup_email"), Some(EMAIL_MESSAGE));
    }
}
