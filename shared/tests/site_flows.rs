use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use shared::{
    evaluate, simulate_submission, Carousel, FieldKind, FieldValidator, FormKind, FormState,
    ManualScheduler, NotificationLevel, SiteConfig, SubmissionStatus, ValidationResult,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 17).unwrap()
}

#[test]
fn open_status_for_tuesday_lunch_and_sunday_morning() {
    let tuesday = today().and_hms_opt(13, 0, 0).unwrap();
    let status = evaluate(tuesday);
    assert!(status.is_open);
    assert_eq!(format!("{} hours", status.hours_until_close()), "10 hours");

    let sunday = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap().and_hms_opt(10, 0, 0).unwrap();
    assert!(!evaluate(sunday).is_open);
}

#[test]
fn validator_examples() {
    let validator = FieldValidator::new(today());
    assert_eq!(
        validator.validate(FieldKind::Email, "not-an-email", true),
        ValidationResult::Invalid("Please enter a valid email".to_string())
    );
    assert_eq!(validator.validate(FieldKind::Email, "a@b.com", true), ValidationResult::Valid);
    assert_eq!(
        validator.validate(FieldKind::Text, "", true),
        ValidationResult::Invalid("This field is required".to_string())
    );
    assert_eq!(
        validator.validate(FieldKind::Date, "2000-01-01", true),
        ValidationResult::Invalid("Please select a future date".to_string())
    );
}

#[test]
fn reservation_submission_confirms_after_delay_and_resets() {
    let config = SiteConfig::default();
    let scheduler = ManualScheduler::new();
    let validator = FieldValidator::new(today());

    let form = Rc::new(RefCell::new(FormState::new(FormKind::Reservation)));
    {
        let mut form = form.borrow_mut();
        for (name, value) in [
            ("name", "Giulia Rossi"),
            ("email", "giulia@example.com"),
            ("phone", "+39 055 123 4567"),
            ("date", "2025-06-20"),
            ("time", "19:30"),
            ("guests", "4"),
        ] {
            form.set_value(name, value, &validator);
        }
    }

    let pending = form.borrow_mut().submit(&validator).unwrap();
    assert_eq!(pending.message, "Processing your reservation...");
    assert_eq!(pending.level, NotificationLevel::Info);

    let toasts = Rc::new(RefCell::new(Vec::new()));
    let (done_form, done_toasts) = (form.clone(), toasts.clone());
    simulate_submission(&scheduler, config.submit_delay_ms, FormKind::Reservation, move || {
        let notification = done_form.borrow_mut().complete();
        done_toasts.borrow_mut().push(notification);
    });

    scheduler.advance(u64::from(config.submit_delay_ms) - 1);
    assert!(toasts.borrow().is_empty());
    assert_eq!(form.borrow().status, SubmissionStatus::Pending);

    scheduler.advance(1);
    assert_eq!(
        toasts.borrow()[0].message,
        "Thank you! Your reservation has been confirmed. We will contact you shortly."
    );
    let form = form.borrow();
    assert_eq!(form.status, SubmissionStatus::Succeeded);
    assert!(form.fields.iter().all(|field| field.value.is_empty()));
    assert!(form.errors.is_empty());
}

#[test]
fn carousel_dot_click_while_hovering() {
    let scheduler = ManualScheduler::new();
    let shown = Rc::new(RefCell::new(0));
    let slot = shown.clone();
    let mut carousel = Carousel::new(3, scheduler.clone(), 5000, move |i| *slot.borrow_mut() = i).unwrap();
    carousel.start().unwrap();

    carousel.pointer_enter();
    carousel.select(2).unwrap();
    assert_eq!(*shown.borrow(), 2);
    // Leaving after a dot click finds autoplay already live; no second timer
    assert!(carousel.pointer_leave().is_err());
    assert_eq!(scheduler.live_timers(), 1);

    scheduler.advance(5000);
    assert_eq!(*shown.borrow(), 0);
}
