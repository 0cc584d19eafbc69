//! Client-side behavior for the Zestha restaurant site.
//!
//! Everything here is plain Rust with no browser dependency; the `frontend`
//! crate feeds it wall-clock time, storage and timers.

pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod cyclic_index;
pub mod forms;
pub mod hours;
pub mod lightbox;
pub mod menu;
pub mod navigation;
pub mod preferences;
pub mod scheduler;
pub mod validation;

pub use autoplay::{AutoplayController, AutoplayError, AutoplayState};
pub use carousel::Carousel;
pub use config::{ConfigError, SiteConfig};
pub use cyclic_index::{CyclicIndex, NavigationError};
pub use forms::{
    reservation_date_bounds, simulate_submission, FormKind, FormState, Notification,
    NotificationLevel, SubmissionStatus, ToastSlot,
};
pub use hours::{evaluate, DayScheduleRule, OpenStatus, WEEKLY_SCHEDULE};
pub use lightbox::{Lightbox, LightboxKey};
pub use menu::{todays_special, DailySpecial, MenuFilter};
pub use navigation::{MobileMenu, SectionBounds};
pub use preferences::{FlagStore, MemoryFlagStore, PromoModalController, Theme, ThemeController};
pub use scheduler::{ManualScheduler, Scheduler};
pub use validation::{FieldInput, FieldKind, FieldValidator, FormValidation, ValidationResult};
