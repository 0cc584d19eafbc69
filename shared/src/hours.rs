//! Opening hours and live open/closed status.
//!
//! The weekly schedule is a fixed table of rules keyed by weekday
//! (0 = Sunday .. 6 = Saturday). Every weekday belongs to exactly one rule,
//! so the lookup is a total function over weekdays. Times are minutes since
//! midnight; midnight at the end of the day is written as 1440.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Open interval shared by a set of weekdays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayScheduleRule {
    pub days: &'static [u32],
    pub open_minute: u32,
    pub close_minute: u32,
}

impl DayScheduleRule {
    pub fn applies_to(&self, weekday: u32) -> bool {
        self.days.contains(&weekday)
    }

    /// Open boundary inclusive, close boundary exclusive
    pub fn is_open_at(&self, minute_of_day: u32) -> bool {
        self.open_minute <= minute_of_day && minute_of_day < self.close_minute
    }
}

/// Monday-Thursday 12:00-23:00, Friday-Saturday 12:00-24:00, Sunday 11:00-23:00
pub static WEEKLY_SCHEDULE: [DayScheduleRule; 3] = [
    DayScheduleRule { days: &[1, 2, 3, 4], open_minute: 12 * 60, close_minute: 23 * 60 },
    DayScheduleRule { days: &[5, 6], open_minute: 12 * 60, close_minute: MINUTES_PER_DAY },
    DayScheduleRule { days: &[0], open_minute: 11 * 60, close_minute: 23 * 60 },
];

/// Live status for display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpenStatus {
    pub is_open: bool,
    /// Minutes until close; zero when closed
    pub remaining_minutes: u32,
}

impl OpenStatus {
    pub fn closed() -> Self {
        Self { is_open: false, remaining_minutes: 0 }
    }

    /// Whole hours until close. Truncates, so 89 minutes reads as 1 hour.
    pub fn hours_until_close(&self) -> u32 {
        self.remaining_minutes / 60
    }

    pub fn message(&self) -> String {
        if self.is_open {
            format!("🟢 We're Open Now! Closing in {} hours", self.hours_until_close())
        } else {
            "🔴 Currently Closed".to_string()
        }
    }
}

/// Rule for a weekday ordinal (0 = Sunday). Weekdays past 6 wrap.
pub fn rule_for(weekday: u32) -> &'static DayScheduleRule {
    let weekday = weekday % 7;
    WEEKLY_SCHEDULE
        .iter()
        .find(|rule| rule.applies_to(weekday))
        .unwrap_or(&WEEKLY_SCHEDULE[WEEKLY_SCHEDULE.len() - 1])
}

/// Status for a weekday and minute of day
pub fn evaluate_at(weekday: u32, minute_of_day: u32) -> OpenStatus {
    let rule = rule_for(weekday);
    if rule.is_open_at(minute_of_day) {
        OpenStatus {
            is_open: true,
            remaining_minutes: rule.close_minute - minute_of_day,
        }
    } else {
        OpenStatus::closed()
    }
}

/// Status for a local wall-clock time
pub fn evaluate(now: NaiveDateTime) -> OpenStatus {
    let weekday = now.weekday().num_days_from_sunday();
    let minute_of_day = now.hour() * 60 + now.minute();
    evaluate_at(weekday, minute_of_day)
}

/// Check that the rules cover each weekday exactly once with a non-empty interval
pub fn schedule_is_partition(rules: &[DayScheduleRule]) -> bool {
    (0..7).all(|day| rules.iter().filter(|rule| rule.applies_to(day)).count() == 1)
        && rules.iter().all(|rule| {
            rule.open_minute < rule.close_minute && rule.close_minute <= MINUTES_PER_DAY
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_weekly_schedule_is_partition() {
        assert!(schedule_is_partition(&WEEKLY_SCHEDULE));
    }

    #[test]
    fn test_overlapping_rules_are_not_partition() {
        let rules = [
            DayScheduleRule { days: &[0, 1, 2, 3], open_minute: 0, close_minute: 60 },
            DayScheduleRule { days: &[3, 4, 5, 6], open_minute: 0, close_minute: 60 },
        ];
        assert!(!schedule_is_partition(&rules));
    }

    #[test]
    fn test_tuesday_afternoon_is_open() {
        // 2025-06-17 is a Tuesday
        let status = evaluate(at(2025, 6, 17, 13, 0));
        assert!(status.is_open);
        assert_eq!(status.remaining_minutes, 600);
        assert_eq!(status.hours_until_close(), 10);
        assert_eq!(status.message(), "🟢 We're Open Now! Closing in 10 hours");
    }

    #[test]
    fn test_sunday_morning_is_closed() {
        // 2025-06-15 is a Sunday
        let status = evaluate(at(2025, 6, 15, 10, 0));
        assert!(!status.is_open);
        assert_eq!(status.message(), "🔴 Currently Closed");
    }

    #[test]
    fn test_boundaries() {
        for (weekday, rule) in (0..7).map(|d| (d, rule_for(d))) {
            assert!(evaluate_at(weekday, rule.open_minute).is_open);
            assert!(!evaluate_at(weekday, rule.open_minute - 1).is_open);
            assert!(evaluate_at(weekday, rule.close_minute - 1).is_open);
            assert!(!evaluate_at(weekday, rule.close_minute).is_open);
        }
    }

    #[test]
    fn test_every_minute_matches_table() {
        for weekday in 0..7 {
            let (open, close) = match weekday {
                1..=4 => (720, 1380),
                5 | 6 => (720, 1440),
                _ => (660, 1380),
            };
            for minute in 0..MINUTES_PER_DAY {
                let status = evaluate_at(weekday, minute);
                assert_eq!(status.is_open, open <= minute && minute < close, "day {weekday} minute {minute}");
            }
        }
    }

    #[test]
    fn test_friday_closes_at_midnight() {
        // 2025-06-20 is a Friday
        let status = evaluate(at(2025, 6, 20, 23, 59));
        assert!(status.is_open);
        assert_eq!(status.remaining_minutes, 1);
        assert_eq!(status.hours_until_close(), 0);
    }

    #[test]
    fn test_hours_truncate() {
        let status = OpenStatus { is_open: true, remaining_minutes: 89 };
        assert_eq!(status.hours_until_close(), 1);
    }
}
