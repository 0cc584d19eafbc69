use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use js_sys::Date;

/// Local wall-clock time from the browser
pub fn current_local_datetime() -> NaiveDateTime {
    let now = Date::new_0();
    let date = NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1, // JavaScript months are 0-indexed
        now.get_date(),
    )
    .unwrap_or_default();
    let time = NaiveTime::from_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds())
        .unwrap_or_default();
    date.and_time(time)
}

pub fn today() -> NaiveDate {
    current_local_datetime().date()
}

/// 0 = Sunday, 1 = Monday, etc.
pub fn current_weekday() -> u32 {
    Date::new_0().get_day()
}

/// YYYY-MM-DD, the format date inputs use for `min`/`max`
pub fn to_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_to_input_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(to_input_date(date), "2025-03-07");
    }

    #[wasm_bindgen_test]
    fn test_weekday_matches_datetime() {
        use chrono::Datelike;
        assert_eq!(current_weekday(), current_local_datetime().weekday().num_days_from_sunday());
    }
}
