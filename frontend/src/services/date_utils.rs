use chrono::{DateTime, NaiveDate, Utc};
use contact_form_domain::{Clock, DATE_INPUT_FORMAT};
use js_sys::Date;

/// Clock backed by the browser's `Date`, so "today" follows the user's timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(Date::now() as i64).unwrap_or_default()
    }

    fn today(&self) -> NaiveDate {
        get_current_naive_date()
    }
}

/// Today's local date as reported by the browser
pub fn get_current_naive_date() -> NaiveDate {
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| Utc::now().date_naive())
}

/// Get current date in YYYY-MM-DD format, as used by `<input type="date">`
pub fn get_current_date() -> String {
    get_current_naive_date().format(DATE_INPUT_FORMAT).to_string()
}
