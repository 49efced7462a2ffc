use chrono::{Datelike, NaiveDate};
use shared::ContactValidationError;

/// Format used by `<input type="date">`
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Parse a YYYY-MM-DD date of birth
pub fn parse_date_of_birth(raw: &str) -> Result<NaiveDate, ContactValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ContactValidationError::DateOfBirthRequired);
    }

    NaiveDate::parse_from_str(trimmed, DATE_INPUT_FORMAT)
        .map_err(|_| ContactValidationError::DateOfBirthInvalid(trimmed.to_string()))
}

/// Whole years between `birth` and `today`.
///
/// Returns `None` for dates in the future. The year difference is reduced by
/// one while `today`'s month/day still precedes the birthday's month/day.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    if birth > today {
        return None;
    }

    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }

    u32::try_from(years).ok()
}

/// Text shown in the read-only age field
pub fn format_age(age: Option<u32>) -> String {
    match age {
        Some(age) => format!("{} years old", age),
        None => String::new(),
    }
}
