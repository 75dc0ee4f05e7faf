//! Age derivation from census birth dates
//!
//! Ages are computed as floor(days / 365.25) from the renewal date. This is
//! an approximation, not a calendar-accurate attained age: someone a day
//! short of a birthday can land a year off depending on intervening leap
//! days. That behavior is intentional and pinned by the tests here.

use chrono::NaiveDate;

/// Accepted census date encodings, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%m-%d-%Y",
    "%Y/%m/%d",
];

/// Coerce a raw census cell to a date. Unparseable or empty values yield
/// `None`, which propagates as an unknown age and null rates downstream.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Tolerate a trailing midnight timestamp from spreadsheet exports
    let date_part = trimmed.split_whitespace().next().unwrap_or(trimmed);

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}

/// Whole-year age as of `reference`, via floor((reference - dob) / 365.25).
///
/// Negative when the birth date is after the reference date; callers treat
/// that as a valid age that matches no band rather than an error.
pub fn age_in_years(dob: NaiveDate, reference: NaiveDate) -> i32 {
    let days = (reference - dob).num_days() as f64;
    (days / 365.25).floor() as i32
}
