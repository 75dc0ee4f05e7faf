//! The rating pass: join census ages against the rate table
//!
//! A single-pass, stateless transform. Given a loaded census, a built rate
//! table, and the renewal date, it appends an `"Age as of Renewal"` column
//! and one `"<plan> Rate"` column per plan. Records are never dropped or
//! reordered, and original columns are untouched; members with unknown ages
//! simply carry null ages and null rates.

use crate::age::{age_in_years, parse_date};
use crate::census::{Cell, CensusTable};
use crate::error::RatingError;
use crate::rates::RateTable;
use chrono::NaiveDate;

/// Required census column holding birth dates, post-normalization.
pub const DOB_COLUMN: &str = "DOB";

/// Derived column holding each member's age as of the renewal date.
pub const AGE_COLUMN: &str = "Age as of Renewal";

/// Name of the derived premium column for a plan.
pub fn rate_column(plan: &str) -> String {
    format!("{} Rate", plan)
}

/// Rate every census member against every plan as of `renewal`.
///
/// Fails only when the census lacks a `DOB` column; every other data problem
/// degrades to a null cell in the output.
pub fn rate_census(
    census: &CensusTable,
    rates: &RateTable,
    renewal: NaiveDate,
) -> Result<CensusTable, RatingError> {
    let dob_idx = census
        .column_index(DOB_COLUMN)
        .ok_or(RatingError::MissingDobColumn)?;

    // One age per record, null where the birth date is absent or unparseable
    let ages: Vec<Option<i32>> = census
        .rows
        .iter()
        .map(|row| {
            row.get(dob_idx)
                .and_then(Cell::as_text)
                .and_then(parse_date)
                .map(|dob| age_in_years(dob, renewal))
        })
        .collect();

    let unknown = ages.iter().filter(|a| a.is_none()).count();
    if unknown > 0 {
        log::info!(
            "{} of {} census records have no parseable birth date and will receive no rates",
            unknown,
            census.len()
        );
    }

    let mut rated = census.clone();
    rated.push_column(
        AGE_COLUMN,
        ages.iter()
            .map(|age| match age {
                Some(a) => Cell::Int(*a as i64),
                None => Cell::Empty,
            })
            .collect(),
    );

    for (plan_idx, plan) in rates.plans().iter().enumerate() {
        let premiums: Vec<Cell> = ages
            .iter()
            .map(|age| match age.and_then(|a| rates.rate_at(plan_idx, a)) {
                Some(premium) => Cell::Float(premium),
                None => Cell::Empty,
            })
            .collect();
        rated.push_column(rate_column(plan), premiums);
    }

    Ok(rated)
}
