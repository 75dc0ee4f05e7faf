//! Census Rater - age-banded rate matching for employee benefits proposals
//!
//! This library provides:
//! - Spreadsheet header normalization (non-breaking spaces, whitespace runs,
//!   trailing periods)
//! - Age derivation from census birth dates as of a renewal date
//! - Age-band rate table parsing with first-match (plan, age) lookup
//! - A single-pass census rating transform that appends one premium column
//!   per plan

pub mod age;
pub mod census;
pub mod error;
pub mod headers;
pub mod rates;
pub mod rating;

// Re-export commonly used types
pub use census::{Cell, CensusTable};
pub use error::RatingError;
pub use rates::{AgeBand, RateTable};
pub use rating::{rate_census, AGE_COLUMN, DOB_COLUMN};
