//! Error taxonomy for the rating pass
//!
//! Only column-level structural problems are errors: a census without a
//! `DOB` column, or an input file that cannot be read at all. Cell- and
//! row-level problems (unparseable dates, bad age-range labels, non-numeric
//! premiums) never surface here; they are absorbed as absent values so a
//! rating pass always yields maximal partial output.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RatingError {
    /// The census has no column that normalizes to exactly "DOB". Fatal for
    /// the rating pass: no augmented output is produced, and callers surface
    /// this distinctly from "DOB present but some ages unknown".
    #[error("census file must include a column labeled \"DOB\"")]
    MissingDobColumn,

    /// An input file was structurally unreadable as CSV. Fatal for that
    /// file's stage only.
    #[error("failed to parse spreadsheet: {0}")]
    Csv(#[from] csv::Error),

    /// An input file could not be opened or read.
    #[error("failed to read input file: {0}")]
    Io(#[from] std::io::Error),
}
