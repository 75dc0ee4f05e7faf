//! Age-band rate table: parse once per rate sheet, then (plan, age) lookups
//!
//! The table is built from raw rows whose first column is a textual age-range
//! label ("25 - 29") and whose remaining columns are per-plan premiums. Bad
//! data degrades locally: rows with blank labels are dropped, rows whose
//! label does not parse contribute no band, and non-numeric premium cells
//! resolve to no rate for that (plan, age) pair only. Nothing at the row or
//! cell level fails the whole table.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Age-range labels look like "<min> - <max>", whitespace-tolerant around
/// the hyphen; trailing text ("25 - 29 yrs") is ignored.
static AGE_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d+)\s*-\s*(\d+)").expect("valid age range pattern"));

/// One parsed rate-sheet row: an inclusive age interval with one premium
/// slot per plan. Immutable once the table is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeBand {
    pub min_age: i32,
    pub max_age: i32,
    /// Premiums aligned with the table's plan order; `None` where the source
    /// cell was non-numeric.
    pub premiums: Vec<Option<f64>>,
}

impl AgeBand {
    /// Whether the band covers the given age (inclusive on both ends).
    pub fn covers(&self, age: i32) -> bool {
        self.min_age <= age && age <= self.max_age
    }
}

/// Parsed rate table: plan names plus age bands in original row order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateTable {
    plans: Vec<String>,
    bands: Vec<AgeBand>,
}

impl RateTable {
    /// Build a table from normalized headers and raw data rows.
    ///
    /// The first header is the age-range column; every other header is a
    /// plan name. Each row's first field is its age-range label and the rest
    /// are that band's premiums, in header order.
    pub fn from_rows<S: AsRef<str>>(headers: &[String], rows: &[Vec<S>]) -> Self {
        let plans: Vec<String> = headers.iter().skip(1).cloned().collect();
        let mut bands = Vec::new();

        for row in rows {
            let label = match row.first() {
                Some(label) if !label.as_ref().trim().is_empty() => label.as_ref(),
                // Blank age-range label: not a rate row
                _ => continue,
            };

            let (min_age, max_age) = match parse_age_range(label) {
                Some(range) => range,
                None => {
                    log::debug!("skipping rate row with unparseable age range {:?}", label);
                    continue;
                }
            };

            let mut premiums = Vec::with_capacity(plans.len());
            for i in 0..plans.len() {
                let cell = row.get(i + 1).map(|c| c.as_ref()).unwrap_or("");
                premiums.push(parse_premium(cell));
            }

            bands.push(AgeBand {
                min_age,
                max_age,
                premiums,
            });
        }

        Self { plans, bands }
    }

    /// Plan names in rate-sheet column order.
    pub fn plans(&self) -> &[String] {
        &self.plans
    }

    /// Parsed bands in rate-sheet row order.
    pub fn bands(&self) -> &[AgeBand] {
        &self.bands
    }

    /// Premium for `plan` at `age`: the first band in row order covering the
    /// age. `None` when the plan is unknown, no band covers the age, or the
    /// matched cell was non-numeric. Never zero, never an error.
    pub fn rate(&self, plan: &str, age: i32) -> Option<f64> {
        let idx = self.plans.iter().position(|p| p == plan)?;
        self.rate_at(idx, age)
    }

    /// Premium lookup by plan column index; the rating pass resolves each
    /// plan's index once instead of per record.
    pub fn rate_at(&self, plan_idx: usize, age: i32) -> Option<f64> {
        self.bands
            .iter()
            .find(|band| band.covers(age))
            .and_then(|band| band.premiums.get(plan_idx).copied().flatten())
    }
}

/// Parse "<int> - <int>" age-range labels. Anything else is unparseable and
/// the row contributes no band.
fn parse_age_range(label: &str) -> Option<(i32, i32)> {
    let caps = AGE_RANGE_RE.captures(label)?;
    let min: i32 = caps[1].parse().ok()?;
    let max: i32 = caps[2].parse().ok()?;
    Some((min, max))
}

/// Fail-soft premium parsing. Tolerates currency formatting ("$1,234.56");
/// anything else yields no rate for that cell.
fn parse_premium(cell: &str) -> Option<f64> {
    let cleaned: String = cell
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|&c| c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}
