//! Column header normalization for employer-supplied spreadsheets
//!
//! Census and rate-sheet exports arrive with inconsistent header formatting:
//! non-breaking spaces from Excel, doubled spaces, stray trailing periods.
//! Downstream lookups key on column names, so every loader canonicalizes its
//! headers through this module before anything else touches them.

/// Normalize a single raw column label.
///
/// Applied in order:
/// 1. non-breaking spaces (U+00A0) become ordinary spaces
/// 2. runs of whitespace collapse to a single space
/// 3. a single trailing period is stripped
/// 4. leading/trailing whitespace is trimmed
pub fn normalize_label(raw: &str) -> String {
    let replaced = raw.replace('\u{a0}', " ");

    let mut collapsed = String::with_capacity(replaced.len());
    let mut in_whitespace = false;
    for ch in replaced.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                collapsed.push(' ');
            }
            in_whitespace = true;
        } else {
            collapsed.push(ch);
            in_whitespace = false;
        }
    }

    let without_dot = collapsed.strip_suffix('.').unwrap_or(&collapsed);
    without_dot.trim().to_string()
}

/// Normalize an ordered sequence of labels. Order and cardinality are
/// preserved; collisions produced by normalization are not merged here
/// (see [`duplicate_labels`]).
pub fn normalize_labels<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter().map(|label| normalize_label(label.as_ref())).collect()
}

/// Labels that appear more than once in an already-normalized header set,
/// in first-occurrence order. Loaders warn on these rather than merging
/// columns, since a collision means two source columns became
/// indistinguishable by name.
pub fn duplicate_labels(labels: &[String]) -> Vec<String> {
    let mut duplicates = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        if labels[..i].contains(label) && !duplicates.contains(label) {
            duplicates.push(label.clone());
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_breaking_space_replaced() {
        assert_eq!(normalize_label("Employee\u{a0}Name"), "Employee Name");
    }

    #[test]
    fn test_whitespace_collapsed_and_trimmed() {
        assert_eq!(normalize_label("  First   Name \t"), "First Name");
    }

    #[test]
    fn test_single_trailing_period_stripped() {
        assert_eq!(normalize_label("DOB."), "DOB");
        // Only one trailing period is stripped
        assert_eq!(normalize_label("DOB.."), "DOB.");
        // Interior periods untouched
        assert_eq!(normalize_label("Dept. Code"), "Dept. Code");
    }

    #[test]
    fn test_messy_and_clean_labels_converge() {
        assert_eq!(normalize_label("Age  Range."), "Age Range");
        assert_eq!(normalize_label("Age Range"), "Age Range");
    }

    #[test]
    fn test_idempotent() {
        let raw = vec!["Age\u{a0} Range.", " DOB ", "Plan  A"];
        let once = normalize_labels(&raw);
        let twice = normalize_labels(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_order_and_cardinality_preserved() {
        let raw = vec!["B.", "A", "B"];
        let normalized = normalize_labels(&raw);
        assert_eq!(normalized, vec!["B", "A", "B"]);
    }

    #[test]
    fn test_duplicates_flagged_not_merged() {
        let labels = normalize_labels(&["DOB.", "Name", "DOB"]);
        assert_eq!(labels.len(), 3);
        assert_eq!(duplicate_labels(&labels), vec!["DOB".to_string()]);
    }

    #[test]
    fn test_no_duplicates() {
        let labels = normalize_labels(&["DOB", "Name"]);
        assert!(duplicate_labels(&labels).is_empty());
    }
}
