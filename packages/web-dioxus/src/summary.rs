//! Compact rendering of list-valued fields for table cells

use crate::types::ListField;

/// Entries shown before the remainder is collapsed into a count.
pub const SUMMARY_LIMIT: usize = 2;

/// Summarize a list field for a table cell, e.g. `"A, B +3 lainnya"`.
pub fn summarize(field: &ListField) -> String {
    summarize_items(field.as_slice(), SUMMARY_LIMIT)
}

/// Join up to `max` entries with `", "`; any remainder becomes `" +N lainnya"`.
pub fn summarize_items(items: &[String], max: usize) -> String {
    if items.len() <= max {
        return items.join(", ");
    }

    format!("{} +{} lainnya", items[..max].join(", "), items.len() - max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field(items: &[&str]) -> ListField {
        ListField::new(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_absent_is_empty_string() {
        assert_eq!(summarize(&ListField::default()), "");
    }

    #[test]
    fn test_single_string() {
        assert_eq!(summarize(&ListField::from("x")), "x");
    }

    #[test]
    fn test_two_entries_verbatim() {
        assert_eq!(summarize(&field(&["Coding", "Testing"])), "Coding, Testing");
    }

    #[test]
    fn test_remainder_suffix() {
        assert_eq!(
            summarize(&field(&["A", "B", "C", "D", "E"])),
            "A, B +3 lainnya"
        );
    }

    proptest! {
        #[test]
        fn summary_matches_count_rule(items in proptest::collection::vec("[a-z]{1,6}", 0..8)) {
            let summary = summarize_items(&items, SUMMARY_LIMIT);

            if items.len() <= SUMMARY_LIMIT {
                prop_assert_eq!(summary, items.join(", "));
            } else {
                let expected = format!(
                    "{} +{} lainnya",
                    items[..SUMMARY_LIMIT].join(", "),
                    items.len() - SUMMARY_LIMIT
                );
                prop_assert_eq!(summary, expected);
            }
        }
    }
}
