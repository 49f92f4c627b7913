//! Integration tests for formatter + parser round trips
//! Tests that formatting and parsing are mutual inverses

use grint_format::{format_grouped, Grouped};
use grint_parser::parse_grouped;
use proptest::prelude::*;

#[test]
fn test_format_then_parse_known_values() {
    for value in [0, 7, 756, 999, 1000, 2081, 123_456, 1_034_891, u64::MAX] {
        let grouped = format_grouped(value);
        assert_eq!(parse_grouped(&grouped), Some(value), "value: {grouped}");
    }
}

#[test]
fn test_formatter_emits_canonical_grouping() {
    assert_eq!(format_grouped(1_034_891), "1,034,891");
    assert_eq!(format_grouped(2081), "2,081");
    assert_eq!(format_grouped(756), "756");
    assert_eq!(format_grouped(0), "0");
}

#[test]
fn test_display_adapter_round_trips() {
    let rendered = format!("{}", Grouped(18_446_744_073_709_551_615));
    assert_eq!(parse_grouped(&rendered), Some(u64::MAX));
}

proptest! {
    #[test]
    fn prop_format_then_parse_is_identity(value in any::<u64>()) {
        prop_assert_eq!(parse_grouped(&format_grouped(value)), Some(value));
    }

    #[test]
    fn prop_formatted_groups_satisfy_width_rules(value in any::<u64>()) {
        let grouped = format_grouped(value);
        let segments: Vec<&str> = grouped.split(',').collect();

        prop_assert!(!segments[0].is_empty() && segments[0].len() <= 3);
        for segment in &segments[1..] {
            prop_assert_eq!(segment.len(), 3);
        }
    }

    #[test]
    fn prop_misplaced_delimiter_is_rejected(value in 1000u64..) {
        // Moving the first comma one digit to the right always breaks a
        // width rule
        let grouped = format_grouped(value);
        let comma = grouped.find(',').unwrap();
        let mut bytes = grouped.into_bytes();
        bytes.swap(comma, comma + 1);
        let shifted = String::from_utf8(bytes).unwrap();

        prop_assert_eq!(parse_grouped(&shifted), None);
    }
}
