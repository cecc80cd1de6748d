use super::*;

#[test]
fn formats_browser_last_modified() {
    let text = format_last_modified("10/19/2026 08:34:00").expect("valid timestamp");
    assert_eq!(text, "Last updated: October 19, 2026");
}

#[test]
fn single_digit_day_is_not_padded() {
    let text = format_last_modified("03/05/2025 23:59:59").expect("valid timestamp");
    assert_eq!(text, "Last updated: March 5, 2025");
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert!(format_last_modified("  01/01/2024 00:00:00\n").is_ok());
}

#[test]
fn garbage_is_a_parse_error() {
    let err = format_last_modified("yesterday").unwrap_err();
    assert!(matches!(err, StampError::Parse { ref raw, .. } if raw == "yesterday"));
}

#[test]
fn impossible_date_is_rejected() {
    assert!(parse_last_modified("02/30/2024 10:00:00").is_err());
}
