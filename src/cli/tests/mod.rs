//! Unit tests for CLI module
//!
//! Tests console formatting helpers.

use crate::cli::formatting::{Colors, format_detail, format_error, format_header, format_success};

#[test]
fn error_is_bold_red_and_reset() {
    let formatted = format_error("values.yaml not found");

    assert!(formatted.starts_with(&format!("{}{}", Colors::BOLD, Colors::RED)));
    assert!(formatted.contains("values.yaml not found"));
    assert!(formatted.ends_with(Colors::RESET));
}

#[test]
fn success_and_detail_wrap_text() {
    assert_eq!(
        format_success("done"),
        format!("{}done{}", Colors::GREEN, Colors::RESET)
    );
    assert_eq!(
        format_detail("Parsing"),
        format!("{}Parsing{}", Colors::DIM, Colors::RESET)
    );
}

#[test]
fn header_keeps_text_intact() {
    let formatted = format_header("complete");

    assert!(formatted.contains("complete"));
    assert!(formatted.ends_with(Colors::RESET));
}
