//! Formatting tests for the pattern subset used by presentation code
//! Expected strings follow numeral.js output for the same inputs

use std::str::FromStr;

use numshow_numeral::{format, format_decimal, Locale, Pattern, PatternError, Scale};
use pretty_assertions::assert_eq;

fn financial_locale() -> Locale {
    Locale::default().with_abbreviation(Scale::Million, "mm")
}

fn fmt(value: f64, pattern: &str) -> String {
    let pattern = Pattern::parse(pattern).expect("valid pattern");
    format(value, &pattern, &financial_locale())
}

#[test]
fn test_usd_abbreviated() {
    assert_eq!(fmt(1234567.89, "($0,0.0a)"), "$1.2mm");
    assert_eq!(fmt(11234567.12, "($0,0.0a)"), "$11.2mm");
    assert_eq!(fmt(12345.0, "($0,0.0a)"), "$12.3k");
    assert_eq!(fmt(20.5, "($0,0.0a)"), "$20.5");
    assert_eq!(fmt(-12345.0, "($0,0.0a)"), "($12.3k)");
    assert_eq!(fmt(3_400_000_000.0, "($0,0.0a)"), "$3.4b");
}

#[test]
fn test_usd_fixed_decimals() {
    assert_eq!(fmt(1234567.891, "$0,0.00"), "$1,234,567.89");
    assert_eq!(fmt(0.0, "$0,0.00"), "$0.00");
    assert_eq!(fmt(-5.5, "$0,0.00"), "-$5.50");
}

#[test]
fn test_usd_no_decimal() {
    assert_eq!(fmt(1234567.89, "$0,0"), "$1,234,568");
    assert_eq!(fmt(999.5, "$0,0"), "$1,000");
    assert_eq!(fmt(-1234567.89, "($0,0)"), "($1,234,568)");
}

#[test]
fn test_percentages() {
    assert_eq!(fmt(0.1234, "0.0%"), "12.3%");
    assert_eq!(fmt(0.1234, "0.00%"), "12.34%");
    assert_eq!(fmt(-0.1234, "(0.0%)"), "(12.3%)");
    assert_eq!(fmt(0.0, "0.0%"), "0.0%");
}

#[test]
fn test_multiples() {
    assert_eq!(fmt(7.25, "(0.0)"), "7.3");
    assert_eq!(fmt(7.25, "(0.00)"), "7.25");
    assert_eq!(fmt(-0.5, "(0.0)"), "(0.5)");
}

#[test]
fn test_same_input_same_output() {
    let pattern = Pattern::parse("($0,0.0a)").unwrap();
    let locale = financial_locale();
    let first = format(987654.3, &pattern, &locale);
    let second = format(987654.3, &pattern, &locale);
    assert_eq!(first, second);
}

#[test]
fn test_large_magnitudes_do_not_panic() {
    for value in [1e15, 1e20, 1e28, 1e29, 1e300, f64::MAX, f64::MIN, f64::MIN_POSITIVE] {
        for pattern in ["($0,0.0a)", "$0,0.00", "0.00%", "(0.0)", "0[.]0[0]"] {
            let out = fmt(value, pattern);
            assert!(!out.is_empty(), "{pattern} rendered nothing for {value}");
        }
    }
}

#[test]
fn test_pattern_display_round_trips_source() {
    let pattern: Pattern = "($0,0.0a)".parse().unwrap();
    assert_eq!(pattern.to_string(), "($0,0.0a)");
    assert_eq!(pattern.as_str(), "($0,0.0a)");
}

#[test]
fn test_invalid_patterns_fail_at_construction() {
    let err = Pattern::parse("$0,0.0q").unwrap_err();
    assert!(matches!(err, PatternError::Syntax { .. }));
    assert!(err.to_string().contains("$0,0.0q"));

    assert!(matches!(
        Pattern::parse("0.0%)"),
        Err(PatternError::UnbalancedParentheses { .. })
    ));
}

#[test]
fn test_widest_precision_renders() {
    let fixed = format!("0.{}", "0".repeat(28));
    assert_eq!(fmt(1.5, &fixed), format!("1.5{}", "0".repeat(27)));

    let optional = format!("0.{}[00]", "0".repeat(26));
    assert_eq!(fmt(1.5, &optional), format!("1.5{}", "0".repeat(25)));

    assert!(matches!(
        Pattern::parse(&format!("0.{}[0]", "0".repeat(30))),
        Err(PatternError::TooManyDecimals { .. })
    ));
}

#[test]
fn test_format_decimal_keeps_digits_beyond_f64() {
    let value = rust_decimal::Decimal::from_str("12345678901234567.25").unwrap();
    let pattern = Pattern::parse("0,0.0").unwrap();
    assert_eq!(
        format_decimal(value, &pattern, &Locale::default()),
        "12,345,678,901,234,567.3"
    );
}
