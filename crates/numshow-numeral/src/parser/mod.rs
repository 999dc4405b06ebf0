//! Pattern parser using pest

mod build;

use pest::error::InputLocation;
use pest::Parser;
use pest_derive::Parser;

use crate::error::PatternError;
use crate::types::Pattern;

#[derive(Parser)]
#[grammar = "parser/grammar.pest"]
pub struct NumeralParser;

/// Parse and validate a numeral pattern
pub fn parse_pattern(source: &str) -> Result<Pattern, PatternError> {
    let pairs = NumeralParser::parse(Rule::pattern, source).map_err(|e| {
        let offset = match e.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((start, _)) => start,
        };
        PatternError::Syntax {
            pattern: source.to_string(),
            offset,
        }
    })?;

    let pattern = build::build_pattern(source, pairs)?;
    tracing::debug!(pattern = source, "compiled numeral pattern");
    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Scale;
    use crate::types::{Abbreviation, Affix, SignPosition, SignStyle};

    #[test]
    fn test_parse_grouped_currency() {
        let p = parse_pattern("$0,0").unwrap();
        assert_eq!(
            p.currency(),
            Some(Affix {
                position: SignPosition::Leading,
                spaced: false
            })
        );
        assert!(p.is_grouped());
        assert_eq!(p.fixed_decimals(), 0);
        assert_eq!(p.sign(), SignStyle::Minus);
    }

    #[test]
    fn test_parse_abbreviated_currency_with_parentheses() {
        let p = parse_pattern("($0,0.0a)").unwrap();
        assert_eq!(p.sign(), SignStyle::Parentheses);
        assert_eq!(p.fixed_decimals(), 1);
        assert_eq!(
            p.abbreviation(),
            Some(Abbreviation {
                spaced: false,
                forced: None
            })
        );
    }

    #[test]
    fn test_parse_percent() {
        let p = parse_pattern("(0.0%)").unwrap();
        assert!(p.is_percent());
        assert_eq!(p.sign(), SignStyle::Parentheses);
        assert!(!p.is_grouped());
    }

    #[test]
    fn test_parse_forced_spaced_abbreviation() {
        let p = parse_pattern("0.0 am").unwrap();
        assert_eq!(
            p.abbreviation(),
            Some(Abbreviation {
                spaced: true,
                forced: Some(Scale::Million)
            })
        );
    }

    #[test]
    fn test_parse_optional_decimals() {
        let p = parse_pattern("0.0[00]").unwrap();
        assert_eq!(p.fixed_decimals(), 1);
        assert_eq!(p.optional_decimals(), 2);
        assert_eq!(p.max_decimals(), 3);

        let p = parse_pattern("0[.]00").unwrap();
        assert!(p.optional_point);
        assert_eq!(p.fixed_decimals(), 2);
    }

    #[test]
    fn test_parse_signs() {
        assert_eq!(
            parse_pattern("+0.0").unwrap().sign(),
            SignStyle::Always(SignPosition::Leading)
        );
        assert_eq!(
            parse_pattern("0-").unwrap().sign(),
            SignStyle::NegativeOnly(SignPosition::Trailing)
        );
    }

    #[test]
    fn test_parse_leading_zeros_and_fraction_only() {
        let p = parse_pattern("000,0").unwrap();
        assert_eq!(p.min_integer_digits, 3);

        let p = parse_pattern(".00").unwrap();
        assert!(p.omit_integer);
        assert_eq!(p.fixed_decimals(), 2);
    }

    #[test]
    fn test_reject_syntax_errors() {
        assert!(matches!(
            parse_pattern("$0,0.0x"),
            Err(PatternError::Syntax { offset: 6, .. })
        ));
        assert!(matches!(parse_pattern(""), Err(PatternError::Syntax { .. })));
        assert!(matches!(parse_pattern("abc"), Err(PatternError::Syntax { .. })));
    }

    #[test]
    fn test_reject_precision_beyond_decimal() {
        let fixed = format!("0.{}", "0".repeat(29));
        assert_eq!(
            parse_pattern(&fixed),
            Err(PatternError::TooManyDecimals {
                pattern: fixed.clone(),
                max: 28,
            })
        );

        let optional = format!("0.{}[0]", "0".repeat(28));
        assert!(matches!(
            parse_pattern(&optional),
            Err(PatternError::TooManyDecimals { max: 28, .. })
        ));

        let widest = format!("0.{}[00]", "0".repeat(26));
        assert_eq!(parse_pattern(&widest).unwrap().max_decimals(), 28);
    }

    #[test]
    fn test_reject_inconsistent_patterns() {
        assert!(matches!(
            parse_pattern("(0,0"),
            Err(PatternError::UnbalancedParentheses { .. })
        ));
        assert!(matches!(
            parse_pattern("$0.0%"),
            Err(PatternError::ConflictingUnits { .. })
        ));
        assert!(matches!(
            parse_pattern("(+0.0)"),
            Err(PatternError::ConflictingSigns { .. })
        ));
        assert!(matches!(
            parse_pattern("+0.0-"),
            Err(PatternError::ConflictingSigns { .. })
        ));
    }
}
