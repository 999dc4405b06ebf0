//! Lowering parsed pairs into a [`Pattern`]

use pest::iterators::{Pair, Pairs};

use super::Rule;
use crate::error::PatternError;
use crate::format::MAX_DECIMALS;
use crate::locale::Scale;
use crate::types::{Abbreviation, Affix, Pattern, SignPosition, SignStyle};

#[derive(Default)]
struct Number {
    grouping: bool,
    min_integer_digits: usize,
    omit_integer: bool,
    fixed_decimals: usize,
    optional_decimals: usize,
    optional_point: bool,
}

/// Build a pattern from the pairs of a successful `Rule::pattern` parse
pub fn build_pattern(source: &str, pairs: Pairs<'_, Rule>) -> Result<Pattern, PatternError> {
    let mut open_paren = false;
    let mut close_paren = false;
    let mut lead_sign = None;
    let mut trail_sign = None;
    let mut currency = None;
    let mut percent = None;
    let mut abbreviation = None;
    let mut number = Number::default();

    for pair in pairs.flat_map(|p| p.into_inner()) {
        match pair.as_rule() {
            Rule::open_paren => open_paren = true,
            Rule::close_paren => close_paren = true,
            Rule::lead_sign => lead_sign = Some(pair.as_str()),
            Rule::trail_sign => trail_sign = Some(pair.as_str()),
            Rule::currency_lead => {
                currency = Some(Affix {
                    position: SignPosition::Leading,
                    spaced: has_space(pair),
                })
            }
            Rule::currency_trail => {
                currency = Some(Affix {
                    position: SignPosition::Trailing,
                    spaced: has_space(pair),
                })
            }
            Rule::percent => percent = Some(has_space(pair)),
            Rule::abbreviation => abbreviation = Some(build_abbreviation(pair)),
            Rule::number => number = build_number(pair),
            _ => {}
        }
    }

    let owned = || source.to_string();

    if open_paren != close_paren {
        return Err(PatternError::UnbalancedParentheses { pattern: owned() });
    }
    if currency.is_some() && percent.is_some() {
        return Err(PatternError::ConflictingUnits { pattern: owned() });
    }

    let sign = match (open_paren, lead_sign, trail_sign) {
        (true, None, None) => SignStyle::Parentheses,
        (false, None, None) => SignStyle::Minus,
        (false, Some(sign), None) => explicit_sign(sign, SignPosition::Leading),
        (false, None, Some(sign)) => explicit_sign(sign, SignPosition::Trailing),
        _ => return Err(PatternError::ConflictingSigns { pattern: owned() }),
    };

    if number.fixed_decimals + number.optional_decimals > MAX_DECIMALS {
        return Err(PatternError::TooManyDecimals {
            pattern: owned(),
            max: MAX_DECIMALS,
        });
    }

    Ok(Pattern {
        source: owned(),
        sign,
        currency,
        percent,
        abbreviation,
        grouping: number.grouping,
        min_integer_digits: number.min_integer_digits,
        omit_integer: number.omit_integer,
        fixed_decimals: number.fixed_decimals,
        optional_decimals: number.optional_decimals,
        optional_point: number.optional_point,
    })
}

fn explicit_sign(sign: &str, position: SignPosition) -> SignStyle {
    if sign == "+" {
        SignStyle::Always(position)
    } else {
        SignStyle::NegativeOnly(position)
    }
}

fn has_space(pair: Pair<'_, Rule>) -> bool {
    pair.into_inner().any(|p| p.as_rule() == Rule::space)
}

fn build_abbreviation(pair: Pair<'_, Rule>) -> Abbreviation {
    let mut abbreviation = Abbreviation {
        spaced: false,
        forced: None,
    };
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::space => abbreviation.spaced = true,
            Rule::forced_scale => {
                abbreviation.forced = inner.as_str().chars().next().and_then(Scale::from_letter)
            }
            _ => {}
        }
    }
    abbreviation
}

fn build_number(pair: Pair<'_, Rule>) -> Number {
    let mut number = Number {
        omit_integer: true,
        ..Number::default()
    };

    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::integer => {
                number.omit_integer = false;
                let mut groups = part.into_inner().filter(|p| p.as_rule() == Rule::digits);
                // Leading zeros are counted up to the first grouping comma
                number.min_integer_digits = groups.next().map_or(0, |d| d.as_str().len());
                number.grouping = groups.next().is_some();
            }
            Rule::fraction => {
                for inner in part.into_inner() {
                    match inner.as_rule() {
                        Rule::optional_point => number.optional_point = true,
                        Rule::digits => number.fixed_decimals = inner.as_str().len(),
                        Rule::optional_digits => {
                            number.optional_decimals = inner.as_str().len() - 2;
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }

    number
}
