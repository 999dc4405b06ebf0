//! Number formatting against a compiled pattern

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::locale::{Locale, Scale};
use crate::types::{Pattern, SignPosition, SignStyle};

/// Most fractional digits a `Decimal` can hold
pub const MAX_DECIMALS: usize = 28;

/// Format an `f64` with a pattern and locale.
///
/// Total over `f64`: NaN renders as zero, infinities and values beyond the
/// decimal range saturate at the largest representable magnitude.
pub fn format(value: f64, pattern: &Pattern, locale: &Locale) -> String {
    format_decimal(to_decimal(value), pattern, locale)
}

/// Format a `Decimal` with a pattern and locale
pub fn format_decimal(value: Decimal, pattern: &Pattern, locale: &Locale) -> String {
    let mut value = value;

    if pattern.percent.is_some() {
        value = value
            .checked_mul(Decimal::ONE_HUNDRED)
            .unwrap_or_else(|| saturate(value.is_sign_negative()));
    }

    let mut scale = None;
    if let Some(abbreviation) = pattern.abbreviation {
        scale = abbreviation
            .forced
            .or_else(|| Scale::for_magnitude(value.abs()));
        if let Some(s) = scale {
            value /= s.factor();
        }
    }

    let (mut rounded, mut precision) = round(value, pattern);

    // 999.95k rounds to 1000.0k; show it as 1.0 of the next tier instead
    let auto_scaled = pattern.abbreviation.is_some_and(|a| a.forced.is_none());
    if auto_scaled && rounded.abs() >= Decimal::ONE_THOUSAND {
        if let Some(next) = scale.and_then(|s| s.next()) {
            scale = Some(next);
            (rounded, precision) = round(rounded / Decimal::ONE_THOUSAND, pattern);
        }
    }

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.*}", precision, rounded.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let integer = render_integer(integer, pattern, locale);
    let fraction = render_fraction(fraction, pattern);

    let mut body = String::new();
    if let Some(currency) = pattern.currency.filter(|c| c.position == SignPosition::Leading) {
        body.push_str(&locale.currency.symbol);
        if currency.spaced {
            body.push(' ');
        }
    }
    body.push_str(&integer);
    if !fraction.is_empty() {
        body.push_str(&locale.delimiters.decimal);
        body.push_str(fraction);
    }
    if let (Some(abbreviation), Some(s)) = (pattern.abbreviation, scale) {
        if abbreviation.spaced {
            body.push(' ');
        }
        body.push_str(locale.abbreviation(s));
    }
    if let Some(spaced) = pattern.percent {
        if spaced {
            body.push(' ');
        }
        body.push('%');
    }
    if let Some(currency) = pattern.currency.filter(|c| c.position == SignPosition::Trailing) {
        if currency.spaced {
            body.push(' ');
        }
        body.push_str(&locale.currency.symbol);
    }

    apply_sign(body, negative, pattern.sign)
}

/// Convert through the shortest round-trip text so `0.1` stays `0.1`
pub fn to_decimal(value: f64) -> Decimal {
    if value.is_nan() {
        return Decimal::ZERO;
    }
    if value.is_infinite() {
        return saturate(value.is_sign_negative());
    }

    Decimal::from_str(&value.to_string())
        .or_else(|_| Decimal::from_scientific(&format!("{value:e}")))
        .unwrap_or_else(|_| {
            if value.abs() < 1.0 {
                Decimal::ZERO
            } else {
                saturate(value.is_sign_negative())
            }
        })
}

fn saturate(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

/// Round half toward positive infinity, like JavaScript's `Math.round`
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    let mut rounded = value.round_dp_with_strategy(dp, strategy);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

/// Round to the pattern's precision and return the number of digits to print.
///
/// With optional decimals the precision follows the value's own fraction,
/// bounded by the fixed and maximum digit counts.
fn round(value: Decimal, pattern: &Pattern) -> (Decimal, usize) {
    let max = pattern.max_decimals();
    let precision = if pattern.optional_decimals > 0 {
        (value.normalize().scale() as usize).clamp(pattern.fixed_decimals, max)
    } else {
        max
    };
    (round_half_up(value, precision as u32), precision)
}

fn render_integer(digits: &str, pattern: &Pattern, locale: &Locale) -> String {
    if pattern.omit_integer {
        return String::new();
    }

    let padded = if digits.len() < pattern.min_integer_digits {
        format!("{digits:0>width$}", width = pattern.min_integer_digits)
    } else {
        digits.to_string()
    };

    if pattern.grouping {
        group_digits(&padded, &locale.delimiters.thousands)
    } else {
        padded
    }
}

fn render_fraction<'a>(digits: &'a str, pattern: &Pattern) -> &'a str {
    let mut fraction = digits;
    if pattern.optional_decimals > 0 {
        let trimmed = fraction.trim_end_matches('0');
        fraction = &fraction[..trimmed.len().max(pattern.fixed_decimals)];
    }
    if pattern.optional_point && fraction.bytes().all(|b| b == b'0') {
        fraction = "";
    }
    fraction
}

/// Insert the delimiter between groups of three digits, counted from the right
fn group_digits(digits: &str, delimiter: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * delimiter.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(delimiter);
        }
        out.push(ch);
    }
    out
}

fn apply_sign(body: String, negative: bool, style: SignStyle) -> String {
    let minus = if negative { "-" } else { "" };
    match style {
        SignStyle::Minus | SignStyle::NegativeOnly(SignPosition::Leading) => format!("{minus}{body}"),
        SignStyle::NegativeOnly(SignPosition::Trailing) => format!("{body}{minus}"),
        SignStyle::Parentheses if negative => format!("({body})"),
        SignStyle::Parentheses => body,
        SignStyle::Always(position) => {
            let sign = if negative { "-" } else { "+" };
            match position {
                SignPosition::Leading => format!("{sign}{body}"),
                SignPosition::Trailing => format!("{body}{sign}"),
            }
        }
    }
}
