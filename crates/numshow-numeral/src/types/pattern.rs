//! Compiled numeral patterns

use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;
use crate::locale::Scale;

/// How a negative value is marked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignStyle {
    /// Leading minus for negatives, nothing for positives (no sign in pattern)
    Minus,
    /// Wrap negatives in parentheses: `(0,0)`
    Parentheses,
    /// Explicit `+` in the pattern: always show a sign at the given position
    Always(SignPosition),
    /// Explicit `-` in the pattern: minus for negatives at the given position
    NegativeOnly(SignPosition),
}

/// Where an explicit sign goes relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignPosition {
    Leading,
    Trailing,
}

/// A symbol placed before or after the digits, optionally separated by a space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affix {
    pub position: SignPosition,
    pub spaced: bool,
}

/// Magnitude abbreviation (`a`, `ak`, ` am`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Abbreviation {
    /// Space between the digits and the abbreviation label
    pub spaced: bool,
    /// Scale requested explicitly (`ak` always divides by a thousand)
    pub forced: Option<Scale>,
}

/// A validated numeral pattern.
///
/// Patterns follow the numeral.js notation for the subset used by numshow:
/// digit grouping (`0,0`), fixed and optional decimals (`0.00`, `0.0[0]`,
/// `0[.]00`), currency (`$`), percent (`%`), magnitude abbreviation (`a`),
/// explicit signs (`+`, `-`) and parenthesized negatives (`(...)`).
///
/// ```
/// use numshow_numeral::Pattern;
///
/// let pattern: Pattern = "($0,0.0a)".parse().unwrap();
/// assert_eq!(pattern.fixed_decimals(), 1);
/// assert!("0.0%$".parse::<Pattern>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub(crate) source: String,
    pub(crate) sign: SignStyle,
    pub(crate) currency: Option<Affix>,
    /// `Some(spaced)` when the pattern ends in `%`
    pub(crate) percent: Option<bool>,
    pub(crate) abbreviation: Option<Abbreviation>,
    pub(crate) grouping: bool,
    pub(crate) min_integer_digits: usize,
    pub(crate) omit_integer: bool,
    pub(crate) fixed_decimals: usize,
    pub(crate) optional_decimals: usize,
    pub(crate) optional_point: bool,
}

impl Pattern {
    /// Compile a pattern string
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        crate::parser::parse_pattern(source)
    }

    /// The pattern as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn sign(&self) -> SignStyle {
        self.sign
    }

    pub fn currency(&self) -> Option<Affix> {
        self.currency
    }

    pub fn is_percent(&self) -> bool {
        self.percent.is_some()
    }

    pub fn abbreviation(&self) -> Option<Abbreviation> {
        self.abbreviation
    }

    pub fn is_grouped(&self) -> bool {
        self.grouping
    }

    /// Digits always shown after the decimal point
    pub fn fixed_decimals(&self) -> usize {
        self.fixed_decimals
    }

    /// Digits shown only when they are significant
    pub fn optional_decimals(&self) -> usize {
        self.optional_decimals
    }

    /// Upper bound on rendered decimal digits
    pub fn max_decimals(&self) -> usize {
        self.fixed_decimals + self.optional_decimals
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
