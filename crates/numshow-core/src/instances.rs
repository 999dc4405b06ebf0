//! Named presentation formats
//!
//! Combinator-valued instances (`dash_if_non_positive`, `thousands`, ...)
//! are functions that wrap a renderer. Renderer-valued instances
//! (`USD_1_DECIMAL`, ...) are statics built on first use; building any of
//! them runs [`crate::init`] first.

use std::sync::LazyLock;

use crate::combinators::{contramap, filter_or_else, Contramap, FilterOrElse, WithSuffix};
use crate::constructors::{from_pattern, Const, Numeral};
use crate::show::{BoxShow, Show, ShowExt};

/// Placeholder for missing values
pub const DASH: Const = Const::new("-");

/// Placeholder for values that are not meaningful
pub const NON_MEANINGFUL: Const = Const::new("n.m.");

/// Rendered by [`clamp_100_percent`] above 100
pub const OVER_100_PERCENT: Const = Const::new(">100%");

/// A renderer guarded by a numeric predicate
pub type Guarded<S> = FilterOrElse<fn(&f64) -> bool, Const, S>;

/// A renderer fed a rescaled number
pub type Rescaled<S> = Contramap<fn(&f64) -> f64, S>;

fn is_non_zero(n: &f64) -> bool {
    *n != 0.0
}

fn is_positive(n: &f64) -> bool {
    *n > 0.0
}

fn is_at_most_100(n: &f64) -> bool {
    *n <= 100.0
}

/// `Math.round`: halves go toward positive infinity
fn round_half_up(n: f64) -> f64 {
    let rounded = n.round();
    if n - rounded == 0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

/// Round to whole thousands: `1234.0 -> 1.0`, `1500.0 -> 2.0`
pub fn to_thousands(n: &f64) -> f64 {
    round_half_up(n / 1000.0)
}

/// Percent points to a fraction, with values under 0.1 points in
/// magnitude treated as zero
pub fn percent_points_to_fraction(n: &f64) -> f64 {
    if n.abs() >= 0.1 {
        n / 100.0
    } else {
        0.0
    }
}

pub fn dash_if_zero<S: Show<f64>>(show: S) -> Guarded<S> {
    filter_or_else(is_non_zero as fn(&f64) -> bool, DASH, show)
}

pub fn dash_if_non_positive<S: Show<f64>>(show: S) -> Guarded<S> {
    filter_or_else(is_positive as fn(&f64) -> bool, DASH, show)
}

pub fn nm_if_non_positive<S: Show<f64>>(show: S) -> Guarded<S> {
    filter_or_else(is_positive as fn(&f64) -> bool, NON_MEANINGFUL, show)
}

pub fn clamp_100_percent<S: Show<f64>>(show: S) -> Guarded<S> {
    filter_or_else(is_at_most_100 as fn(&f64) -> bool, OVER_100_PERCENT, show)
}

/// Render the value in whole thousands
pub fn thousands<S: Show<f64>>(show: S) -> Rescaled<S> {
    contramap(to_thousands as fn(&f64) -> f64, show)
}

/// Feed percent points (`12.5`) to a `%` pattern that expects a fraction
pub fn percent_to_float<S: Show<f64>>(show: S) -> Rescaled<S> {
    contramap(percent_points_to_fraction as fn(&f64) -> f64, show)
}

fn builtin(pattern: &'static str) -> Numeral {
    if let Err(err) = crate::init() {
        tracing::warn!(%err, pattern, "building a named format under a foreign locale");
    }
    from_pattern(pattern).expect("built-in patterns are valid")
}

/// `1234567.89 -> $1.2mm`, `12345 -> $12.3k`, `20.5 -> $20.5`
pub static USD_1_DECIMAL: LazyLock<Numeral> = LazyLock::new(|| builtin("($0,0.0a)"));

pub static USD_DECIMAL: LazyLock<Numeral> = LazyLock::new(|| builtin("$0,0.00"));

pub static USD_NO_DECIMAL: LazyLock<Numeral> = LazyLock::new(|| builtin("$0,0"));

/// Profit/loss: negatives in parentheses
pub static USD_PL_NO_DECIMAL: LazyLock<Numeral> = LazyLock::new(|| builtin("($0,0)"));

pub static PERCENT_SINGLE_DECIMAL: LazyLock<Numeral> = LazyLock::new(|| builtin("0.0%"));

pub static PERCENT_DOUBLE_DECIMAL: LazyLock<Numeral> = LazyLock::new(|| builtin("0.00%"));

pub static PERCENT_PL_SINGLE_DECIMAL: LazyLock<Numeral> = LazyLock::new(|| builtin("(0.0%)"));

pub static USD_DECIMAL_DASH: LazyLock<BoxShow<f64>> =
    LazyLock::new(|| dash_if_non_positive(&*USD_DECIMAL).boxed());

pub static USD_THOUSANDS_NO_DECIMAL: LazyLock<BoxShow<f64>> =
    LazyLock::new(|| thousands(&*USD_NO_DECIMAL).boxed());

/// Dash check runs on the raw value, before scaling to thousands
pub static USD_THOUSANDS_NO_DECIMAL_DASH: LazyLock<BoxShow<f64>> =
    LazyLock::new(|| dash_if_non_positive(&*USD_THOUSANDS_NO_DECIMAL).boxed());

pub static USD_THOUSANDS_NO_DECIMAL_NM: LazyLock<BoxShow<f64>> =
    LazyLock::new(|| nm_if_non_positive(thousands(&*USD_NO_DECIMAL)).boxed());

/// Valuation multiples: `7.25 -> 7.3x`
pub static MULTIPLE_1: LazyLock<WithSuffix<Numeral>> =
    LazyLock::new(|| builtin("(0.0)").with_suffix("x"));

pub static MULTIPLE_2: LazyLock<WithSuffix<Numeral>> =
    LazyLock::new(|| builtin("(0.00)").with_suffix("x"));
