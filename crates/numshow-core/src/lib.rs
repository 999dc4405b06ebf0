//! numshow-core: Composable display renderers
//!
//! A [`Show<T>`] turns a value into a display string. Renderers are built
//! from a few constructors ([`constant`], [`from_pattern`], [`display`]) and
//! combined with [`filter_or_else`], [`with_suffix`], [`with_k`] and
//! [`contramap`]. The [`instances`] module holds the named formats used by
//! presentation code.
//!
//! Call [`init`] once at start-up, before rendering with patterns.
//!
//! # Example
//!
//! ```
//! use numshow_core::instances::{USD_1_DECIMAL, USD_THOUSANDS_NO_DECIMAL_DASH};
//! use numshow_core::{constant, from_pattern, Show, ShowExt};
//!
//! numshow_core::init().unwrap();
//!
//! assert_eq!(USD_1_DECIMAL.show(&1234567.89), "$1.2mm");
//! assert_eq!(USD_THOUSANDS_NO_DECIMAL_DASH.show(&1234567.89), "$1,235");
//! assert_eq!(USD_THOUSANDS_NO_DECIMAL_DASH.show(&0.0), "-");
//!
//! let bps = from_pattern("0,0")
//!     .unwrap()
//!     .with_suffix(" bps")
//!     .filter_or_else(|n: &f64| n.is_finite(), constant("n/a"));
//! assert_eq!(bps.show(&1250.0), "1,250 bps");
//! assert_eq!(bps.show(&f64::NAN), "n/a");
//! ```

pub mod combinators;
pub mod constructors;
pub mod instances;
pub mod show;

pub use combinators::{
    contramap, filter_or_else, with_k, with_suffix, Contramap, FilterOrElse, WithK, WithSuffix,
};
pub use constructors::{constant, display, from_pattern, Const, Displayed, Numeral};
pub use numshow_numeral::{Locale, LocaleError, Pattern, PatternError, Scale};
pub use show::{from_fn, BoxShow, FromFn, Show, ShowExt};

/// Label for millions; `mm` keeps "million" apart from "m" in financial copy
pub const MILLION_LABEL: &str = "mm";

/// The locale installed by [`init`]: defaults with millions shown as `mm`
pub fn financial_locale() -> Locale {
    Locale::default().with_abbreviation(Scale::Million, MILLION_LABEL)
}

/// Install the process-wide formatting locale.
///
/// Safe to call more than once. Fails only if some other code configured a
/// different locale first.
pub fn init() -> Result<(), LocaleError> {
    numshow_numeral::locale::configure(financial_locale())
}
