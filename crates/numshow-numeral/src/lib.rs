//! numshow-numeral: Numeral-style number formatting engine
//!
//! Compiles numeral.js-style patterns (`$0,0.00`, `($0,0.0a)`, `0.0%`, ...)
//! and formats numbers with them under a [`Locale`]. Values are formatted
//! through `rust_decimal`, so rounding happens on the decimal text of the
//! input rather than on its binary approximation.
//!
//! # Example
//!
//! ```
//! use numshow_numeral::{format, Locale, Pattern, Scale};
//!
//! let pattern = Pattern::parse("($0,0.0a)").unwrap();
//! let locale = Locale::default().with_abbreviation(Scale::Million, "mm");
//!
//! assert_eq!(format(1234567.89, &pattern, &locale), "$1.2mm");
//! assert_eq!(format(-12345.0, &pattern, &locale), "($12.3k)");
//! assert_eq!(format(20.5, &pattern, &locale), "$20.5");
//! ```

pub mod error;
pub mod format;
pub mod locale;
pub mod parser;
pub mod types;

pub use error::{LocaleError, PatternError};
pub use format::{format, format_decimal, round_half_up, to_decimal};
pub use locale::{Locale, Scale, SCALES};
pub use parser::parse_pattern;
pub use types::{Abbreviation, Affix, Pattern, SignPosition, SignStyle};

/// Format with the process-wide locale (see [`locale::current`])
pub fn format_current(value: f64, pattern: &Pattern) -> String {
    format(value, pattern, locale::current())
}
