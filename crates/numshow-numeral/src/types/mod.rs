//! Pattern types for numeral formatting

mod pattern;

pub use pattern::{Abbreviation, Affix, Pattern, SignPosition, SignStyle};
