//! Locale data and the process-wide locale slot
//!
//! Formatting reads delimiters, abbreviation labels and the currency symbol
//! from a [`Locale`]. A single locale can be configured for the whole process
//! with [`configure`]; until then [`current`] hands out the built-in default.
//!
//! To add a magnitude, add a variant to [`Scale`] and an entry to [`SCALES`].

use std::sync::{LazyLock, OnceLock};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LocaleError;

/// Magnitude metadata - single source of truth for each abbreviation tier
pub struct ScaleDef {
    /// The scale enum variant
    pub scale: Scale,
    /// Power of ten the value is divided by
    pub exponent: u32,
    /// Letter that forces this scale in a pattern (`ak`, `am`, ...)
    pub letter: char,
    /// Label used by the default locale
    pub default_label: &'static str,
}

/// Complete registry of magnitude abbreviations, smallest first.
pub static SCALES: &[ScaleDef] = &[
    ScaleDef {
        scale: Scale::Thousand,
        exponent: 3,
        letter: 'k',
        default_label: "k",
    },
    ScaleDef {
        scale: Scale::Million,
        exponent: 6,
        letter: 'm',
        default_label: "m",
    },
    ScaleDef {
        scale: Scale::Billion,
        exponent: 9,
        letter: 'b',
        default_label: "b",
    },
    ScaleDef {
        scale: Scale::Trillion,
        exponent: 12,
        letter: 't',
        default_label: "t",
    },
];

/// Magnitude tiers for abbreviated output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Thousand,
    Million,
    Billion,
    Trillion,
}

impl Scale {
    /// Get the scale definition
    pub fn def(&self) -> &'static ScaleDef {
        SCALES
            .iter()
            .find(|d| d.scale == *self)
            .expect("All scales must have definitions")
    }

    /// Divisor for this scale (1000, 1000000, ...)
    pub fn factor(&self) -> Decimal {
        Decimal::from(10u64.pow(self.def().exponent))
    }

    pub fn letter(&self) -> char {
        self.def().letter
    }

    /// Parse the forcing letter of a pattern (`k`, `m`, `b`, `t`)
    pub fn from_letter(letter: char) -> Option<Scale> {
        SCALES.iter().find(|d| d.letter == letter).map(|d| d.scale)
    }

    /// Largest scale whose factor does not exceed `magnitude`
    pub fn for_magnitude(magnitude: Decimal) -> Option<Scale> {
        SCALES
            .iter()
            .rev()
            .find(|d| magnitude >= d.scale.factor())
            .map(|d| d.scale)
    }

    /// The next larger scale, if any
    pub fn next(&self) -> Option<Scale> {
        let idx = SCALES.iter().position(|d| d.scale == *self)?;
        SCALES.get(idx + 1).map(|d| d.scale)
    }

    /// Iterator over all scales, smallest first
    pub fn all() -> impl Iterator<Item = Scale> {
        SCALES.iter().map(|d| d.scale)
    }
}

/// Digit separators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delimiters {
    pub thousands: String,
    pub decimal: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            thousands: ",".to_string(),
            decimal: ".".to_string(),
        }
    }
}

/// Labels appended by abbreviated patterns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Abbreviations {
    pub thousand: String,
    pub million: String,
    pub billion: String,
    pub trillion: String,
}

impl Default for Abbreviations {
    fn default() -> Self {
        Self {
            thousand: Scale::Thousand.def().default_label.to_string(),
            million: Scale::Million.def().default_label.to_string(),
            billion: Scale::Billion.def().default_label.to_string(),
            trillion: Scale::Trillion.def().default_label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub symbol: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
        }
    }
}

/// Locale settings used while formatting.
///
/// Every field has a default, so a configuration document only needs to name
/// what it overrides:
///
/// ```
/// use numshow_numeral::{Locale, Scale};
///
/// let locale = Locale::default().with_abbreviation(Scale::Million, "mm");
/// assert_eq!(locale.abbreviation(Scale::Million), "mm");
/// assert_eq!(locale.abbreviation(Scale::Thousand), "k");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    pub delimiters: Delimiters,
    pub abbreviations: Abbreviations,
    pub currency: CurrencyFormat,
}

impl Locale {
    /// Label for an abbreviation tier
    pub fn abbreviation(&self, scale: Scale) -> &str {
        match scale {
            Scale::Thousand => &self.abbreviations.thousand,
            Scale::Million => &self.abbreviations.million,
            Scale::Billion => &self.abbreviations.billion,
            Scale::Trillion => &self.abbreviations.trillion,
        }
    }

    pub fn with_abbreviation(mut self, scale: Scale, label: impl Into<String>) -> Self {
        let label = label.into();
        match scale {
            Scale::Thousand => self.abbreviations.thousand = label,
            Scale::Million => self.abbreviations.million = label,
            Scale::Billion => self.abbreviations.billion = label,
            Scale::Trillion => self.abbreviations.trillion = label,
        }
        self
    }

    pub fn with_thousands_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiters.thousands = delimiter.into();
        self
    }

    pub fn with_decimal_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiters.decimal = delimiter.into();
        self
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency.symbol = symbol.into();
        self
    }
}

static CONFIGURED: OnceLock<Locale> = OnceLock::new();
static DEFAULT: LazyLock<Locale> = LazyLock::new(Locale::default);

/// Install the process-wide locale.
///
/// The slot is written at most once. Applying an equal locale again is a
/// no-op; applying a different one fails with
/// [`LocaleError::AlreadyConfigured`] and leaves the first in place.
pub fn configure(locale: Locale) -> Result<(), LocaleError> {
    let mut installed = false;
    let configured = CONFIGURED.get_or_init(|| {
        installed = true;
        locale.clone()
    });

    if installed {
        tracing::debug!(?locale, "numeral locale configured");
        return Ok(());
    }

    if *configured == locale {
        Ok(())
    } else {
        tracing::warn!(
            ?configured,
            rejected = ?locale,
            "numeral locale already configured, keeping the first one"
        );
        Err(LocaleError::AlreadyConfigured)
    }
}

/// The configured locale, or the built-in default when none was configured.
///
/// Reading the default does not claim the slot: [`configure`] still succeeds
/// afterwards.
pub fn current() -> &'static Locale {
    CONFIGURED.get().unwrap_or_else(|| &*DEFAULT)
}

/// Whether [`configure`] has installed a locale
pub fn is_configured() -> bool {
    CONFIGURED.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_all_scales_have_defs() {
        for scale in Scale::all() {
            let def = scale.def();
            assert!(!def.default_label.is_empty());
            assert_eq!(scale.letter(), def.letter);
            assert_eq!(Scale::from_letter(scale.letter()), Some(scale));
        }
    }

    #[test]
    fn test_scale_for_magnitude() {
        assert_eq!(Scale::for_magnitude(Decimal::from(999)), None);
        assert_eq!(Scale::for_magnitude(Decimal::from(1000)), Some(Scale::Thousand));
        assert_eq!(
            Scale::for_magnitude(Decimal::from_str("1234567.89").unwrap()),
            Some(Scale::Million)
        );
        assert_eq!(
            Scale::for_magnitude(Decimal::from(5_000_000_000_000u64)),
            Some(Scale::Trillion)
        );
    }

    #[test]
    fn test_scale_next() {
        assert_eq!(Scale::Thousand.next(), Some(Scale::Million));
        assert_eq!(Scale::Billion.next(), Some(Scale::Trillion));
        assert_eq!(Scale::Trillion.next(), None);
    }

    #[test]
    fn test_default_locale() {
        let locale = Locale::default();
        assert_eq!(locale.delimiters.thousands, ",");
        assert_eq!(locale.delimiters.decimal, ".");
        assert_eq!(locale.currency.symbol, "$");
        assert_eq!(locale.abbreviation(Scale::Million), "m");
    }

    #[test]
    fn test_with_abbreviation_only_touches_one_tier() {
        let locale = Locale::default().with_abbreviation(Scale::Million, "mm");
        assert_eq!(locale.abbreviation(Scale::Thousand), "k");
        assert_eq!(locale.abbreviation(Scale::Million), "mm");
        assert_eq!(locale.abbreviation(Scale::Billion), "b");
        assert_eq!(locale.abbreviation(Scale::Trillion), "t");
    }
}
