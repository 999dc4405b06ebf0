//! Base renderers

use std::borrow::Cow;
use std::fmt::Display;
use std::sync::Arc;

use numshow_numeral::{format, format_current, Locale, Pattern, PatternError};

use crate::show::Show;

/// Renders the same text for every input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Const {
    text: Cow<'static, str>,
}

impl Const {
    pub const fn new(text: &'static str) -> Self {
        Self {
            text: Cow::Borrowed(text),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl<T: ?Sized> Show<T> for Const {
    fn show(&self, _value: &T) -> String {
        self.text.to_string()
    }
}

/// A renderer that ignores its input and always returns `text`
pub fn constant(text: impl Into<Cow<'static, str>>) -> Const {
    Const { text: text.into() }
}

/// Renders any [`Display`] value with its `to_string`
#[derive(Debug, Clone, Copy, Default)]
pub struct Displayed;

impl<T: Display + ?Sized> Show<T> for Displayed {
    fn show(&self, value: &T) -> String {
        value.to_string()
    }
}

pub fn display() -> Displayed {
    Displayed
}

/// Renders numbers through a compiled numeral pattern.
///
/// Without a pinned locale the process-wide one is read on every call, so
/// [`crate::init`] must have run before the first render.
#[derive(Debug, Clone)]
pub struct Numeral {
    pattern: Pattern,
    locale: Option<Arc<Locale>>,
}

impl Numeral {
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            locale: None,
        }
    }

    /// Pin a locale instead of reading the process-wide one
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(Arc::new(locale));
        self
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

impl Show<f64> for Numeral {
    fn show(&self, value: &f64) -> String {
        match &self.locale {
            Some(locale) => format(*value, &self.pattern, locale),
            None => format_current(*value, &self.pattern),
        }
    }
}

/// Compile `pattern` into a renderer. Malformed patterns fail here, never
/// at render time.
pub fn from_pattern(pattern: &str) -> Result<Numeral, PatternError> {
    Ok(Numeral::new(Pattern::parse(pattern)?))
}
