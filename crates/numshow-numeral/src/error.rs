//! Error types for pattern compilation and locale configuration

use thiserror::Error;

/// A pattern string that cannot be compiled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("invalid pattern {pattern:?}: unexpected input at offset {offset}")]
    Syntax { pattern: String, offset: usize },

    #[error("invalid pattern {pattern:?}: unbalanced parentheses")]
    UnbalancedParentheses { pattern: String },

    #[error("invalid pattern {pattern:?}: currency and percent cannot be combined")]
    ConflictingUnits { pattern: String },

    #[error("invalid pattern {pattern:?}: use either parentheses or one explicit sign")]
    ConflictingSigns { pattern: String },

    #[error("invalid pattern {pattern:?}: at most {max} decimal places are supported")]
    TooManyDecimals { pattern: String, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("a different numeral locale is already configured")]
    AlreadyConfigured,
}
