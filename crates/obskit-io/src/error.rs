//! Error types for output configuration.

use std::fmt;

/// Errors detected during [`PrinterConfig::validate()`](crate::PrinterConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The key/value separator is empty or only whitespace, so nested
    /// headers would carry no separator text.
    BlankSeparator,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankSeparator => {
                write!(f, "separator must contain non-whitespace text")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
