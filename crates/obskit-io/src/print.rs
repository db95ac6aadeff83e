//! Debug printing of one-level nested mappings.

use crate::error::ConfigError;
use indexmap::IndexMap;
use std::fmt;
use std::io::{self, Write};

/// Ordered string-keyed mapping of debug values.
pub type DebugMap = IndexMap<String, DebugValue>;

/// A value in a [`DebugMap`].
#[derive(Clone, Debug, PartialEq)]
pub enum DebugValue {
    /// Boolean.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Float. Always printed with a decimal point or exponent.
    Float(f64),
    /// Text, printed without quotes.
    Str(String),
    /// Nested mapping.
    Map(DebugMap),
}

impl fmt::Display for DebugValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Str(v) => f.write_str(v),
            Self::Map(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for DebugValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for DebugValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for DebugValue {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for DebugValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for DebugValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for DebugValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<DebugMap> for DebugValue {
    fn from(v: DebugMap) -> Self {
        Self::Map(v)
    }
}

/// Layout settings for [`MappingPrinter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Spaces before each nested entry. Default: 4.
    pub indent: usize,
    /// Text between a key and its value. Default: `" : "`.
    pub separator: String,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            indent: 4,
            separator: " : ".to_string(),
        }
    }
}

impl PrinterConfig {
    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::BlankSeparator`] if `separator` is empty or only
    /// whitespace. Nested headers print the separator with trailing
    /// whitespace trimmed, which must leave some text.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.separator.trim_end().is_empty() {
            return Err(ConfigError::BlankSeparator);
        }
        Ok(())
    }
}

/// Prints a mapping with at most one level of nesting.
///
/// Each top-level scalar prints as `key : value`. A nested mapping prints
/// a `key :` header followed by one indented `key : value` line per
/// entry. Mappings nested deeper than that are not expanded; they print
/// inline as `{k: v, ...}`.
///
/// # Examples
///
/// ```
/// use obskit_io::{DebugMap, DebugValue, MappingPrinter};
///
/// let mut inner = DebugMap::new();
/// inner.insert("x".into(), 1.into());
/// inner.insert("y".into(), 2.into());
/// let mut map = DebugMap::new();
/// map.insert("a".into(), DebugValue::Map(inner));
/// map.insert("b".into(), 5.into());
///
/// let mut out = Vec::new();
/// MappingPrinter::default().print(&mut out, &map).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "a :\n    x : 1\n    y : 2\nb : 5\n");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MappingPrinter {
    config: PrinterConfig,
}

impl MappingPrinter {
    /// Create a printer from a validated config.
    pub fn new(config: PrinterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Write `map` to `out`.
    pub fn print<W: Write + ?Sized>(&self, out: &mut W, map: &DebugMap) -> io::Result<()> {
        let sep = &self.config.separator;
        let header = sep.trim_end();
        let indent = self.config.indent;
        for (key, value) in map {
            match value {
                DebugValue::Map(nested) => {
                    writeln!(out, "{key}{header}")?;
                    for (k, v) in nested {
                        writeln!(out, "{:indent$}{k}{sep}{v}", "")?;
                    }
                }
                scalar => writeln!(out, "{key}{sep}{scalar}")?,
            }
        }
        Ok(())
    }
}

/// Print `map` to `out` with the default layout.
pub fn print_mapping<W: Write + ?Sized>(out: &mut W, map: &DebugMap) -> io::Result<()> {
    MappingPrinter::default().print(out, map)
}
