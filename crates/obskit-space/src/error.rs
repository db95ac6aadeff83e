//! Error types for space construction and introspection.

use std::fmt;

/// Errors arising from space construction or introspection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// The space kind has no per-field shape and dtype (e.g. a tuple
    /// space, or a composite nested inside a dict).
    UnsupportedSpace {
        /// Kind name of the offending space.
        kind: &'static str,
    },
    /// Box bounds are malformed.
    InvalidBounds {
        /// What went wrong.
        reason: String,
    },
    /// A discrete-family space was given zero categories.
    EmptySpace {
        /// Kind name of the offending space.
        kind: &'static str,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSpace { kind } => {
                write!(f, "unsupported space kind for introspection: {kind}")
            }
            Self::InvalidBounds { reason } => write!(f, "invalid box bounds: {reason}"),
            Self::EmptySpace { kind } => write!(f, "{kind} space must have at least one value"),
        }
    }
}

impl std::error::Error for SpaceError {}
