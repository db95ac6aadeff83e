//! Field keys for keyed observation representations.

use std::fmt;

/// Key of one field in a keyed observation.
///
/// Structured (dict) observations use [`ObsKey::Field`] with the field
/// name. Unstructured observations are stored under the single sentinel
/// key [`ObsKey::Unkeyed`], so both kinds can flow through the same
/// map-based APIs.
///
/// # Examples
///
/// ```
/// use obskit_core::ObsKey;
///
/// let k: ObsKey = "position".into();
/// assert_eq!(k.as_field(), Some("position"));
/// assert!(ObsKey::Unkeyed.is_unkeyed());
/// assert_eq!(ObsKey::Unkeyed.to_string(), "<unkeyed>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObsKey {
    /// Sentinel key: the observation has no field structure.
    Unkeyed,
    /// A named field of a structured observation.
    Field(String),
}

impl ObsKey {
    /// Build a field key.
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    /// Returns `true` for the sentinel key.
    pub fn is_unkeyed(&self) -> bool {
        matches!(self, Self::Unkeyed)
    }

    /// The field name, or `None` for the sentinel.
    pub fn as_field(&self) -> Option<&str> {
        match self {
            Self::Field(name) => Some(name),
            Self::Unkeyed => None,
        }
    }
}

impl fmt::Display for ObsKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unkeyed => write!(f, "<unkeyed>"),
            Self::Field(name) => write!(f, "{name}"),
        }
    }
}

impl From<&str> for ObsKey {
    fn from(name: &str) -> Self {
        Self::Field(name.to_string())
    }
}

impl From<String> for ObsKey {
    fn from(name: String) -> Self {
        Self::Field(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_sorts_before_fields() {
        let mut keys = vec![ObsKey::field("b"), ObsKey::Unkeyed, ObsKey::field("a")];
        keys.sort();
        assert_eq!(
            keys,
            vec![ObsKey::Unkeyed, ObsKey::field("a"), ObsKey::field("b")]
        );
    }

    #[test]
    fn field_named_like_sentinel_is_still_a_field() {
        let k = ObsKey::field("<unkeyed>");
        assert!(!k.is_unkeyed());
        assert_ne!(k, ObsKey::Unkeyed);
        assert_eq!(k.to_string(), ObsKey::Unkeyed.to_string());
    }

    #[test]
    fn string_conversions_agree() {
        assert_eq!(ObsKey::from("x"), ObsKey::from(String::from("x")));
        assert_eq!(ObsKey::Unkeyed.as_field(), None);
    }
}
