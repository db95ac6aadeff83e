//! Composite space kinds: named (dict) and positional (tuple) collections.

use crate::space::Space;
use indexmap::IndexMap;
use std::collections::HashMap;

/// How the key order of a [`DictSpace`] was established.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOrder {
    /// Keys enumerate in the order they were supplied. Stable across
    /// calls and runs.
    Insertion,
    /// Keys came from an unordered source (a `HashMap`). Enumeration
    /// order is arbitrary and may differ between runs.
    Unspecified,
}

/// A named collection of sub-spaces.
///
/// Field order matters: keyed observations, buffers and flattened
/// tensors are laid out in the dict's enumeration order. Only dicts
/// with [`KeyOrder::Insertion`] may be introspected; call
/// [`sorted`](DictSpace::sorted) to give an unordered dict a
/// deterministic order.
///
/// # Examples
///
/// ```
/// use obskit_space::{BoxSpace, DictSpace, Space};
///
/// let d = DictSpace::from_pairs([
///     ("velocity", Space::from(BoxSpace::unbounded(&[3]))),
///     ("position", Space::from(BoxSpace::unbounded(&[3]))),
/// ]);
/// let keys: Vec<&str> = d.keys().collect();
/// assert_eq!(keys, ["velocity", "position"]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DictSpace {
    spaces: IndexMap<String, Space>,
    order: KeyOrder,
}

impl DictSpace {
    /// Create from an insertion-ordered map.
    pub fn new(spaces: IndexMap<String, Space>) -> Self {
        Self {
            spaces,
            order: KeyOrder::Insertion,
        }
    }

    /// Create from `(name, space)` pairs in the given order.
    ///
    /// A repeated name replaces the earlier sub-space but keeps the
    /// position where the name first appeared.
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Space)>,
    {
        Self::new(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Create from an unordered map. The result has
    /// [`KeyOrder::Unspecified`].
    pub fn from_hash_map(spaces: HashMap<String, Space>) -> Self {
        Self {
            spaces: spaces.into_iter().collect(),
            order: KeyOrder::Unspecified,
        }
    }

    /// Reorder keys lexicographically, yielding a deterministic
    /// [`KeyOrder::Insertion`] dict.
    pub fn sorted(mut self) -> Self {
        self.spaces.sort_keys();
        self.order = KeyOrder::Insertion;
        self
    }

    /// How the key order was established.
    pub fn order(&self) -> KeyOrder {
        self.order
    }

    /// Whether enumeration order is stable across calls and runs.
    pub fn has_stable_order(&self) -> bool {
        self.order == KeyOrder::Insertion
    }

    /// Look up a sub-space by name.
    pub fn get(&self, name: &str) -> Option<&Space> {
        self.spaces.get(name)
    }

    /// Field names in enumeration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.spaces.keys().map(String::as_str)
    }

    /// `(name, sub-space)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Space)> {
        self.spaces.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Returns `true` if the dict has no fields.
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }
}

/// A positional collection of sub-spaces.
///
/// Tuples carry no field names, so they have no keyed representation
/// and [`obs_space_info`](crate::obs_space_info) rejects them.
#[derive(Clone, Debug, PartialEq)]
pub struct TupleSpace {
    spaces: Vec<Space>,
}

impl TupleSpace {
    /// Create a tuple space.
    pub fn new(spaces: Vec<Space>) -> Self {
        Self { spaces }
    }

    /// Sub-spaces in position order.
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Returns `true` if the tuple has no positions.
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }
}
