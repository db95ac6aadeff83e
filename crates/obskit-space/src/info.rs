//! Per-field introspection of observation spaces.

use crate::error::SpaceError;
use crate::space::Space;
use indexmap::IndexMap;
use obskit_core::{ObsDtype, ObsKey, Shape};

/// Keys, shapes and dtypes of every field of an observation space.
///
/// Produced once by [`obs_space_info`] and read-only afterwards. All
/// three views share the same key order, which is the space's field
/// order (or the single [`ObsKey::Unkeyed`] entry for a leaf space).
#[derive(Clone, Debug, PartialEq)]
pub struct ObsSpaceInfo {
    keys: Vec<ObsKey>,
    shapes: IndexMap<ObsKey, Shape>,
    dtypes: IndexMap<ObsKey, ObsDtype>,
}

impl ObsSpaceInfo {
    fn with_capacity(n: usize) -> Self {
        Self {
            keys: Vec::with_capacity(n),
            shapes: IndexMap::with_capacity(n),
            dtypes: IndexMap::with_capacity(n),
        }
    }

    fn push(&mut self, key: ObsKey, space: &Space) -> Result<(), SpaceError> {
        let (shape, dtype) = match (space.shape(), space.dtype()) {
            (Some(shape), Some(dtype)) => (shape, dtype),
            _ => {
                return Err(SpaceError::UnsupportedSpace {
                    kind: space.kind_name(),
                })
            }
        };
        self.shapes.insert(key.clone(), Shape::from_slice(shape));
        self.dtypes.insert(key.clone(), dtype);
        self.keys.push(key);
        Ok(())
    }

    /// Field keys in field order.
    pub fn keys(&self) -> &[ObsKey] {
        &self.keys
    }

    /// Shape of each field.
    pub fn shapes(&self) -> &IndexMap<ObsKey, Shape> {
        &self.shapes
    }

    /// Dtype of each field.
    pub fn dtypes(&self) -> &IndexMap<ObsKey, ObsDtype> {
        &self.dtypes
    }

    /// Shape of one field.
    pub fn shape(&self, key: &ObsKey) -> Option<&[usize]> {
        self.shapes.get(key).map(|s| s.as_slice())
    }

    /// Dtype of one field.
    pub fn dtype(&self, key: &ObsKey) -> Option<ObsDtype> {
        self.dtypes.get(key).copied()
    }

    /// Iterate `(key, shape, dtype)` in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&ObsKey, &[usize], ObsDtype)> {
        self.keys
            .iter()
            .map(|k| (k, self.shapes[k].as_slice(), self.dtypes[k]))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the space had no fields (an empty dict).
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Decompose into the raw `(keys, shapes, dtypes)` triple.
    pub fn into_parts(
        self,
    ) -> (
        Vec<ObsKey>,
        IndexMap<ObsKey, Shape>,
        IndexMap<ObsKey, ObsDtype>,
    ) {
        (self.keys, self.shapes, self.dtypes)
    }
}

/// Extract dict-structured field information from a space.
///
/// - A [`Space::Dict`] yields one entry per sub-space, in the dict's
///   field order.
/// - A leaf space yields a single entry under [`ObsKey::Unkeyed`].
///
/// # Errors
///
/// [`SpaceError::UnsupportedSpace`] for a [`Space::Tuple`], or for a dict
/// containing a composite sub-space. No partial result is returned.
///
/// # Panics
///
/// Panics if `space` is a dict whose key order is
/// [`KeyOrder::Unspecified`](crate::KeyOrder::Unspecified). Callers rely
/// on the field order being identical across calls; sort the dict with
/// [`DictSpace::sorted`](crate::DictSpace::sorted) first.
///
/// # Examples
///
/// ```
/// use obskit_space::{obs_space_info, BoxSpace, DictSpace, Space};
/// use obskit_core::ObsKey;
///
/// let space: Space = DictSpace::from_pairs([
///     ("position", Space::from(BoxSpace::unbounded(&[3]))),
///     ("velocity", Space::from(BoxSpace::unbounded(&[3]))),
/// ])
/// .into();
///
/// let info = obs_space_info(&space).unwrap();
/// assert_eq!(info.keys(), &[ObsKey::field("position"), ObsKey::field("velocity")]);
/// assert_eq!(info.shape(&ObsKey::field("velocity")), Some(&[3][..]));
/// ```
pub fn obs_space_info(space: &Space) -> Result<ObsSpaceInfo, SpaceError> {
    let info = match space {
        Space::Dict(dict) => {
            assert!(
                dict.has_stable_order(),
                "obs_space_info requires a dict space with a stable key order, got {:?}",
                dict.order(),
            );
            let mut info = ObsSpaceInfo::with_capacity(dict.len());
            for (name, sub) in dict.iter() {
                info.push(ObsKey::field(name), sub)?;
            }
            info
        }
        Space::Tuple(_) => {
            return Err(SpaceError::UnsupportedSpace {
                kind: space.kind_name(),
            })
        }
        leaf => {
            let mut info = ObsSpaceInfo::with_capacity(1);
            info.push(ObsKey::Unkeyed, leaf)?;
            info
        }
    };
    tracing::trace!(kind = space.kind_name(), fields = info.len(), "introspected space");
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::{DictSpace, TupleSpace};
    use crate::leaf::{BoxSpace, Discrete, MultiBinary};
    use std::collections::HashMap;

    #[test]
    fn leaf_box_uses_sentinel_key() {
        let space: Space = BoxSpace::unbounded(&[4]).into();
        let info = obs_space_info(&space).unwrap();
        assert_eq!(info.keys(), &[ObsKey::Unkeyed]);
        assert_eq!(info.shape(&ObsKey::Unkeyed), Some(&[4][..]));
        assert_eq!(info.dtype(&ObsKey::Unkeyed), Some(ObsDtype::F32));
    }

    #[test]
    fn discrete_leaf_is_scalar_int() {
        let space: Space = Discrete::new(6).unwrap().into();
        let info = obs_space_info(&space).unwrap();
        assert_eq!(info.shape(&ObsKey::Unkeyed), Some(&[][..]));
        assert_eq!(info.dtype(&ObsKey::Unkeyed), Some(ObsDtype::I64));
    }

    #[test]
    fn dict_preserves_declared_order() {
        let space: Space = DictSpace::from_pairs([
            ("b", Space::from(MultiBinary::new(2))),
            ("a", Space::from(BoxSpace::unbounded(&[1, 2]).with_dtype(ObsDtype::F64))),
        ])
        .into();
        let info = obs_space_info(&space).unwrap();
        assert_eq!(info.keys(), &[ObsKey::field("b"), ObsKey::field("a")]);
        assert_eq!(
            info.shapes().keys().collect::<Vec<_>>(),
            info.keys().iter().collect::<Vec<_>>()
        );
        assert_eq!(info.dtype(&ObsKey::field("a")), Some(ObsDtype::F64));
        assert_eq!(info.dtype(&ObsKey::field("b")), Some(ObsDtype::I8));
    }

    #[test]
    fn empty_dict_yields_no_fields() {
        let space: Space = DictSpace::from_pairs(Vec::<(String, Space)>::new()).into();
        let info = obs_space_info(&space).unwrap();
        assert!(info.is_empty());
    }

    #[test]
    fn tuple_is_unsupported() {
        let space: Space = TupleSpace::new(vec![BoxSpace::unbounded(&[1]).into()]).into();
        assert_eq!(
            obs_space_info(&space),
            Err(SpaceError::UnsupportedSpace { kind: "Tuple" })
        );
    }

    #[test]
    fn nested_composite_is_unsupported() {
        let inner: Space = DictSpace::from_pairs([("x", Space::from(MultiBinary::new(1)))]).into();
        let space: Space = DictSpace::from_pairs([
            ("ok", Space::from(MultiBinary::new(1))),
            ("inner", inner),
        ])
        .into();
        assert_eq!(
            obs_space_info(&space),
            Err(SpaceError::UnsupportedSpace { kind: "Dict" })
        );
    }

    #[test]
    #[should_panic(expected = "stable key order")]
    fn unordered_dict_panics() {
        let mut m = HashMap::new();
        m.insert("a".to_string(), Space::from(MultiBinary::new(1)));
        let space: Space = DictSpace::from_hash_map(m).into();
        let _ = obs_space_info(&space);
    }

    #[test]
    fn sorted_dict_is_accepted() {
        let mut m = HashMap::new();
        m.insert("velocity".to_string(), Space::from(BoxSpace::unbounded(&[3])));
        m.insert("position".to_string(), Space::from(BoxSpace::unbounded(&[3])));
        let space: Space = DictSpace::from_hash_map(m).sorted().into();
        let info = obs_space_info(&space).unwrap();
        assert_eq!(
            info.keys(),
            &[ObsKey::field("position"), ObsKey::field("velocity")]
        );
    }

    #[test]
    fn into_parts_matches_accessors() {
        let space: Space = BoxSpace::unbounded(&[2]).into();
        let info = obs_space_info(&space).unwrap();
        let (keys, shapes, dtypes) = info.clone().into_parts();
        assert_eq!(keys, info.keys());
        assert_eq!(&shapes, info.shapes());
        assert_eq!(&dtypes, info.dtypes());
    }
}
