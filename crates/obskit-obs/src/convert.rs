//! Conversion between bare and keyed observations.

use crate::array::ObsArray;
use indexmap::IndexMap;
use obskit_core::ObsKey;
use obskit_space::ObsSpaceInfo;

/// Keyed observation: one array per field.
///
/// A leaf-space observation is represented as the single entry
/// `{ObsKey::Unkeyed: array}`.
pub type ObsDict = IndexMap<ObsKey, ObsArray>;

/// An observation as an environment produces it.
#[derive(Clone, Debug, PartialEq)]
pub enum Observation {
    /// Bare array from a leaf space.
    Single(ObsArray),
    /// Per-field arrays from a dict space.
    Keyed(ObsDict),
}

impl Observation {
    /// Returns `true` for [`Observation::Keyed`].
    pub fn is_keyed(&self) -> bool {
        matches!(self, Self::Keyed(_))
    }
}

impl From<ObsArray> for Observation {
    fn from(array: ObsArray) -> Self {
        Self::Single(array)
    }
}

impl From<ObsDict> for Observation {
    fn from(dict: ObsDict) -> Self {
        Self::Keyed(dict)
    }
}

/// Deep-copy a keyed observation.
///
/// Every array in the result owns fresh storage; writes to the copy
/// are never visible through `obs` and vice versa.
pub fn copy_obs_dict(obs: &ObsDict) -> ObsDict {
    obs.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

/// Collapse a keyed observation back to a bare array when it carries no
/// field structure.
///
/// Returns [`Observation::Single`] only if the key set is exactly
/// `{ObsKey::Unkeyed}`. Any other dict, including one holding the
/// sentinel alongside named fields, or an empty dict, is returned
/// unchanged as [`Observation::Keyed`].
///
/// # Examples
///
/// ```
/// use obskit_obs::{dict_to_obs, obs_to_dict, ObsArray, Observation};
///
/// let a = ObsArray::new(&[2], vec![1.0f32, 2.0]).unwrap();
/// let dict = obs_to_dict(Observation::Single(a.clone()));
/// assert_eq!(dict_to_obs(dict), Observation::Single(a));
/// ```
pub fn dict_to_obs(mut obs: ObsDict) -> Observation {
    if obs.len() == 1 {
        if let Some(array) = obs.swap_remove(&ObsKey::Unkeyed) {
            return Observation::Single(array);
        }
    }
    Observation::Keyed(obs)
}

/// Wrap an observation into keyed form.
///
/// A keyed observation is returned as-is; a bare array becomes the
/// single entry `{ObsKey::Unkeyed: array}`.
pub fn obs_to_dict(obs: Observation) -> ObsDict {
    match obs {
        Observation::Keyed(dict) => dict,
        Observation::Single(array) => {
            let mut dict = ObsDict::with_capacity(1);
            dict.insert(ObsKey::Unkeyed, array);
            dict
        }
    }
}

/// Allocate a zero-filled keyed observation laid out per `info`.
///
/// Keys appear in `info`'s field order, each array with the recorded
/// shape and dtype. For a leaf space the result is the sentinel-only
/// dict, which [`dict_to_obs`] collapses to a bare array.
pub fn zeros_from_info(info: &ObsSpaceInfo) -> ObsDict {
    info.iter()
        .map(|(key, shape, dtype)| (key.clone(), ObsArray::zeros(shape, dtype)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use obskit_core::ObsDtype;
    use proptest::prelude::*;

    fn arr(values: &[f32]) -> ObsArray {
        ObsArray::new(&[values.len()], values.to_vec()).unwrap()
    }

    fn keyed(entries: &[(ObsKey, ObsArray)]) -> ObsDict {
        entries.iter().cloned().collect()
    }

    #[test]
    fn sentinel_only_collapses() {
        let a = arr(&[1.0, 2.0]);
        let dict = keyed(&[(ObsKey::Unkeyed, a.clone())]);
        assert_eq!(dict_to_obs(dict), Observation::Single(a));
    }

    #[test]
    fn named_fields_stay_keyed() {
        let dict = keyed(&[
            (ObsKey::field("a"), arr(&[1.0])),
            (ObsKey::field("b"), arr(&[2.0])),
        ]);
        assert_eq!(dict_to_obs(dict.clone()), Observation::Keyed(dict));
    }

    #[test]
    fn single_named_field_stays_keyed() {
        let dict = keyed(&[(ObsKey::field("only"), arr(&[3.0]))]);
        assert_eq!(dict_to_obs(dict.clone()), Observation::Keyed(dict));
    }

    #[test]
    fn sentinel_beside_fields_stays_keyed() {
        let dict = keyed(&[
            (ObsKey::field("a"), arr(&[1.0])),
            (ObsKey::Unkeyed, arr(&[2.0])),
        ]);
        let out = dict_to_obs(dict.clone());
        assert_eq!(out, Observation::Keyed(dict));
    }

    #[test]
    fn empty_dict_stays_keyed() {
        assert_eq!(dict_to_obs(ObsDict::new()), Observation::Keyed(ObsDict::new()));
    }

    #[test]
    fn wrap_keyed_is_identity() {
        let dict = keyed(&[(ObsKey::field("x"), arr(&[1.0]))]);
        assert_eq!(obs_to_dict(Observation::Keyed(dict.clone())), dict);
    }

    #[test]
    fn wrap_single_uses_sentinel() {
        let a = arr(&[4.0]);
        let dict = obs_to_dict(a.clone().into());
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get(&ObsKey::Unkeyed), Some(&a));
    }

    #[test]
    fn copy_is_deep() {
        let original = keyed(&[(ObsKey::field("k"), arr(&[1.0, 2.0]))]);
        let mut copy = copy_obs_dict(&original);
        copy[&ObsKey::field("k")].as_f32_mut().unwrap()[0] = -1.0;
        assert_eq!(original[&ObsKey::field("k")].as_f32(), Some(&[1.0, 2.0][..]));

        let mut original = original;
        let copy = copy_obs_dict(&original);
        original[&ObsKey::field("k")].as_f32_mut().unwrap()[1] = 9.0;
        assert_eq!(copy[&ObsKey::field("k")].as_f32(), Some(&[1.0, 2.0][..]));
    }

    #[test]
    fn copy_preserves_keys_and_values() {
        let original = keyed(&[
            (ObsKey::field("b"), arr(&[1.0])),
            (ObsKey::field("a"), ObsArray::zeros(&[2, 2], ObsDtype::U8)),
        ]);
        assert_eq!(copy_obs_dict(&original), original);
    }

    fn arb_array() -> impl Strategy<Value = ObsArray> {
        proptest::collection::vec(-1e6f32..1e6, 0..8).prop_map(|v| arr(&v))
    }

    proptest! {
        #[test]
        fn collapse_undoes_wrap(a in arb_array()) {
            let single = Observation::Single(a);
            prop_assert_eq!(dict_to_obs(obs_to_dict(single.clone())), single);
        }

        #[test]
        fn wrap_collapse_wrap_is_stable(
            a in arb_array(),
            names in proptest::collection::vec("[a-z]{1,4}", 0..4),
            keyed_input in any::<bool>(),
        ) {
            let obs = if keyed_input {
                let dict: ObsDict = names
                    .iter()
                    .map(|n| (ObsKey::field(n.as_str()), a.clone()))
                    .collect();
                Observation::Keyed(dict)
            } else {
                Observation::Single(a)
            };
            let once = obs_to_dict(obs);
            let again = obs_to_dict(dict_to_obs(once.clone()));
            prop_assert_eq!(again, once);
        }
    }
}
