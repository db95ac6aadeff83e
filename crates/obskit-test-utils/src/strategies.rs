//! Proptest strategies for shapes, keys and field layouts.

use obskit_core::{ObsDtype, ObsKey};
use proptest::prelude::*;

/// Shapes of rank 0..=3 with small extents (1..=4), so element counts stay tiny.
pub fn arb_shape() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(1usize..=4, 0..=3)
}

/// Any of the supported dtypes.
pub fn arb_dtype() -> impl Strategy<Value = ObsDtype> {
    prop_oneof![
        Just(ObsDtype::F32),
        Just(ObsDtype::F64),
        Just(ObsDtype::I8),
        Just(ObsDtype::I64),
        Just(ObsDtype::U8),
    ]
}

/// Lowercase field names.
pub fn arb_field_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

/// Named field keys (never the sentinel).
pub fn arb_field_key() -> impl Strategy<Value = ObsKey> {
    arb_field_name().prop_map(ObsKey::Field)
}

/// 1..=5 distinct field names with shapes, in generation order.
pub fn arb_fields() -> impl Strategy<Value = Vec<(String, Vec<usize>)>> {
    proptest::collection::vec((arb_field_name(), arb_shape()), 1..=5).prop_map(|fields| {
        let mut seen = std::collections::HashSet::new();
        fields
            .into_iter()
            .filter(|(name, _)| seen.insert(name.clone()))
            .collect()
    })
}
