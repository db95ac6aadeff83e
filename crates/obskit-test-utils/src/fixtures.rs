//! Reusable observation space fixtures.
//!
//! - [`position_velocity_space`]: two 3-vectors, the canonical dict case.
//! - [`vector_space`]: a bare `F32` box.
//! - [`mixed_dict_space`]: one field of every leaf kind.
//! - [`unordered_dict_space`]: a dict built from a `HashMap`.

use obskit_core::ObsDtype;
use obskit_space::{BoxSpace, Discrete, DictSpace, MultiBinary, MultiDiscrete, Space};
use std::collections::HashMap;

/// `{"position": Box(3,), "velocity": Box(3,)}` in that order.
pub fn position_velocity_space() -> Space {
    DictSpace::from_pairs([
        ("position", Space::from(BoxSpace::unbounded(&[3]))),
        ("velocity", Space::from(BoxSpace::unbounded(&[3]))),
    ])
    .into()
}

/// Unbounded `F32` box with the given shape.
pub fn vector_space(shape: &[usize]) -> Space {
    BoxSpace::unbounded(shape).into()
}

/// One field of every leaf kind:
/// `image: U8(8, 8, 3)`, `state: F64(4,)`, `mode: Discrete(3)`,
/// `buttons: MultiBinary(5)`, `gears: MultiDiscrete([3, 4])`.
pub fn mixed_dict_space() -> Space {
    let image = BoxSpace::uniform(&[8, 8, 3], 0.0, 255.0)
        .expect("valid bounds")
        .with_dtype(ObsDtype::U8);
    let state = BoxSpace::uniform(&[4], -1.0, 1.0)
        .expect("valid bounds")
        .with_dtype(ObsDtype::F64);
    DictSpace::from_pairs([
        ("image", Space::from(image)),
        ("state", Space::from(state)),
        ("mode", Space::from(Discrete::new(3).expect("n > 0"))),
        ("buttons", Space::from(MultiBinary::new(5))),
        (
            "gears",
            Space::from(MultiDiscrete::new(vec![3, 4]).expect("non-empty nvec")),
        ),
    ])
    .into()
}

/// A dict whose key order is unspecified (built from a `HashMap`).
pub fn unordered_dict_space() -> DictSpace {
    let mut m = HashMap::new();
    m.insert("velocity".to_string(), vector_space(&[3]));
    m.insert("position".to_string(), vector_space(&[3]));
    m.insert("angle".to_string(), vector_space(&[]));
    DictSpace::from_hash_map(m)
}

/// Build an ordered dict of unbounded boxes from `(name, shape)` pairs.
pub fn dict_of_boxes(fields: &[(&str, Vec<usize>)]) -> Space {
    DictSpace::from_pairs(
        fields
            .iter()
            .map(|(name, shape)| (name.to_string(), vector_space(shape))),
    )
    .into()
}
