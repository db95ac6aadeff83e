//! Benchmark profiles for the obskit observation helpers.
//!
//! Provides pre-built spaces and observations for the criterion benches:
//!
//! - [`reference_space`]: 8-field dict of `F32` boxes (64 elements each)
//! - [`image_space`]: single `U8` 84x84x4 frame stack, the Atari layout
//! - [`reference_obs`]: a zero-filled keyed observation for a space

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use obskit_core::ObsDtype;
use obskit_obs::{zeros_from_info, ObsDict};
use obskit_space::{obs_space_info, BoxSpace, DictSpace, Space};

/// Number of fields in [`reference_space`].
pub const REFERENCE_FIELDS: usize = 8;

/// Dict space with [`REFERENCE_FIELDS`] unbounded `F32` boxes of shape `[8, 8]`.
pub fn reference_space() -> Space {
    DictSpace::from_pairs((0..REFERENCE_FIELDS).map(|i| {
        (
            format!("field_{i}"),
            Space::from(BoxSpace::unbounded(&[8, 8])),
        )
    }))
    .into()
}

/// Leaf `U8` box of shape `[84, 84, 4]`.
pub fn image_space() -> Space {
    BoxSpace::uniform(&[84, 84, 4], 0.0, 255.0)
        .expect("static bounds are valid")
        .with_dtype(ObsDtype::U8)
        .into()
}

/// Zero-filled keyed observation laid out for `space`.
pub fn reference_obs(space: &Space) -> ObsDict {
    let info = obs_space_info(space).expect("benchmark spaces are introspectable");
    zeros_from_info(&info)
}
