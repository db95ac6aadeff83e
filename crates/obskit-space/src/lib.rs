//! Observation space descriptors for obskit.
//!
//! This crate defines [`Space`], a declarative description of the data an
//! environment produces, and [`obs_space_info`], which flattens a space
//! into the per-field key/shape/dtype triple ([`ObsSpaceInfo`]) that
//! buffer-allocating code consumes.
//!
//! # Kinds
//!
//! - Leaf: [`BoxSpace`], [`Discrete`], [`MultiDiscrete`], [`MultiBinary`]
//! - Composite: [`DictSpace`] (named, ordered), [`TupleSpace`] (positional,
//!   not supported by introspection)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod composite;
pub mod error;
pub mod info;
pub mod leaf;
pub mod space;

pub use composite::{DictSpace, KeyOrder, TupleSpace};
pub use error::SpaceError;
pub use info::{obs_space_info, ObsSpaceInfo};
pub use leaf::{BoxSpace, Discrete, MultiBinary, MultiDiscrete};
pub use space::Space;
