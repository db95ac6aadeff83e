//! Observation values and keyed/raw conversion for obskit.
//!
//! Environments with a leaf observation space produce one bare
//! [`ObsArray`]; environments with a dict space produce a keyed
//! [`ObsDict`]. Learning code wants one uniform shape. This crate
//! converts between the two:
//!
//! - [`obs_to_dict`] wraps a bare array under [`ObsKey::Unkeyed`](obskit_core::ObsKey::Unkeyed),
//! - [`dict_to_obs`] collapses a sentinel-only dict back to the bare array,
//! - [`copy_obs_dict`] deep-copies a keyed observation,
//! - [`zeros_from_info`] allocates a zero-filled keyed observation from
//!   [`ObsSpaceInfo`](obskit_space::ObsSpaceInfo).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod convert;
pub mod error;

pub use array::{ArrayData, ObsArray};
pub use convert::{copy_obs_dict, dict_to_obs, obs_to_dict, zeros_from_info, ObsDict, Observation};
pub use error::ArrayError;
