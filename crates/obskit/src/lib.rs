//! obskit: observation helpers for vectorized reinforcement-learning environments.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! obskit sub-crates. For most users, adding `obskit` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use obskit::prelude::*;
//!
//! // A dict space with two 3-vectors.
//! let space: Space = DictSpace::from_pairs([
//!     ("position", Space::from(BoxSpace::unbounded(&[3]))),
//!     ("velocity", Space::from(BoxSpace::unbounded(&[3]))),
//! ])
//! .into();
//!
//! // Introspect once, then allocate a keyed buffer in field order.
//! let info = obs_space_info(&space).unwrap();
//! let mut buf = zeros_from_info(&info);
//! buf[&ObsKey::field("position")].as_f32_mut().unwrap()[0] = 1.5;
//!
//! // Keep a private snapshot before handing the buffer on.
//! let snapshot = copy_obs_dict(&buf);
//! assert!(dict_to_obs(snapshot).is_keyed());
//!
//! // Leaf spaces round-trip through the unkeyed sentinel.
//! let bare = ObsArray::new(&[2], vec![0.5f32, -0.5]).unwrap();
//! let keyed = obs_to_dict(bare.clone().into());
//! assert_eq!(dict_to_obs(keyed), Observation::Single(bare));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `obskit-core` | `ObsKey`, `ObsDtype`, `Shape` |
//! | [`space`] | `obskit-space` | Space descriptors and `obs_space_info` |
//! | [`obs`] | `obskit-obs` | Observation arrays and keyed/bare conversion |
//! | [`io`] | `obskit-io` | Console redirection and the mapping printer |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`obskit-core`).
pub use obskit_core as types;

/// Observation space descriptors and introspection (`obskit-space`).
///
/// Build [`space::Space`] values and flatten them with
/// [`space::obs_space_info`].
pub use obskit_space as space;

/// Observation values and conversion (`obskit-obs`).
pub use obskit_obs as obs;

/// Console output plumbing (`obskit-io`).
///
/// [`io::Console::redirect`] for scoped output capture,
/// [`io::MappingPrinter`] for debug dumps.
pub use obskit_io as io;

/// Common imports for typical obskit usage.
///
/// ```rust
/// use obskit::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use obskit_core::{ObsDtype, ObsKey, Shape};

    // Spaces
    pub use obskit_space::{
        obs_space_info, BoxSpace, DictSpace, Discrete, MultiBinary, MultiDiscrete, ObsSpaceInfo,
        Space, SpaceError, TupleSpace,
    };

    // Observations
    pub use obskit_obs::{
        copy_obs_dict, dict_to_obs, obs_to_dict, zeros_from_info, ObsArray, ObsDict, Observation,
    };

    // Output
    pub use obskit_io::{print_mapping, CaptureSink, Console, DebugMap, DebugValue, OutputSink};
}
