//! Core types for the obskit observation helpers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other obskit crate: the field key
//! ([`ObsKey`]) with its unkeyed sentinel, the element type tag
//! ([`ObsDtype`]), and the [`Shape`] alias.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dtype;
pub mod key;
pub mod shape;

pub use dtype::ObsDtype;
pub use key::ObsKey;
pub use shape::{num_elements, Shape};
