//! Test utilities for obskit development.
//!
//! Provides canned observation spaces ([`fixtures`]) and proptest
//! strategies ([`strategies`]) shared by the integration tests and
//! benchmarks of the other crates.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;
