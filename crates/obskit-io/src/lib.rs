//! Console output plumbing for obskit.
//!
//! - [`Console`]: an explicit output context. [`Console::redirect`]
//!   swaps its target for an [`OutputSink`] until the returned
//!   [`Redirect`] guard is dropped, then closes the sink and restores
//!   the previous target on every exit path.
//! - [`MappingPrinter`]: prints a one-level nested [`DebugMap`] for
//!   debugging.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod console;
pub mod error;
pub mod print;
pub mod sink;

pub use console::{Console, Redirect};
pub use error::ConfigError;
pub use print::{print_mapping, DebugMap, DebugValue, MappingPrinter, PrinterConfig};
pub use sink::{CaptureSink, NullSink, OutputSink, StdoutSink, WriterSink};
