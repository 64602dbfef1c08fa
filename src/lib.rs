#![warn(
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]

//! A collection of small, independent developer utilities.
//!
//! The centerpiece is [`types`], which encodes JVM field and method descriptors. The other
//! modules are lookup tables and helpers that are handy next to it: byte unit conversion,
//! thread naming, POSIX signals and exit codes, parse tree traversal and file collection.
//! ## Features
#![doc = document_features::document_features!()]

pub(crate) mod macros;

pub mod assertions;
pub mod byte_unit;
#[cfg(feature = "fs")]
pub mod fs;
pub mod parse_tree;
#[cfg(feature = "posix")]
pub mod posix;
pub mod thread;
pub mod types;

/// Test utilities
#[cfg(test)]
pub mod tests;
