//! A crate which provides building blocks of the `oil-delivery` command line interface: solver
//! configuration, interruption handling, audit records, invocation of an external checker and
//! instance generation.
//!

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod extensions;

pub use oil_delivery_core as core;
