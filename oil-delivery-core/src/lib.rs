//! Core crate contains building blocks to validate, score and search solutions of the
//! ***multi-period oil delivery problem***: a fleet of multi-cabin vehicles delivers oil to gas
//! stations over several periods, respecting cabin volumes and station demand caps, while
//! maximizing a weighted value and efficiency objective.
//!
//! The crate is split into:
//! - `models`: instance and solution models with instance validation
//! - `checker`: scorer, validator and packing of its result into a process exit code
//! - `solver`: deadline, workers, allocation strategies and the parallel search harness
//! - `format`: json reader and writer of instance and solution files
//! - `utils`: error type, quotas, parallelism, randomization and environment
//!

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/generator/mod.rs"]
pub mod generator;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
mod discovery;

pub mod checker;
pub mod format;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
