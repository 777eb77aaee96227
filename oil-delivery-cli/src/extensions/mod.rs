//! Contains extensions used by commands.

pub mod check;
pub mod generate;
pub mod solve;
