//! Contains extensions used by the solve command.

pub mod audit;
pub mod config;
pub mod external;
pub mod interruption;
