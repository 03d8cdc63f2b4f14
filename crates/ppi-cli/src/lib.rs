//! CLI library components for the `ppi` binary.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
