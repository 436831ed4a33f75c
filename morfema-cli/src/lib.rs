//! Library portion of the morfema CLI
//!
//! Exposes the command implementations so integration tests can drive
//! them without spawning the binary.

pub mod commands;
pub mod error;
pub mod inventory;

pub use error::{CliError, CliResult};
