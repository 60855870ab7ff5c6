//! tiret CLI library
//!
//! This library provides the command-line interface for the tiret
//! compound spelling checker.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
