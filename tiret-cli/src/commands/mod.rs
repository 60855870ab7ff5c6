//! Command-line definitions and dispatch

pub mod check;
pub mod generate_config;
pub mod validate;

use clap::{Parser, Subcommand};

use crate::error::CliResult;

/// Detect compounds written as separate words or with wrong hyphenation
#[derive(Parser, Debug)]
#[command(name = "tiret", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check text files or stdin for compound spelling problems
    Check(check::CheckArgs),
    /// Validate a compound list file
    Validate(validate::ValidateArgs),
    /// Print a starter language configuration
    GenerateConfig,
}

impl Cli {
    /// Dispatch the selected command, returning the process exit status
    pub fn run(self) -> CliResult<i32> {
        match self.command {
            Commands::Check(args) => check::run(args),
            Commands::Validate(args) => validate::run(args),
            Commands::GenerateConfig => generate_config::run(),
        }
    }
}
