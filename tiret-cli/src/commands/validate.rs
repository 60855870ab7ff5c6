//! The validate command: lint a compound list file

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::error::CliResult;
use tiret_core::{CompoundEntry, CompoundTable};

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Compound list file to validate
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Run the validate command; exit status 1 when problems were found
pub fn run(args: ValidateArgs) -> CliResult<i32> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    // Per-line diagnostics first, so one bad line does not hide the rest.
    let mut problems = 0;
    for (i, line) in text.lines().enumerate() {
        if let Err(e) = CompoundEntry::parse_line(line, i + 1) {
            println!("{}: {e}", args.file.display());
            problems += 1;
        }
    }

    if problems == 0 {
        // Whole-list checks (duplicates) only make sense on parsable input.
        match CompoundTable::from_list(&text) {
            Ok(table) => {
                println!("OK: {} entries", table.len());
                return Ok(0);
            }
            Err(e) => {
                println!("{}: {e}", args.file.display());
                problems += 1;
            }
        }
    }

    println!("{problems} problem(s) found");
    Ok(1)
}
