//! Read check sources from files or stdin

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;

use crate::error::CliResult;

/// A named source of text to check
#[derive(Debug, Clone)]
pub struct Source {
    /// Display name ("stdin" or the file path)
    pub name: String,
    /// Full text content
    pub text: String,
}

/// Read one source; the pseudo-path `-` reads stdin to end
pub fn read_source(path: &Path) -> CliResult<Source> {
    if path.as_os_str() == "-" {
        let text = io::read_to_string(io::stdin()).context("failed to read stdin")?;
        return Ok(Source {
            name: "stdin".to_string(),
            text,
        });
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(Source {
        name: path.display().to_string(),
        text,
    })
}
