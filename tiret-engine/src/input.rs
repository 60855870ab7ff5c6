//! Input abstraction for the checker

use std::fs;
use std::path::PathBuf;

use crate::error::{EngineError, Result};

/// Text to check, supplied directly or read from a file
#[derive(Debug, Clone)]
pub enum Input {
    /// In-memory text
    Text(String),
    /// Path to a UTF-8 text file
    File(PathBuf),
}

impl Input {
    /// Input from a string
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Input from a file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Resolve the input to text
    pub fn read(&self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text.clone()),
            Input::File(path) => {
                let bytes = fs::read(path).map_err(|e| {
                    EngineError::IoError(format!("{}: {e}", path.display()))
                })?;
                Ok(String::from_utf8(bytes)?)
            }
        }
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::from_text(text)
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}
