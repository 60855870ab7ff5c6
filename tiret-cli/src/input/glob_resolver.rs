//! Expand file arguments and glob patterns into concrete paths

use std::path::PathBuf;

use crate::error::{CliError, CliResult};

/// Resolve a mix of literal paths and glob patterns
///
/// Literal paths must exist; a pattern that matches nothing is an error so
/// typos do not silently check zero files. The pseudo-path `-` (stdin) is
/// passed through untouched.
pub fn resolve(inputs: &[String]) -> CliResult<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        if input == "-" {
            paths.push(PathBuf::from("-"));
            continue;
        }
        if input.contains(['*', '?', '[']) {
            let matches: Vec<PathBuf> = glob::glob(input)
                .map_err(|e| CliError::InvalidPattern(format!("{input}: {e}")))?
                .filter_map(|m| m.ok())
                .filter(|p| p.is_file())
                .collect();
            if matches.is_empty() {
                return Err(CliError::FileNotFound(input.clone()).into());
            }
            paths.extend(matches);
        } else {
            let path = PathBuf::from(input);
            if !path.is_file() {
                return Err(CliError::FileNotFound(input.clone()).into());
            }
            paths.push(path);
        }
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn stdin_marker_passes_through() {
        let paths = resolve(&["-".to_string()]).unwrap();
        assert_eq!(paths, [PathBuf::from("-")]);
    }

    #[test]
    fn missing_literal_path_is_an_error() {
        assert!(resolve(&["/nonexistent/file.txt".to_string()]).is_err());
    }

    #[test]
    fn glob_expands_to_matching_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();
        fs::write(dir.path().join("b.txt"), "y").unwrap();
        fs::write(dir.path().join("c.md"), "z").unwrap();

        let pattern = dir.path().join("*.txt").display().to_string();
        let mut paths = resolve(&[pattern]).unwrap();
        paths.sort();
        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("a.txt"));
    }

    #[test]
    fn empty_glob_match_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = dir.path().join("*.none").display().to_string();
        assert!(resolve(&[pattern]).is_err());
    }
}
