//! Input resolution: globs, files, and stdin

mod file_reader;
mod glob_resolver;

pub use file_reader::{read_source, Source};
pub use glob_resolver::resolve;
