//! Output formatting

mod json;
mod text;

pub use json::{FlagData, JsonFormatter, SourceData};
pub use text::TextFormatter;

use crate::error::CliResult;
use tiret_engine::Output;

/// Formats check results, one source at a time
pub trait OutputFormatter {
    /// Emit the results for one named source
    fn format_source(&mut self, name: &str, output: &Output) -> CliResult<()>;

    /// Flush any buffered output
    fn finish(&mut self) -> CliResult<()>;
}
