//! JSON output formatter

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use super::OutputFormatter;
use crate::error::CliResult;
use tiret_engine::Output;

/// JSON formatter - buffers all sources, emits one array on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    sources: Vec<SourceData>,
}

/// Data structure for one checked source
#[derive(Debug, Serialize, Deserialize)]
pub struct SourceData {
    /// Source name (file path or "stdin")
    pub source: String,
    /// Number of sentences checked
    pub sentences: usize,
    /// Flags found in this source
    pub flags: Vec<FlagData>,
}

/// Data structure for one flag
#[derive(Debug, Serialize, Deserialize)]
pub struct FlagData {
    /// Character offset of the span start
    pub start: usize,
    /// Character offset one past the span end
    pub end: usize,
    /// The flagged surface text
    pub text: String,
    /// Message category ("hyphen", "solid", "hyphen-or-solid")
    pub kind: String,
    /// Human-readable message
    pub message: String,
    /// Suggested replacements, preferred first
    pub suggestions: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sources: Vec::new(),
        }
    }
}

impl JsonFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_source(&mut self, name: &str, output: &Output) -> CliResult<()> {
        self.sources.push(SourceData {
            source: name.to_string(),
            sentences: output.metadata.sentences,
            flags: output
                .flags()
                .map(|flag| FlagData {
                    start: flag.start,
                    end: flag.end,
                    text: flag.text.clone(),
                    kind: flag.kind.to_string(),
                    message: flag.message.clone(),
                    suggestions: flag.suggestions.clone(),
                })
                .collect(),
        });
        Ok(())
    }

    fn finish(&mut self) -> CliResult<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.sources)?;
        writeln!(self.writer)?;
        self.sources.clear();
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiret_engine::CompoundChecker;

    #[test]
    fn emits_valid_json_with_flag_fields() {
        let checker = CompoundChecker::new().unwrap();
        let output = checker.check_text("I have a part time job.").unwrap();

        let mut buf = Vec::new();
        let mut formatter = JsonFormatter::new(&mut buf);
        formatter.format_source("sample.txt", &output).unwrap();
        formatter.finish().unwrap();

        let parsed: Vec<SourceData> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed[0].source, "sample.txt");
        let flag = &parsed[0].flags[0];
        assert_eq!(flag.text, "part time");
        assert_eq!(flag.kind, "hyphen");
        assert_eq!(flag.suggestions, ["part-time"]);
        assert_eq!(flag.start, 9);
    }
}
