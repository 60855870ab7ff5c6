//! Plain text output formatter

use std::io::{self, Write};

use super::OutputFormatter;
use crate::error::CliResult;
use tiret_engine::Output;

/// Plain text formatter - one line per flag
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_source(&mut self, name: &str, output: &Output) -> CliResult<()> {
        for flag in output.flags() {
            writeln!(
                self.writer,
                "{name}:{}: '{}' -> {} ({})",
                flag.start,
                flag.text,
                flag.suggestions.join(", "),
                flag.message,
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> CliResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiret_engine::CompoundChecker;

    #[test]
    fn one_line_per_flag() {
        let checker = CompoundChecker::new().unwrap();
        let output = checker.check_text("I have a part time job.").unwrap();

        let mut buf = Vec::new();
        let mut formatter = TextFormatter::new(&mut buf);
        formatter.format_source("sample.txt", &output).unwrap();
        formatter.finish().unwrap();

        let printed = String::from_utf8(buf).unwrap();
        assert_eq!(
            printed,
            "sample.txt:9: 'part time' -> part-time \
             (This word is normally spelled with hyphen.)\n"
        );
    }

    #[test]
    fn clean_source_prints_nothing() {
        let checker = CompoundChecker::new().unwrap();
        let output = checker.check_text("All quiet here.").unwrap();

        let mut buf = Vec::new();
        let mut formatter = TextFormatter::new(&mut buf);
        formatter.format_source("sample.txt", &output).unwrap();
        assert!(buf.is_empty());
    }
}
