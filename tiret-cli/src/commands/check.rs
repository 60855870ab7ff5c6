//! The check command: scan files or stdin for compound spelling problems

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::CliResult;
use crate::input;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use tiret_engine::{CheckerConfig, CompoundChecker, Input};

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files or glob patterns to check; "-" reads stdin
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Language code of the embedded rules
    #[arg(short, long, default_value = "en")]
    pub language: String,

    /// Custom language configuration file (TOML), overrides --language
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Compound list file used together with --config
    #[arg(long, value_name = "FILE", requires = "config")]
    pub compounds: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: Format,

    /// Tokenize with hyphens kept inside word tokens
    #[arg(long)]
    pub fuse_hyphens: bool,

    /// Check sentences sequentially instead of in parallel
    #[arg(long)]
    pub sequential: bool,

    /// Print nothing, only set the exit status
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format selection
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// One line per flag
    Text,
    /// JSON array, one element per source
    Json,
}

/// Run the check command; exit status 1 when flags were found
pub fn run(args: CheckArgs) -> CliResult<i32> {
    let mut builder = CheckerConfig::builder()
        .language(&args.language)
        .fuse_hyphens(args.fuse_hyphens)
        .parallel(!args.sequential);
    if let Some(config) = &args.config {
        builder = builder.config_path(config);
        if let Some(compounds) = &args.compounds {
            builder = builder.compounds_path(compounds);
        }
    }
    let checker = CompoundChecker::with_config(builder.build())?;

    let paths = input::resolve(&args.inputs)?;
    let mut formatter: Option<Box<dyn OutputFormatter>> = if args.quiet {
        None
    } else {
        Some(match args.format {
            Format::Text => Box::new(TextFormatter::stdout()),
            Format::Json => Box::new(JsonFormatter::stdout()),
        })
    };

    let mut total_flags = 0;
    for path in &paths {
        let source = input::read_source(path)?;
        let output = checker.check(Input::from_text(source.text))?;
        log::info!(
            "{}: {} sentences, {} flags in {:.1} ms",
            source.name,
            output.metadata.sentences,
            output.metadata.flags,
            output.metadata.processing_time_ms
        );
        total_flags += output.metadata.flags;
        if let Some(formatter) = formatter.as_mut() {
            formatter.format_source(&source.name, &output)?;
        }
    }
    if let Some(formatter) = formatter.as_mut() {
        formatter.finish()?;
    }

    Ok(if total_flags > 0 { 1 } else { 0 })
}
