//! The generate-config command: print a starter language configuration

use crate::error::CliResult;

const TEMPLATE: &str = r#"# tiret language configuration

[metadata]
code = "en"
name = "English"

[scanner]
# "separate": hyphens arrive as their own tokens
# "fused":    hyphens stay inside word tokens
# "auto":     accept both
hyphen_convention = "auto"
max_words = 4

# Entries may live here or in a separate list file passed with --compounds.
[compounds]
entries = [
    "part time/part-time",
    "note book/notebook",
]

# Exception patterns suppress candidates that are known non-compound usages.
# Anchor -1 aligns the first matcher on the token right before the match.
[[exceptions.patterns]]
anchor = -1
matchers = [{ regex = "['´’]" }, { literal = "re" }]
"#;

/// Print the starter configuration to stdout
pub fn run() -> CliResult<i32> {
    print!("{TEMPLATE}");
    Ok(0)
}
