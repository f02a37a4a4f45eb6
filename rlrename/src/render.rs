//! Console rendering for rename runs

use console::Style;
use rlrenamelib::{FileOutcome, RunSummary};
use std::path::Path;
use std::str::FromStr;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One line per processed file, then a summary line
    #[default]
    Text,
    /// The whole run summary as pretty JSON
    Json,
}

impl OutputMode {
    pub fn is_structured(self) -> bool {
        matches!(self, Self::Json)
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output mode: {other}")),
        }
    }
}

/// The per-file progress line.
pub fn file_line(outcome: &FileOutcome) -> String {
    format!("Processed file: {}", outcome.path.display())
}

/// Closing line for text output.
pub fn summary_line(summary: &RunSummary, root: &Path) -> String {
    let bold = Style::new().bold();
    format!(
        "{} {} replacements in {} of {} files under {} ({} tokens)",
        bold.apply_to("Done:"),
        summary.replacements,
        summary.changed_files,
        summary.files.len(),
        root.display(),
        summary.tokens
    )
}

/// Render the summary as JSON.
pub fn summary_json(summary: &RunSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}
