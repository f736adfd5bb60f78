//! Text reporter: the classic per-file block layout
//!
//! The stream opens with the fixed identifier line, then one block per
//! analyzed file: the filename, the probe statistics, one line per distinct
//! word ascending, and a dash separator.

use crate::models::AnalysisReport;
use anyhow::Result;
use std::fmt::Write;

/// Separator line closing each file block.
const SEPARATOR: &str = "--------------------";

/// Render report in the fixed text block format
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "{}", report.ident)?;
    for file in &report.files {
        writeln!(out, "{}", file.file.display())?;
        writeln!(out, "Maximum number of probes: {}", file.probes.max)?;
        // Exactly one decimal digit, matching the historical output.
        writeln!(out, "Average number of probes: {:.1}", file.probes.average)?;
        for word in &file.words {
            writeln!(out, "{} {} ({})", word.word, word.frequency, word.depth)?;
        }
        writeln!(out, "{SEPARATOR}")?;
    }

    Ok(out)
}
