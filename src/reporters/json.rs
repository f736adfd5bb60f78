//! JSON reporter
//!
//! Outputs the full AnalysisReport as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::models::AnalysisReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render report as compact JSON (single line)
#[allow(dead_code)] // Public API helper
pub fn render_compact(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}
