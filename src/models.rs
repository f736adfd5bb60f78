//! Core data models for wordprobe
//!
//! These models carry one analysis run's results from the driver to the
//! reporters. They serialize directly for the JSON format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fixed identifier written as the first line of every report stream.
pub const REPORT_IDENT: &str = "wordprobe";

/// Probe statistics for one file's word tree.
///
/// A word's probe count is the number of comparisons needed to reach it,
/// i.e. its insertion depth plus one. Both fields are zero when no words
/// were found.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ProbeStats {
    /// Largest probe count over all distinct words.
    pub max: u32,
    /// Arithmetic mean of probe counts. Rendered with one decimal digit in
    /// the text format.
    pub average: f64,
}

/// One distinct word with its occurrence count and tree depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub frequency: u32,
    /// 0-based depth of the word's node, fixed at insertion time.
    pub depth: u32,
}

/// Analysis of a single input file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub file: PathBuf,
    pub probes: ProbeStats,
    /// Distinct words ascending by case-insensitive key.
    pub words: Vec<WordCount>,
}

/// A full analysis run: one report per readable file, in input order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnalysisReport {
    /// Identifier line preceding all per-file blocks.
    pub ident: String,
    pub files: Vec<FileReport>,
    /// Files that could not be opened and were skipped.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<PathBuf>,
}

impl AnalysisReport {
    pub fn new() -> Self {
        Self {
            ident: REPORT_IDENT.to_owned(),
            files: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Total distinct words across all analyzed files.
    pub fn total_words(&self) -> usize {
        self.files.iter().map(|f| f.words.len()).sum()
    }
}
