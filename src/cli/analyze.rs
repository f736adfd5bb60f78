//! Analyze command implementation
//!
//! This command drives the whole analysis:
//! 1. Collect input paths (positional args plus an optional list file)
//! 2. Per readable file: build a fresh word tree from the tokenized lines
//! 3. Skip unreadable files with a warning, keeping the rest of the run
//! 4. Render the report (text or json) to stdout or an output file

use crate::models::{AnalysisReport, FileReport, WordCount};
use crate::reporters;
use crate::tokenizer::tokenize;
use crate::tree::WordTree;

use anyhow::{Context, Result};
use console::style;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};

/// Run the analyze command over `files` plus the contents of `list`.
pub fn run(
    files: Vec<PathBuf>,
    list: Option<&Path>,
    format: &str,
    output: Option<&Path>,
) -> Result<()> {
    let start = Instant::now();

    let mut inputs = files;
    if let Some(list_path) = list {
        inputs.extend(read_file_list(list_path)?);
    }

    let report = analyze_files(&inputs);
    let rendered = reporters::report(&report, format)?;

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            println!(
                "{} Analyzed {} file(s), {} distinct word(s) in {:.2}s -> {}",
                style("done").green().bold(),
                report.files.len(),
                report.total_words(),
                start.elapsed().as_secs_f64(),
                path.display()
            );
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Analyze every path in order. Unreadable files are recorded as skipped;
/// no tree is built for them.
pub(crate) fn analyze_files(paths: &[PathBuf]) -> AnalysisReport {
    let mut report = AnalysisReport::new();
    for path in paths {
        match fs::read_to_string(path) {
            Ok(contents) => {
                debug!(file = %path.display(), "analyzing");
                report.files.push(analyze_text(path.clone(), &contents));
            }
            Err(err) => {
                warn!(file = %path.display(), error = %err, "skipping unreadable file");
                report.skipped.push(path.clone());
            }
        }
    }
    report
}

/// Build one file's report: a fresh tree, filled line by line.
///
/// Tokenizer state resets at every line, so a word never spans a line
/// break.
pub(crate) fn analyze_text(file: PathBuf, contents: &str) -> FileReport {
    let mut tree = WordTree::new();
    for line in contents.lines() {
        for token in tokenize(line) {
            tree.insert(&token);
        }
    }
    report_for(file, &tree)
}

fn report_for(file: PathBuf, tree: &WordTree) -> FileReport {
    FileReport {
        file,
        probes: tree.probe_stats(),
        words: tree
            .iter()
            .map(|e| WordCount {
                word: e.word.to_owned(),
                frequency: e.frequency,
                depth: e.depth,
            })
            .collect(),
    }
}

/// Read input paths from a list file, one filename per line. Blank lines
/// are ignored; surrounding whitespace is trimmed.
pub(crate) fn read_file_list(path: &Path) -> Result<Vec<PathBuf>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read file list {}", path.display()))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect())
}
