//! CLI command definitions and handlers

pub(crate) mod analyze;
mod tokens;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wordprobe - BST word frequency analysis
///
/// Counts distinct words per text file with a binary search tree and
/// reports each word's frequency, tree depth, and the probe statistics of
/// the tree that was built.
#[derive(Parser, Debug)]
#[command(name = "wordprobe")]
#[command(
    version,
    about = "Analyze word frequency in text files with a binary search tree",
    after_help = "\
Examples:
  wordprobe chapter1.txt chapter2.txt        Analyze files, report to stdout
  wordprobe analyze --list input.txt         Analyze every file named in input.txt
  wordprobe analyze poem.txt --format json   JSON output for scripting
  wordprobe analyze poem.txt -o output.txt   Write the report to a file
  wordprobe tokens poem.txt                  Dump the token stream for one file"
)]
pub struct Cli {
    /// Text files to analyze when no subcommand is given
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze text files (one report block per readable file)
    #[command(after_help = "\
Examples:
  wordprobe analyze a.txt b.txt              Analyze two files in order
  wordprobe analyze --list input.txt         Read filenames, one per line
  wordprobe analyze a.txt --format json      Machine-readable output
  wordprobe analyze a.txt -o report.txt      Write report to report.txt")]
    Analyze {
        /// Text files to analyze, in report order
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,

        /// File listing one input filename per line (appended after FILE args)
        #[arg(long, short = 'l')]
        list: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Print the normalized token stream for one file (tokenizer debug aid)
    Tokens {
        /// Text file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Dispatch a parsed command line. Bare file arguments run `analyze` with
/// its defaults, mirroring `wordprobe analyze FILES...`.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Analyze {
            files,
            list,
            format,
            output,
        }) => analyze::run(files, list.as_deref(), &format, output.as_deref()),
        Some(Commands::Tokens { file }) => tokens::run(&file),
        None => analyze::run(cli.files, None, "text", None),
    }
}
