//! Tokens command implementation
//!
//! Prints the normalized token stream for one file, one token per line.
//! Handy for checking what the analyzer will actually insert.

use crate::tokenizer::tokenize;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn run(file: &Path) -> Result<()> {
    let contents =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    for line in contents.lines() {
        for token in tokenize(line) {
            println!("{token}");
        }
    }
    Ok(())
}
