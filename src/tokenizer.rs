//! Word tokenizer
//!
//! Splits raw text into normalized word tokens. ASCII letters, digits, and
//! hyphens continue a word (so `well-known` is a single token); every other
//! character is a boundary and is discarded. Tokens come out lowercased and
//! are never empty.

use std::str::Chars;

/// Character-level tokenizer state: the in-progress word buffer.
///
/// Most callers want [`tokenize`], which runs a fresh `Tokenizer` over one
/// line. Holding a `Tokenizer` directly lets a caller carry an unfinished
/// word across line boundaries and decide when to [`flush`](Self::flush).
#[derive(Debug, Default)]
pub struct Tokenizer {
    current: String,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one character. Returns a finished token when `c` is a boundary
    /// character that ends an in-progress word.
    pub fn push(&mut self, c: char) -> Option<String> {
        if c.is_ascii_alphanumeric() || c == '-' {
            self.current.push(c.to_ascii_lowercase());
            None
        } else {
            self.flush()
        }
    }

    /// Finalize the in-progress word, if any.
    pub fn flush(&mut self) -> Option<String> {
        if self.current.is_empty() {
            return None;
        }
        let mut word = std::mem::take(&mut self.current);
        // Trailing possessive strip. `push` treats the apostrophe as a
        // boundary, so this branch cannot trigger on ASCII input; it only
        // applies to buffers filled by other means.
        if word.len() > 2 && word.ends_with("'s") {
            word.truncate(word.len() - 2);
        }
        Some(word)
    }
}

/// Tokenize a single line of text lazily.
///
/// The returned iterator is finite and yields tokens left to right. A word
/// still in progress at end of line is emitted as a final token, so lines
/// need not end in punctuation.
pub fn tokenize(line: &str) -> Tokens<'_> {
    Tokens {
        chars: line.chars(),
        state: Tokenizer::new(),
    }
}

/// Lazy token iterator over one line. Created by [`tokenize`].
pub struct Tokens<'a> {
    chars: Chars<'a>,
    state: Tokenizer,
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for c in self.chars.by_ref() {
            if let Some(token) = self.state.push(c) {
                return Some(token);
            }
        }
        self.state.flush()
    }
}
