//! Wordprobe - BST word frequency analysis
//!
//! Analyzes word frequency across text files with an unbalanced binary
//! search tree keyed on case-normalized word text. Per file it reports the
//! distinct words in lexicographic order, their occurrence counts, their
//! tree depths, and the maximum and average probe counts of the tree that
//! was built.

pub mod cli;
pub mod models;
pub mod reporters;
pub mod tokenizer;
pub mod tree;
