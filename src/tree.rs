//! Word frequency tree
//!
//! An unbalanced binary search tree keyed on case-insensitive word text.
//! Each node records how often its word was inserted and the depth at which
//! its slot was created. Depth doubles as the probe count (minus one) needed
//! to reach the word again, which feeds the per-file probe statistics.
//!
//! The tree is built fresh per input file, filled by [`WordTree::insert`],
//! read out once through [`WordTree::iter`] and [`WordTree::probe_stats`],
//! then dropped whole. There is no deletion and no rebalancing, so a node's
//! depth never changes after insertion.

use std::cmp::Ordering;

use crate::models::ProbeStats;

struct Node {
    word: String,
    frequency: u32,
    depth: u32,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(word: &str, depth: u32) -> Self {
        Self {
            word: word.to_owned(),
            frequency: 1,
            depth,
            left: None,
            right: None,
        }
    }
}

/// One entry of the tree as seen by a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEntry<'a> {
    pub word: &'a str,
    pub frequency: u32,
    pub depth: u32,
}

/// Case-insensitive key order. Both sides are lowercased on every
/// comparison, even when callers insert pre-normalized words.
fn key_cmp(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|b| b.to_ascii_lowercase())
        .cmp(b.bytes().map(|b| b.to_ascii_lowercase()))
}

/// Binary search tree of distinct words with frequencies and insert depths.
#[derive(Default)]
pub struct WordTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl WordTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a word, or bump its frequency if an equal key already exists.
    ///
    /// A new node's depth is the number of comparisons performed before its
    /// empty slot was found; the root inserts at depth 0. A frequency bump
    /// never moves a node or changes its depth.
    ///
    /// The descent is a cursor loop over `&mut Option<Box<Node>>` slots, so
    /// insertion depth is never limited by the call stack.
    pub fn insert(&mut self, word: &str) {
        let mut depth = 0u32;
        let mut slot = &mut self.root;
        loop {
            match slot {
                None => {
                    *slot = Some(Box::new(Node::new(word, depth)));
                    self.len += 1;
                    return;
                }
                Some(node) => match key_cmp(word, &node.word) {
                    Ordering::Less => {
                        slot = &mut node.left;
                        depth += 1;
                    }
                    Ordering::Greater => {
                        slot = &mut node.right;
                        depth += 1;
                    }
                    Ordering::Equal => {
                        node.frequency += 1;
                        return;
                    }
                },
            }
        }
    }

    /// In-order traversal, ascending by case-insensitive key.
    ///
    /// The iterator borrows the tree and does not mutate it, so traversal
    /// can be restarted by calling `iter` again.
    pub fn iter(&self) -> InOrder<'_> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Maximum and average probe counts over all entries.
    ///
    /// A word's probe count is `depth + 1`: the root takes one probe to
    /// reach. Both statistics are 0 for an empty tree.
    pub fn probe_stats(&self) -> ProbeStats {
        let mut max = 0u32;
        let mut total = 0u64;
        for entry in self.iter() {
            let probes = entry.depth + 1;
            max = max.max(probes);
            total += u64::from(probes);
        }
        let average = if self.len == 0 {
            0.0
        } else {
            total as f64 / self.len as f64
        };
        ProbeStats { max, average }
    }
}

impl Drop for WordTree {
    // Explicit worklist so a badly skewed tree cannot overflow the call
    // stack during teardown. Each node is detached from its children before
    // its own (now childless) recursive drop runs.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Lazy in-order iterator over a [`WordTree`]. Created by [`WordTree::iter`].
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = WordEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(WordEntry {
            word: &node.word,
            frequency: node.frequency,
            depth: node.depth,
        })
    }
}
