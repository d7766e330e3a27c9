// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Character-trie automaton and its restart-on-mismatch scanner

use std::collections::{BTreeSet, HashMap};
use std::ops::ControlFlow;

use super::error::{FilterError, FilterResult};
use super::scan::{fold_char, KeywordScanner};

// Index of the root in the node arena
const ROOT: usize = 0;

/// Trie node keyed by case-folded character.
///
/// Children are indices into the owning [`Trie`]'s arena, so dropping or
/// cloning a trie never recurses, however long a keyword is.
#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: HashMap<char, usize>,
    // A keyword ends exactly here
    terminal: bool,
}

/// Prefix tree over case-folded keywords
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    keywords: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            keywords: 0,
        }
    }
}

impl Trie {
    /// Build a trie from `keywords`. Empty keywords are ignored.
    pub fn build<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::default();
        for word in keywords {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Discard the current contents and build again from `keywords`
    pub fn rebuild<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        *self = Self::build(keywords);
    }

    fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut node = ROOT;
        for c in word.chars().map(fold_char) {
            node = match self.child(node, c) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(c, next);
                    next
                }
            };
        }

        let node = &mut self.nodes[node];
        if !node.terminal {
            node.terminal = true;
            self.keywords += 1;
        }
    }

    #[inline]
    fn child(&self, node: usize, c: char) -> Option<usize> {
        self.nodes[node].children.get(&c).copied()
    }

    #[inline]
    fn is_terminal(&self, node: usize) -> bool {
        self.nodes[node].terminal
    }

    /// Number of distinct case-folded keywords
    pub fn len(&self) -> usize {
        self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.keywords == 0
    }

    /// Number of nodes below the root
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Whether `word` (case-folded) is a keyword
    pub fn contains_keyword(&self, word: &str) -> bool {
        let mut node = ROOT;
        for c in word.chars().map(fold_char) {
            match self.child(node, c) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node != ROOT && self.is_terminal(node)
    }
}

/// Trie-backed engine with shortest-terminal-first matching.
///
/// Optionally retains the caller's keyword list verbatim for
/// [`filter_words`](TrieEngine::filter_words).
#[derive(Debug, Clone)]
pub struct TrieEngine {
    trie: Trie,
    words: Option<Vec<String>>,
}

impl TrieEngine {
    pub fn new<I>(keywords: I, keep_words: bool) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let keywords = keywords.into_iter().map(Into::into);

        if keep_words {
            let words: Vec<String> = keywords.collect();
            Self {
                trie: Trie::build(&words),
                words: Some(words),
            }
        } else {
            Self {
                trie: Trie::build(keywords),
                words: None,
            }
        }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn keeps_words(&self) -> bool {
        self.words.is_some()
    }

    /// The keyword list exactly as supplied
    pub fn filter_words(&self) -> FilterResult<BTreeSet<String>> {
        self.words
            .as_ref()
            .map(|words| words.iter().cloned().collect())
            .ok_or_else(|| {
                FilterError::NotSupported(
                    "keyword list was discarded at build time (keep_words = false)".to_string(),
                )
            })
    }
}

impl KeywordScanner for TrieEngine {
    /// Walks the trie from `start`, restarting one character later on a
    /// mismatch. The first terminal reached ends the attempt, so a shorter
    /// keyword wins over a longer one it prefixes. After a match the scan
    /// resumes at the end of the matched span.
    fn scan<F>(&self, chars: &[char], mut on_match: F)
    where
        F: FnMut(usize, usize) -> ControlFlow<()>,
    {
        let trie = &self.trie;
        let mut start = 0;
        let mut offset = 0;
        let mut node = ROOT;

        while start + offset < chars.len() {
            let c = fold_char(chars[start + offset]);

            let Some(next) = trie.child(node, c) else {
                start += 1;
                offset = 0;
                node = ROOT;
                continue;
            };

            node = next;
            offset += 1;

            if trie.is_terminal(node) {
                if on_match(start, offset).is_break() {
                    break;
                }
                node = ROOT;
                start += offset;
                offset = 0;
            }
        }
    }
}
