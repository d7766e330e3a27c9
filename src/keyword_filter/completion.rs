// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Completion-dictionary engine with longest-common-prefix matching

use std::collections::BTreeSet;
use std::ops::{Bound, ControlFlow};

use super::scan::{fold, fold_char, KeywordScanner};

/// Immutable sorted set of case-folded keywords.
///
/// Prefix and membership queries are `O(log n)` range lookups.
#[derive(Debug, Default, Clone)]
pub struct CompletionDictionary {
    keys: BTreeSet<String>,
}

impl CompletionDictionary {
    pub fn build<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = keywords
            .into_iter()
            .map(|word| fold(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();
        Self { keys }
    }

    /// Whether any key starts with `prefix`
    pub fn has_keys_with_prefix(&self, prefix: &str) -> bool {
        self.keys
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .next()
            .is_some_and(|key| key.starts_with(prefix))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Dictionary-backed engine.
///
/// At each position the candidate span is extended while some keyword still
/// has it as a prefix; the maximal span is reported only if it is itself a
/// keyword. Among keywords forming a prefix chain the longest reachable one
/// wins, and a shorter keyword is missed when the extension runs past it
/// without landing on another keyword.
#[derive(Debug, Default, Clone)]
pub struct CompletionEngine {
    dict: CompletionDictionary,
}

impl CompletionEngine {
    pub fn new<I>(keywords: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            dict: CompletionDictionary::build(keywords),
        }
    }

    pub fn dictionary(&self) -> &CompletionDictionary {
        &self.dict
    }

    /// Case-folded keys held by the dictionary
    pub fn filter_words(&self) -> BTreeSet<String> {
        self.dict.keys().map(str::to_string).collect()
    }

    /// Extend from `i` while the folded span is a keyword prefix.
    /// Leaves the maximal span in `probe` and returns its end.
    fn extend_prefix(&self, chars: &[char], i: usize, probe: &mut String) -> usize {
        probe.clear();
        let mut j = i;

        while j < chars.len() {
            probe.push(fold_char(chars[j]));
            if !self.dict.has_keys_with_prefix(probe.as_str()) {
                probe.pop();
                break;
            }
            j += 1;
        }

        j
    }
}

impl KeywordScanner for CompletionEngine {
    fn scan<F>(&self, chars: &[char], mut on_match: F)
    where
        F: FnMut(usize, usize) -> ControlFlow<()>,
    {
        let mut probe = String::new();
        let mut i = 0;

        while i < chars.len() {
            let j = self.extend_prefix(chars, i, &mut probe);

            if j > i && self.dict.contains_key(&probe) {
                if on_match(i, j - i).is_break() {
                    return;
                }
                i = j;
            } else {
                i += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_queries() {
        let dict = CompletionDictionary::build(["Apple", "apply", "banana"]);
        assert_eq!(dict.len(), 3);
        assert!(dict.has_keys_with_prefix("appl"));
        assert!(dict.has_keys_with_prefix("banana"));
        assert!(dict.has_keys_with_prefix(""));
        assert!(!dict.has_keys_with_prefix("apps"));
        assert!(!dict.has_keys_with_prefix("c"));
        assert!(dict.contains_key("apple"));
        assert!(!dict.contains_key("Apple"));
        assert!(!dict.contains_key("appl"));
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = CompletionDictionary::build(Vec::<String>::new());
        assert!(dict.is_empty());
        assert!(!dict.has_keys_with_prefix(""));
    }

    #[test]
    fn test_longest_common_prefix() {
        let engine = CompletionEngine::new(["123", "123abc"]);
        let found = engine.search("123abc");
        assert_eq!(found.len(), 1);
        assert_eq!((found[0].start, found[0].value.as_str()), (0, "123abc"));
    }

    #[test]
    fn test_extension_overshoot_misses_shorter_keyword() {
        // "abcd" is a prefix of "abcde" but not a keyword, so "abc" is skipped
        let engine = CompletionEngine::new(["abc", "abcde"]);
        assert!(engine.search("abcdx").is_empty());
        assert_eq!(engine.search("abc!")[0].value, "abc");
    }

    #[test]
    fn test_search_advances_past_match() {
        let engine = CompletionEngine::new(["aa"]);
        let starts: Vec<usize> = engine.search("aaaaa").iter().map(|m| m.start).collect();
        assert_eq!(starts, vec![0, 2]);
        assert_eq!(engine.replace("aaaaa", '*'), "****a");
    }

    #[test]
    fn test_case_folded_keys() {
        let engine = CompletionEngine::new(["English", "中文"]);
        let words = engine.filter_words();
        assert!(words.contains("english"));
        assert!(words.contains("中文"));
        assert!(engine.contains("some ENGLISH"));
    }
}
