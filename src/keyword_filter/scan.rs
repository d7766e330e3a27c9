// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Shared scan contract: case folding, match records and the derived
// contains / search / replace operations

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::ops::ControlFlow;

use super::masking::SpanMasker;

/// Fold a single character to lowercase.
///
/// Characters whose lowercase form expands to several code points are kept
/// unchanged, so folding never alters code-point counts.
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Fold every character of `s` with [`fold_char`]
pub fn fold(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// A single keyword occurrence.
///
/// `start` and `end` are code-point offsets into the scanned text and
/// `value` is the matched span exactly as it appears there.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub start: usize,
    pub end: usize,
    pub value: String,
}

impl KeywordMatch {
    pub(crate) fn from_span(chars: &[char], start: usize, len: usize) -> Self {
        Self {
            start,
            end: start + len,
            value: chars[start..start + len].iter().collect(),
        }
    }

    /// Length in code points
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A matching engine.
///
/// Implementors provide [`scan`](KeywordScanner::scan); the three public text
/// operations are derived from it and differ between engines only through the
/// match-selection policy each `scan` applies.
pub trait KeywordScanner {
    /// Walk `chars` left to right, reporting each match as `(start, len)` in
    /// code points. Returning `ControlFlow::Break` stops the scan; returning
    /// `ControlFlow::Continue` resumes after the matched span.
    ///
    /// The derived operations do not trust the reported spans: `search` drops
    /// spans that are empty or run past the text, and `replace` clips spans
    /// that overlap an earlier one.
    fn scan<F>(&self, chars: &[char], on_match: F)
    where
        F: FnMut(usize, usize) -> ControlFlow<()>;

    /// Check if `text` contains any keyword
    fn contains(&self, text: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        let mut found = false;
        self.scan(&chars, |_, _| {
            found = true;
            ControlFlow::Break(())
        });
        found
    }

    /// All non-overlapping keyword occurrences in scan order
    fn search(&self, text: &str) -> Vec<KeywordMatch> {
        let chars: Vec<char> = text.chars().collect();
        let mut matches = Vec::new();
        self.scan(&chars, |start, len| {
            let in_bounds = start
                .checked_add(len)
                .is_some_and(|end| end <= chars.len());
            if len > 0 && in_bounds {
                matches.push(KeywordMatch::from_span(&chars, start, len));
            }
            ControlFlow::Continue(())
        });
        matches
    }

    /// Replace every matched character with `substitute`.
    ///
    /// Borrows `text` unchanged when nothing matched.
    fn replace<'a>(&self, text: &'a str, substitute: char) -> Cow<'a, str> {
        let chars: Vec<char> = text.chars().collect();
        let mut masker = SpanMasker::new(&chars, substitute);
        self.scan(&chars, |start, len| {
            masker.mask(start, len);
            ControlFlow::Continue(())
        });
        masker.finish(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_char() {
        assert_eq!(fold_char('A'), 'a');
        assert_eq!(fold_char('Ä'), 'ä');
        assert_eq!(fold_char('中'), '中');
        assert_eq!(fold_char('1'), '1');
    }

    #[test]
    fn test_fold_keeps_multi_char_lowercase() {
        // 'İ' lowercases to "i\u{307}"
        assert_eq!(fold_char('İ'), 'İ');
        assert_eq!(fold("İstanbul").chars().count(), "İstanbul".chars().count());
    }

    #[test]
    fn test_match_from_span() {
        let chars: Vec<char> = "ab中文cd".chars().collect();
        let m = KeywordMatch::from_span(&chars, 2, 2);
        assert_eq!(m.start, 2);
        assert_eq!(m.end, 4);
        assert_eq!(m.len(), 2);
        assert_eq!(m.value, "中文");
    }

    #[test]
    fn test_match_json_round_trip() {
        let chars: Vec<char> = "ab中文cd".chars().collect();
        let m = KeywordMatch::from_span(&chars, 2, 2);

        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"start":2,"end":4,"value":"中文"}"#);

        let parsed: KeywordMatch = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, m);
    }

    /// Reports fixed spans regardless of the text
    struct FixedScanner(Vec<(usize, usize)>);

    impl KeywordScanner for FixedScanner {
        fn scan<F>(&self, _chars: &[char], mut on_match: F)
        where
            F: FnMut(usize, usize) -> ControlFlow<()>,
        {
            for &(start, len) in &self.0 {
                if on_match(start, len).is_break() {
                    break;
                }
            }
        }
    }

    #[test]
    fn test_overlapping_spans_do_not_panic() {
        let scanner = FixedScanner(vec![(0, 3), (1, 1)]);
        assert_eq!(scanner.replace("abcd", '*'), "***d");
        assert_eq!(scanner.search("abcd").len(), 2);
    }

    #[test]
    fn test_out_of_range_spans_skipped() {
        let scanner = FixedScanner(vec![(2, 5), (1, 0), (usize::MAX, 2)]);
        assert!(scanner.search("abc").is_empty());
        assert_eq!(scanner.replace("abc", '*'), "ab*");
    }

    /// Reports every occurrence of a single character
    struct CharScanner(char);

    impl KeywordScanner for CharScanner {
        fn scan<F>(&self, chars: &[char], mut on_match: F)
        where
            F: FnMut(usize, usize) -> ControlFlow<()>,
        {
            for (i, c) in chars.iter().enumerate() {
                if *c == self.0 && on_match(i, 1).is_break() {
                    break;
                }
            }
        }
    }

    #[test]
    fn test_derived_operations() {
        let scanner = CharScanner('x');
        assert!(scanner.contains("axbx"));
        assert!(!scanner.contains("abc"));

        let found = scanner.search("axbx");
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].start, 3);

        assert_eq!(scanner.replace("axbx", '-'), "a-b-");
        assert!(matches!(scanner.replace("abc", '-'), Cow::Borrowed("abc")));
    }
}
