// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Keyword dictionary loading: one keyword per line, UTF-8

use once_cell::sync::Lazy;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use tracing::{debug, warn};

use super::error::{FilterError, FilterResult};

// Bundled default keyword list, parsed once on first use
static DEFAULT_WORDS: Lazy<Vec<String>> =
    Lazy::new(|| read_keywords(include_str!("default.dict").as_bytes()).collect());

/// Forward-only iterator over the keywords of a dictionary.
///
/// Each line is right-trimmed; leading whitespace is kept as part of the
/// keyword and blank lines are skipped. A read error ends the iteration.
pub struct KeywordLines<R> {
    lines: Lines<R>,
    done: bool,
}

impl<R: BufRead> Iterator for KeywordLines<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while !self.done {
            match self.lines.next() {
                Some(Ok(line)) => {
                    let keyword = line.trim_end();
                    if !keyword.is_empty() {
                        return Some(keyword.to_string());
                    }
                }
                Some(Err(e)) => {
                    warn!(error = %e, "Stopping keyword dictionary read");
                    self.done = true;
                }
                None => self.done = true,
            }
        }
        None
    }
}

/// Read keywords from any buffered reader
pub fn read_keywords<R: BufRead>(reader: R) -> KeywordLines<R> {
    KeywordLines {
        lines: reader.lines(),
        done: false,
    }
}

/// Open a UTF-8 keyword dictionary file
pub fn load_dict(path: impl AsRef<Path>) -> FilterResult<KeywordLines<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FilterError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "Loading keyword dictionary");
    Ok(read_keywords(BufReader::new(file)))
}

/// Keywords of the bundled default dictionary
pub fn default_words() -> impl Iterator<Item = String> {
    DEFAULT_WORDS.iter().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_lines_right_trimmed() {
        let words: Vec<String> = read_keywords(Cursor::new("foo  \n  bar\t\r\nbaz")).collect();
        assert_eq!(words, vec!["foo", "  bar", "baz"]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let words: Vec<String> = read_keywords(Cursor::new("a\n\n   \nb\n")).collect();
        assert_eq!(words, vec!["a", "b"]);
    }

    #[test]
    fn test_iterator_not_restartable() {
        let mut words = read_keywords(Cursor::new("one\ntwo\n"));
        assert_eq!(words.by_ref().count(), 2);
        assert_eq!(words.next(), None);
    }

    #[test]
    fn test_invalid_utf8_ends_iteration() {
        let bytes: &[u8] = b"good\n\xff\xfe\nnever\n";
        let words: Vec<String> = read_keywords(bytes).collect();
        assert_eq!(words, vec!["good"]);
    }

    #[test]
    fn test_load_dict_missing_file() {
        let err = load_dict("/nonexistent/keywords.dict").err().unwrap();
        assert!(matches!(err, FilterError::Io { .. }));
    }

    #[test]
    fn test_default_words() {
        let words: Vec<String> = default_words().collect();
        assert!(!words.is_empty());
        assert!(words.iter().all(|w| !w.is_empty() && w.trim_end() == w));
    }
}
