// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Keyword Filter - Rust Implementation
//
// Case-insensitive keyword detection and masking with two engines:
// - Character trie, shortest-terminal-first matching
// - Sorted completion dictionary, longest-common-prefix matching

#[cfg(feature = "completion")]
pub mod completion;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod filter;
pub mod masking;
#[cfg(feature = "python")]
pub mod python;
pub mod scan;
pub mod trie;

pub use config::{EngineKind, FilterConfig};
pub use dictionary::{default_words, load_dict, read_keywords};
pub use error::{FilterError, FilterResult};
pub use filter::KeywordFilter;
#[cfg(feature = "python")]
pub use python::KeywordFilterRust;
pub use scan::{fold, fold_char, KeywordMatch, KeywordScanner};
