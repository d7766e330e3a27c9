// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Configuration types for the keyword filter

#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::types::PyDict;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{FilterError, FilterResult};

/// Matching backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    /// Character trie, shortest-terminal-first
    #[default]
    #[serde(alias = "dfa")]
    Trie,
    /// Sorted completion dictionary, longest-common-prefix
    #[serde(alias = "dawg")]
    Completion,
}

impl EngineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineKind::Trie => "trie",
            EngineKind::Completion => "completion",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trie" | "dfa" => Ok(EngineKind::Trie),
            "completion" | "dawg" => Ok(EngineKind::Completion),
            other => Err(FilterError::Configuration(format!(
                "unknown engine '{}'",
                other
            ))),
        }
    }
}

fn default_keep_words() -> bool {
    true
}

fn default_replacement() -> char {
    '*'
}

/// Configuration for the keyword filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub engine: EngineKind,

    // Trie engine only: retain the caller's keywords for filter_words()
    #[serde(default = "default_keep_words")]
    pub keep_words: bool,

    #[serde(default = "default_replacement")]
    pub replacement: char,

    #[serde(default)]
    pub log_matches: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::Trie,
            keep_words: default_keep_words(),
            replacement: default_replacement(),
            log_matches: false,
        }
    }
}

impl FilterConfig {
    /// Parse configuration from a JSON document
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_json(json: &str) -> FilterResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| FilterError::Configuration(format!("invalid config: {}", e)))
    }

    /// Extract configuration from Python dict
    #[cfg(feature = "python")]
    pub fn from_py_dict(dict: &Bound<'_, PyDict>) -> PyResult<Self> {
        let mut config = Self::default();

        if let Some(value) = dict.get_item("engine")? {
            let name: String = value.extract()?;
            config.engine = name.parse()?;
        }
        if let Some(value) = dict.get_item("keep_words")? {
            config.keep_words = value.extract()?;
        }
        if let Some(value) = dict.get_item("replacement")? {
            config.replacement = value.extract()?;
        }
        if let Some(value) = dict.get_item("log_matches")? {
            config.log_matches = value.extract()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_kind_as_str() {
        assert_eq!(EngineKind::Trie.as_str(), "trie");
        assert_eq!(EngineKind::Completion.to_string(), "completion");
    }

    #[test]
    fn test_engine_kind_aliases() {
        assert_eq!("DFA".parse::<EngineKind>().unwrap(), EngineKind::Trie);
        assert_eq!("dawg".parse::<EngineKind>().unwrap(), EngineKind::Completion);
        assert!(matches!(
            "regex".parse::<EngineKind>(),
            Err(FilterError::Configuration(_))
        ));
    }

    #[test]
    fn test_default_config() {
        let config = FilterConfig::default();
        assert_eq!(config.engine, EngineKind::Trie);
        assert!(config.keep_words);
        assert_eq!(config.replacement, '*');
        assert!(!config.log_matches);
    }

    #[test]
    fn test_from_json_partial() {
        let config = FilterConfig::from_json(r##"{"engine": "completion", "replacement": "#"}"##)
            .unwrap();
        assert_eq!(config.engine, EngineKind::Completion);
        assert_eq!(config.replacement, '#');
        assert!(config.keep_words);
    }

    #[test]
    fn test_from_json_unknown_engine() {
        let err = FilterConfig::from_json(r#"{"engine": "regex"}"#).unwrap_err();
        assert!(matches!(err, FilterError::Configuration(_)));
    }
}
