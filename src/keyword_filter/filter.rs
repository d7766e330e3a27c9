// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Filter facade: owns one engine and dispatches the public operations to it

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::ops::ControlFlow;
use tracing::debug;

#[cfg(feature = "completion")]
use super::completion::CompletionEngine;
use super::config::{EngineKind, FilterConfig};
use super::dictionary::default_words;
#[cfg(not(feature = "completion"))]
use super::error::FilterError;
use super::error::FilterResult;
use super::scan::{KeywordMatch, KeywordScanner};
use super::trie::TrieEngine;

/// The active matching engine
#[derive(Debug, Clone)]
enum Engine {
    Trie(TrieEngine),
    #[cfg(feature = "completion")]
    Completion(CompletionEngine),
}

impl Engine {
    fn build<I>(config: &FilterConfig, words: I) -> FilterResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        match config.engine {
            EngineKind::Trie => Ok(Engine::Trie(TrieEngine::new(words, config.keep_words))),
            EngineKind::Completion => completion_engine(words),
        }
    }

    fn kind(&self) -> EngineKind {
        match self {
            Engine::Trie(_) => EngineKind::Trie,
            #[cfg(feature = "completion")]
            Engine::Completion(_) => EngineKind::Completion,
        }
    }

    fn keyword_count(&self) -> usize {
        match self {
            Engine::Trie(engine) => engine.trie().len(),
            #[cfg(feature = "completion")]
            Engine::Completion(engine) => engine.dictionary().len(),
        }
    }
}

#[cfg(feature = "completion")]
fn completion_engine<I>(words: I) -> FilterResult<Engine>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    Ok(Engine::Completion(CompletionEngine::new(
        words.into_iter().map(Into::<String>::into),
    )))
}

#[cfg(not(feature = "completion"))]
fn completion_engine<I>(_words: I) -> FilterResult<Engine>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    Err(FilterError::Configuration(
        "completion backend unavailable: built without the `completion` feature".to_string(),
    ))
}

impl KeywordScanner for Engine {
    fn scan<F>(&self, chars: &[char], on_match: F)
    where
        F: FnMut(usize, usize) -> ControlFlow<()>,
    {
        match self {
            Engine::Trie(engine) => engine.scan(chars, on_match),
            #[cfg(feature = "completion")]
            Engine::Completion(engine) => engine.scan(chars, on_match),
        }
    }
}

/// Keyword filter.
///
/// Owns exactly one engine, chosen at construction. Reloading builds a fresh
/// engine of the same kind and swaps it in whole; nothing is merged with the
/// previous keyword set.
///
/// Scans take `&self` and reloads take `&mut self`, so a reload can never
/// overlap a scan on the same value. To keep serving reads during a reload,
/// build a new filter and swap it behind your own lock or `Arc`.
///
/// # Example
/// ```
/// use keyword_filter_rust::keyword_filter::KeywordFilter;
///
/// let filter = KeywordFilter::new(["中文", "English"]);
/// assert!(filter.contains("some english text"));
///
/// let found = filter.search("2222123555中文");
/// assert_eq!((found[0].start, found[0].value.as_str()), (10, "中文"));
///
/// assert_eq!(filter.replace("say English", '*'), "say *******");
/// ```
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    engine: Engine,
    config: FilterConfig,
}

impl KeywordFilter {
    /// Trie engine with the keyword list retained
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let config = FilterConfig::default();
        let engine = Engine::Trie(TrieEngine::new(words, config.keep_words));
        Self::log_built(&engine, "Built keyword filter");
        Self { engine, config }
    }

    /// Filter backed by the requested engine
    pub fn with_engine<I>(kind: EngineKind, words: I) -> FilterResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let config = FilterConfig {
            engine: kind,
            ..Default::default()
        };
        Self::from_config(&config, words)
    }

    pub fn from_config<I>(config: &FilterConfig, words: I) -> FilterResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let engine = Engine::build(config, words)?;
        Self::log_built(&engine, "Built keyword filter");
        Ok(Self {
            engine,
            config: config.clone(),
        })
    }

    /// Trie filter over the bundled default dictionary
    pub fn default_filter() -> Self {
        Self::new(default_words())
    }

    /// Filter of the given kind over the bundled default dictionary
    pub fn with_default_words(kind: EngineKind) -> FilterResult<Self> {
        Self::with_engine(kind, default_words())
    }

    /// Replace the keyword set.
    ///
    /// The new engine is fully built before the old one is dropped; on error
    /// the current engine stays in place.
    pub fn reload_words<I>(&mut self, words: I) -> FilterResult<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let engine = Engine::build(&self.config, words)?;
        Self::log_built(&engine, "Reloaded keyword filter");
        self.engine = engine;
        Ok(())
    }

    /// [`reload_words`](Self::reload_words) that also changes whether the
    /// trie engine retains the keyword list.
    ///
    /// The setting is only updated once the new engine is built.
    pub fn reload_words_with<I>(&mut self, words: I, keep_words: bool) -> FilterResult<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let config = FilterConfig {
            keep_words,
            ..self.config.clone()
        };
        let engine = Engine::build(&config, words)?;
        Self::log_built(&engine, "Reloaded keyword filter");
        self.engine = engine;
        self.config = config;
        Ok(())
    }

    /// The configured keywords.
    ///
    /// The trie engine returns the list exactly as supplied, or
    /// [`FilterError::NotSupported`](super::error::FilterError::NotSupported)
    /// when it was built with `keep_words` off. The completion engine
    /// returns its case-folded keys.
    pub fn filter_words(&self) -> FilterResult<BTreeSet<String>> {
        match &self.engine {
            Engine::Trie(engine) => engine.filter_words(),
            #[cfg(feature = "completion")]
            Engine::Completion(engine) => Ok(engine.filter_words()),
        }
    }

    pub fn contains(&self, text: &str) -> bool {
        let found = self.engine.contains(text);
        if self.config.log_matches && found {
            debug!(engine = %self.engine.kind(), "Keyword found");
        }
        found
    }

    /// Non-overlapping matches in scan order, with code-point offsets
    pub fn search(&self, text: &str) -> Vec<KeywordMatch> {
        let matches = self.engine.search(text);
        if self.config.log_matches && !matches.is_empty() {
            debug!(engine = %self.engine.kind(), count = matches.len(), "Keywords found");
        }
        matches
    }

    /// Replace each matched character with `substitute`.
    ///
    /// The result has the same number of code points as `text`.
    pub fn replace<'a>(&self, text: &'a str, substitute: char) -> Cow<'a, str> {
        let masked = self.engine.replace(text, substitute);
        if self.config.log_matches && matches!(masked, Cow::Owned(_)) {
            debug!(engine = %self.engine.kind(), "Keywords masked");
        }
        masked
    }

    /// [`replace`](Self::replace) with the configured substitute
    pub fn mask<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.replace(text, self.config.replacement)
    }

    pub fn engine_kind(&self) -> EngineKind {
        self.engine.kind()
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Number of distinct case-folded keywords in the active engine
    pub fn keyword_count(&self) -> usize {
        self.engine.keyword_count()
    }

    fn log_built(engine: &Engine, message: &'static str) {
        debug!(
            engine = %engine.kind(),
            keywords = engine.keyword_count(),
            "{}",
            message
        );
    }
}
