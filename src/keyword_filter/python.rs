// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// PyO3 bindings for the keyword filter

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::config::{EngineKind, FilterConfig};
use super::filter::KeywordFilter;

/// Keyword filter exposed to Python
///
/// # Example (Python)
/// ```python
/// from keyword_filter_rust import KeywordFilterRust
///
/// f = KeywordFilterRust(["中文", "English"], {"engine": "trie"})
/// f.contains("some english")      # True
/// f.search("2222123555中文")       # [(10, "中文")]
/// f.replace("say English")        # "say *******"
/// ```
#[pyclass]
pub struct KeywordFilterRust {
    filter: KeywordFilter,
}

#[pymethods]
impl KeywordFilterRust {
    /// Create a new filter
    ///
    /// # Arguments
    /// * `words` - Any iterable of keyword strings
    /// * `config` - Optional dict with `engine` ("trie" | "completion"),
    ///   `keep_words` (bool), `replacement` (str) and `log_matches` (bool)
    #[new]
    #[pyo3(signature = (words, config = None))]
    pub fn new(words: &Bound<'_, PyAny>, config: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let config = match config {
            Some(dict) => FilterConfig::from_py_dict(dict)?,
            None => FilterConfig::default(),
        };
        let words = extract_words(words)?;

        Ok(Self {
            filter: KeywordFilter::from_config(&config, words)?,
        })
    }

    /// Filter over the bundled default dictionary
    #[staticmethod]
    #[pyo3(signature = (engine = None))]
    pub fn default(engine: Option<&str>) -> PyResult<Self> {
        let kind = match engine {
            Some(name) => name.parse()?,
            None => EngineKind::default(),
        };

        Ok(Self {
            filter: KeywordFilter::with_default_words(kind)?,
        })
    }

    /// Rebuild the filter from a new keyword iterable, optionally changing
    /// whether the keyword list is retained
    #[pyo3(signature = (words, keep_words = None))]
    pub fn reload_words(
        &mut self,
        words: &Bound<'_, PyAny>,
        keep_words: Option<bool>,
    ) -> PyResult<()> {
        let words = extract_words(words)?;
        match keep_words {
            Some(keep_words) => Ok(self.filter.reload_words_with(words, keep_words)?),
            None => Ok(self.filter.reload_words(words)?),
        }
    }

    /// Configured keywords; raises NotImplementedError when discarded
    pub fn filter_words(&self) -> PyResult<Vec<String>> {
        Ok(self.filter.filter_words()?.into_iter().collect())
    }

    #[getter]
    pub fn engine(&self) -> &'static str {
        self.filter.engine_kind().as_str()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.filter.contains(text)
    }

    /// List of (index, keyword) tuples; index counts code points
    pub fn search(&self, text: &str) -> Vec<(usize, String)> {
        self.filter
            .search(text)
            .into_iter()
            .map(|m| (m.start, m.value))
            .collect()
    }

    #[pyo3(signature = (text, replace = '*'))]
    pub fn replace(&self, text: &str, replace: char) -> String {
        self.filter.replace(text, replace).into_owned()
    }
}

fn extract_words(words: &Bound<'_, PyAny>) -> PyResult<Vec<String>> {
    words
        .try_iter()?
        .map(|item| item?.extract::<String>())
        .collect()
}
