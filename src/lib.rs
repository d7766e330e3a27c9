// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Keyword detection and masking
// Optional PyO3 bindings behind the `python` feature

// PyO3 macro expansions emit impl blocks outside the annotated item
#![cfg_attr(feature = "python", allow(non_local_definitions))]

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod keyword_filter;

/// Python module: keyword_filter_rust
///
/// # Examples
///
/// ```python
/// from keyword_filter_rust import KeywordFilterRust
///
/// f = KeywordFilterRust(["123", "123abc"], {"engine": "completion"})
/// f.search("123abc")   # [(0, "123abc")]
///
/// f = KeywordFilterRust(["123", "123abc"])
/// f.search("123abc")   # [(0, "123")]
/// ```
#[cfg(feature = "python")]
#[pymodule]
fn keyword_filter_rust(m: &Bound<'_, pyo3::types::PyModule>) -> PyResult<()> {
    m.add_class::<keyword_filter::KeywordFilterRust>()?;

    // Module metadata
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add(
        "__doc__",
        "Case-insensitive keyword detection and masking",
    )?;

    Ok(())
}
