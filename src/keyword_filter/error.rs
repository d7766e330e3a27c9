// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Error types for the keyword filter

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the keyword filter.
///
/// Scanning never fails: empty text and empty keyword sets are valid input.
/// Errors only come from construction, configuration and keyword enumeration.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The requested backend is unavailable or the configuration is malformed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The active engine cannot reconstruct its original keyword list.
    #[error("not supported: {0}")]
    NotSupported(String),

    /// A keyword dictionary file could not be read.
    #[error("failed to read keyword dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type FilterResult<T> = Result<T, FilterError>;

#[cfg(feature = "python")]
impl From<FilterError> for pyo3::PyErr {
    fn from(err: FilterError) -> Self {
        use pyo3::exceptions::{PyNotImplementedError, PyOSError, PyValueError};

        match err {
            FilterError::Configuration(_) => PyValueError::new_err(err.to_string()),
            FilterError::NotSupported(_) => PyNotImplementedError::new_err(err.to_string()),
            FilterError::Io { .. } => PyOSError::new_err(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FilterError::Configuration("unknown engine 'x'".to_string());
        assert_eq!(err.to_string(), "configuration error: unknown engine 'x'");

        let err = FilterError::NotSupported("keyword list was discarded".to_string());
        assert_eq!(err.to_string(), "not supported: keyword list was discarded");
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = FilterError::Io {
            path: PathBuf::from("missing.dict"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("missing.dict"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
