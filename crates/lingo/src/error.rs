//! Error types for dictionary loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading a dictionary.
///
/// Translation lookups never fail; only the collaborators that build a
/// dictionary from external input do.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a dictionary file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Syntax error with location context.
    #[error("{origin}:{line}:{column}: {message}")]
    Parse {
        origin: String,
        line: usize,
        column: usize,
        message: String,
    },
}

impl LoadError {
    /// Wrap a JSON error, naming where the input came from.
    pub fn from_json(origin: impl Into<String>, err: &serde_json::Error) -> Self {
        LoadError::Parse {
            origin: origin.into(),
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}
