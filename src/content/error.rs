//! Content provider errors

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while reading posts from their source
///
/// These are never recovered from during page composition; they abort the
/// render and surface to the command that triggered it.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid front-matter in {path:?}: {message}")]
    FrontMatter { path: PathBuf, message: String },

    #[error("Missing required field `{field}` in {path:?}")]
    MissingField { path: PathBuf, field: &'static str },
}
