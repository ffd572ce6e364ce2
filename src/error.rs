use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read or write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed geometry input: {0}")]
    MalformedGeometry(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Incident list not found: {0}")]
    PatternNotFound(String),

    #[error("Invalid block pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Malformed incidents in {block}: {source}")]
    MalformedIncidents {
        block: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Replacement spans overlap or fall outside the document")]
    InvalidSpans,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
