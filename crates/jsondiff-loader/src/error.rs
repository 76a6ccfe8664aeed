//! Error types for the loader crate.

use std::path::PathBuf;

use reqwest::StatusCode;

/// Errors that can occur while loading an input document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The HTTP request failed or its body could not be read.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with anything other than 200.
    #[error("failed to fetch {url}: non-200 status: {status}")]
    Status { url: String, status: StatusCode },

    /// The file could not be opened or read.
    #[error("failed to read file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid JSON, or its root is not an object.
    #[error("invalid JSON in {input}: {source}")]
    Parse {
        input: String,
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl LoadError {
    /// Returns `true` for network and non-200 failures.
    pub fn is_fetch(&self) -> bool {
        matches!(self, LoadError::Fetch { .. } | LoadError::Status { .. })
    }
}

/// Convenience alias for loader results.
pub type LoadResult<T> = Result<T, LoadError>;
