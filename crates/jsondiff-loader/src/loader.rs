//! URL/path dispatch and document parsing.

use std::path::Path;

use jsondiff_core::Document;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::error::{LoadError, LoadResult};

/// Where an input document comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source<'a> {
    /// An `http://` or `https://` URL.
    Url(&'a str),
    /// Anything else, taken as a filesystem path.
    File(&'a Path),
}

impl<'a> Source<'a> {
    /// Classify an input string by its scheme prefix.
    pub fn parse(input: &'a str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            Source::Url(input)
        } else {
            Source::File(Path::new(input))
        }
    }
}

/// Parse raw bytes into a document. Non-object roots are rejected.
pub fn parse_document(bytes: &[u8]) -> Result<Document, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Resolves inputs to parsed documents.
///
/// Holds one HTTP client for the lifetime of a run; requests use the
/// client's default timeouts and are never retried.
#[derive(Clone, Debug)]
pub struct Loader {
    client: Client,
}

impl Loader {
    /// Create a loader with a default HTTP client.
    pub fn new() -> LoadResult<Self> {
        let client = Client::builder().build().map_err(LoadError::Client)?;
        Ok(Self { client })
    }

    /// Create a loader around an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Load the document named by `input`.
    pub async fn load(&self, input: &str) -> LoadResult<Document> {
        match Source::parse(input) {
            Source::Url(url) => self.fetch(url).await,
            Source::File(path) => self.read(path).await,
        }
    }

    async fn fetch(&self, url: &str) -> LoadResult<Document> {
        debug!(url, "fetching document");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| LoadError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        debug!(url, %status, "received response");
        if status != StatusCode::OK {
            return Err(LoadError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(|source| LoadError::Fetch {
            url: url.to_string(),
            source,
        })?;
        debug!(url, bytes = body.len(), "read response body");

        parse_document(&body).map_err(|source| LoadError::Parse {
            input: url.to_string(),
            source,
        })
    }

    async fn read(&self, path: &Path) -> LoadResult<Document> {
        debug!(path = %path.display(), "reading document");
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| LoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), bytes = bytes.len(), "read file");

        parse_document(&bytes).map_err(|source| LoadError::Parse {
            input: path.display().to_string(),
            source,
        })
    }
}
