use std::collections::HashMap;
use std::future::{self, Future};

use serde::de::DeserializeOwned;
use tracing::debug;

use super::{FetchError, JsonSource, decode};

/// Serves JSON documents held in memory.
///
/// Paths are normalized to start with `/`, so `"coders.json"` and
/// `"/coders.json"` are the same document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySource {
    documents: HashMap<String, String>,
}

impl MemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the document at `path`.
    #[must_use]
    pub fn with_document(mut self, path: &str, body: impl Into<String>) -> Self {
        self.documents.insert(normalize(path), body.into());
        self
    }

    /// Number of documents held.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether no documents are held.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn lookup<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        if path.trim_start_matches('/').is_empty() {
            return Err(FetchError::InvalidPath {
                path: path.to_owned(),
                reason: "path names no document",
            });
        }

        let body = self
            .documents
            .get(&normalize(path))
            .ok_or_else(|| FetchError::NotFound {
                path: path.to_owned(),
            })?;

        debug!(path, bytes = body.len(), "decoding in-memory JSON document");
        decode(path, body.as_bytes())
    }
}

impl JsonSource for MemorySource {
    fn fetch_json<T>(&self, path: &str) -> impl Future<Output = Result<T, FetchError>>
    where
        T: DeserializeOwned,
    {
        future::ready(self.lookup(path))
    }
}

fn normalize(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}
