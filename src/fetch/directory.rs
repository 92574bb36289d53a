use std::future::Future;
use std::io;
use std::path::{Component, Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use super::{FetchError, JsonSource, decode};

/// Serves JSON documents from files beneath a root directory.
///
/// Request paths are relative to the root whether or not they start with
/// `/`, so `"/coders.json"` and `"coders.json"` name the same file. Paths
/// that would leave the root are rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Creates a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory requests are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a request path onto a file beneath the root.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidPath`] for empty paths, `..` segments,
    /// and platform prefixes such as `C:`.
    pub fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let invalid = |reason| FetchError::InvalidPath {
            path: path.to_owned(),
            reason,
        };

        let mut resolved = self.root.clone();
        let mut segments = 0_usize;
        for component in Path::new(path).components() {
            match component {
                Component::Normal(segment) => {
                    resolved.push(segment);
                    segments += 1;
                }
                Component::RootDir | Component::CurDir => {}
                Component::ParentDir => return Err(invalid("parent segments are not allowed")),
                Component::Prefix(_) => return Err(invalid("path prefixes are not allowed")),
            }
        }

        if segments == 0 {
            return Err(invalid("path names no document"));
        }
        Ok(resolved)
    }
}

impl JsonSource for DirectorySource {
    fn fetch_json<T>(&self, path: &str) -> impl Future<Output = Result<T, FetchError>>
    where
        T: DeserializeOwned,
    {
        async move {
            let file = self.resolve(path)?;
            debug!(path, file = %file.display(), "fetching JSON document");

            let body = tokio::fs::read(&file)
                .await
                .map_err(|source| match source.kind() {
                    io::ErrorKind::NotFound => FetchError::NotFound {
                        path: path.to_owned(),
                    },
                    _ => FetchError::Io {
                        path: path.to_owned(),
                        source,
                    },
                })?;

            debug!(path, bytes = body.len(), "decoding JSON document");
            decode(path, &body)
        }
    }
}
