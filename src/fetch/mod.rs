//! Asynchronous JSON sources.
//!
//! A [`JsonSource`] resolves a path-like string such as `"/coders.json"` to
//! a JSON document and decodes it. The returned future resolves exactly
//! once; continuations are attached with the `futures` combinators:
//!
//! ```
//! use futures::TryFutureExt;
//! use lambda_lessons::fetch::{JsonSource, MemorySource};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let source = MemorySource::new().with_document("/numbers.json", "[1, 2, 3]");
//! let total = source
//!     .fetch_json::<Vec<u64>>("/numbers.json")
//!     .map_ok(|numbers| numbers.into_iter().sum::<u64>())
//!     .await;
//! assert_eq!(total.unwrap(), 6);
//! # });
//! ```

mod directory;
mod error;
mod memory;

use std::future::Future;

use serde::de::DeserializeOwned;

pub use directory::DirectorySource;
pub use error::FetchError;
pub use memory::MemorySource;

/// Something that can fetch and decode a JSON document by path.
pub trait JsonSource {
    /// Fetches the document at `path` and decodes it as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the path is malformed, names no document,
    /// cannot be read, or does not decode as `T`.
    fn fetch_json<T>(&self, path: &str) -> impl Future<Output = Result<T, FetchError>>
    where
        T: DeserializeOwned;
}

/// Decodes a fetched body, attributing failures to `path`.
pub(crate) fn decode<T: DeserializeOwned>(path: &str, body: &[u8]) -> Result<T, FetchError> {
    serde_json::from_slice(body).map_err(|source| FetchError::Decode {
        path: path.to_owned(),
        source,
    })
}
