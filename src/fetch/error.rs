use std::io;

/// Failure to obtain a JSON document.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The path is empty, escapes the source root, or is otherwise unusable.
    #[error("invalid path `{path}`: {reason}")]
    InvalidPath {
        /// The requested path.
        path: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// No document exists at the path.
    #[error("no document at `{path}`")]
    NotFound {
        /// The requested path.
        path: String,
    },

    /// The document exists but could not be read.
    #[error("failed to read `{path}`")]
    Io {
        /// The requested path.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The document is not valid JSON for the requested type.
    #[error("failed to decode `{path}`")]
    Decode {
        /// The requested path.
        path: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// The path that was requested when the error occurred.
    pub fn path(&self) -> &str {
        match self {
            Self::InvalidPath { path, .. }
            | Self::NotFound { path }
            | Self::Io { path, .. }
            | Self::Decode { path, .. } => path,
        }
    }
}

static_assertions::assert_impl_all!(FetchError: Send, Sync, std::error::Error);
