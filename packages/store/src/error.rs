use thiserror::Error;

/// Errors surfaced by [`KeyValueStore`](crate::KeyValueStore) backends.
///
/// Screens map any of these to a generic retry message; nothing here is
/// fatal, and a failed operation leaves other keys untouched.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure while reading or writing a key file.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific failure, e.g. an IndexedDB transaction error.
    #[error("storage backend error: {0}")]
    Backend(String),
}
