//! Asynchronous key-value persistence seam.
//!
//! [`KeyValueStore`] is the single storage abstraction in the workspace:
//! string keys to string values, durable across app restarts. Implementations
//! live in sibling modules ([`crate::memory`], [`crate::file_store`],
//! [`crate::idb`]), so the same profile logic runs against an in-memory map
//! in tests, the local filesystem on mobile and desktop, and IndexedDB on
//! the web.

use crate::error::StoreError;

/// Async interface over durable string key-value storage.
///
/// Removing an absent key is not an error; every other failure carries a
/// [`StoreError`].
pub trait KeyValueStore {
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, StoreError>>;
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn remove(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
}
