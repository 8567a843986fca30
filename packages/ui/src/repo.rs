//! Shared repository constructor for all platforms.
//!
//! Returns a [`store::ProfileRepository`] backed by the appropriate
//! [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): IndexedDB via [`store::IdbStore`]
//! - **Desktop / Mobile** (native): filesystem via [`store::FileStore`]

/// Create a platform-appropriate profile repository.
pub fn make_repository() -> store::ProfileRepository<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::ProfileRepository::new(store::IdbStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("profilepad");
        store::ProfileRepository::new(store::FileStore::new(base))
    }
}
