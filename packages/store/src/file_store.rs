//! # Filesystem-backed key-value store
//!
//! [`FileStore`] persists each key as its own file under a base directory,
//! so profile values survive app restarts on desktop and mobile.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── keys/
//!     └── <key>          # file containing the value string
//! ```
//!
//! Writes to different keys are independent file operations; there is no
//! cross-key atomicity.
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/profilepad/` |
//! | Linux | `~/.local/share/profilepad/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\profilepad\` |
//! | Android | App-internal storage (via `dirs`) |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// File-per-key KeyValueStore for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join("keys").join(key)
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, value)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;
    use crate::models::SessionStatus;
    use crate::profile::ProfileRepository;

    #[tokio::test]
    async fn test_file_store_survives_reopen() {
        let dir = std::env::temp_dir().join(format!("profilepad_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let repo = ProfileRepository::new(FileStore::new(dir.clone()));
        repo.register("Jane Doe", "jane@x.com", "secret1")
            .await
            .unwrap();

        // Re-open from the same directory
        let repo2 = ProfileRepository::new(FileStore::new(dir.clone()));
        assert_eq!(
            repo2.session_status().await.unwrap(),
            SessionStatus::Authenticated
        );
        let profile = repo2.profile().await.unwrap().unwrap();
        assert_eq!(profile.full_name, "Jane Doe");
        assert_eq!(profile.email, "jane@x.com");

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_ok() {
        let dir = std::env::temp_dir().join(format!("profilepad_rm_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        store.remove(keys::USER_EMAIL).await.unwrap();
        assert!(store.get(keys::USER_EMAIL).await.unwrap().is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
