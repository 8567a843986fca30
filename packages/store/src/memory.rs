use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing and ephemeral sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;
    use crate::models::{LoginOutcome, SessionStatus};
    use crate::profile::ProfileRepository;

    #[tokio::test]
    async fn test_empty_store_is_unauthenticated() {
        let repo = ProfileRepository::new(MemoryStore::new());

        assert_eq!(
            repo.session_status().await.unwrap(),
            SessionStatus::Unauthenticated
        );
        assert!(repo.profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_register_creates_session() {
        let repo = ProfileRepository::new(MemoryStore::new());

        repo.register("Jane Doe", "jane@x.com", "secret1")
            .await
            .unwrap();

        assert_eq!(
            repo.session_status().await.unwrap(),
            SessionStatus::Authenticated
        );
        let profile = repo.profile().await.unwrap().unwrap();
        assert_eq!(profile.full_name, "Jane Doe");
        assert_eq!(profile.email, "jane@x.com");
    }

    #[tokio::test]
    async fn test_empty_credentials_do_not_count_as_session() {
        let store = MemoryStore::new();
        store.set(keys::USER_EMAIL, "a@b.com").await.unwrap();
        store.set(keys::USER_PASSWORD, "").await.unwrap();

        let repo = ProfileRepository::new(store);
        assert_eq!(
            repo.session_status().await.unwrap(),
            SessionStatus::Unauthenticated
        );
        assert!(repo.profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_matches_exact_credentials() {
        let store = MemoryStore::new();
        store.set(keys::USER_EMAIL, "a@b.com").await.unwrap();
        store.set(keys::USER_PASSWORD, "secret1").await.unwrap();

        let repo = ProfileRepository::new(store);
        assert_eq!(
            repo.verify_login("a@b.com", "secret1").await.unwrap(),
            LoginOutcome::Authenticated
        );
        assert_eq!(
            repo.verify_login("a@b.com", "wrong").await.unwrap(),
            LoginOutcome::InvalidCredentials
        );
        assert_eq!(
            repo.verify_login("other@b.com", "secret1").await.unwrap(),
            LoginOutcome::InvalidCredentials
        );
    }

    #[tokio::test]
    async fn test_login_against_empty_store_is_invalid() {
        let repo = ProfileRepository::new(MemoryStore::new());

        assert_eq!(
            repo.verify_login("a@b.com", "secret1").await.unwrap(),
            LoginOutcome::InvalidCredentials
        );
    }

    #[tokio::test]
    async fn test_settings_roundtrip() {
        let repo = ProfileRepository::new(MemoryStore::new());
        repo.register("Old Name", "old@x.com", "secret1")
            .await
            .unwrap();

        repo.update_profile("Jane Doe", "jane@x.com").await.unwrap();

        let fields = repo.profile_fields().await.unwrap();
        assert_eq!(fields.full_name, "Jane Doe");
        assert_eq!(fields.email, "jane@x.com");
    }

    #[tokio::test]
    async fn test_update_profile_keeps_password() {
        let repo = ProfileRepository::new(MemoryStore::new());
        repo.register("Jane", "jane@x.com", "secret1").await.unwrap();

        repo.update_profile("Jane Doe", "new@x.com").await.unwrap();

        assert_eq!(
            repo.verify_login("new@x.com", "secret1").await.unwrap(),
            LoginOutcome::Authenticated
        );
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let store = MemoryStore::new();
        let repo = ProfileRepository::new(store.clone());
        repo.register("Jane", "jane@x.com", "secret1").await.unwrap();

        repo.logout().await.unwrap();
        assert_eq!(
            repo.session_status().await.unwrap(),
            SessionStatus::Unauthenticated
        );
        assert!(store.get(keys::FULL_NAME).await.unwrap().is_none());

        // A second logout sees the same fully-cleared state.
        repo.logout().await.unwrap();
        assert!(store.get(keys::USER_EMAIL).await.unwrap().is_none());
        assert!(store.get(keys::USER_PASSWORD).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_display_name_falls_back_to_email() {
        let store = MemoryStore::new();
        store.set(keys::USER_EMAIL, "jane@x.com").await.unwrap();
        store.set(keys::USER_PASSWORD, "secret1").await.unwrap();

        let repo = ProfileRepository::new(store);
        let profile = repo.profile().await.unwrap().unwrap();
        assert_eq!(profile.full_name, "");
        assert_eq!(profile.display_name(), "jane@x.com");
    }
}
