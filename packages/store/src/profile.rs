//! # ProfileRepository — the stored identity and its session state
//!
//! [`ProfileRepository`] is the only reader and writer of the persisted
//! profile record. It holds a [`KeyValueStore`] implementation and exposes
//! the handful of operations the screens need; UI code never touches raw
//! keys.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`session_status`](ProfileRepository::session_status) | `Authenticated` when both credential keys hold non-empty values. |
//! | [`verify_login`](ProfileRepository::verify_login) | Exact string comparison of submitted credentials against the stored ones. |
//! | [`register`](ProfileRepository::register) | Writes the full record (name, email, password). |
//! | [`profile`](ProfileRepository::profile) | Display fields, or `None` when no session exists. |
//! | [`profile_fields`](ProfileRepository::profile_fields) | Display fields with empty-string fallbacks and no session check (settings pre-fill). |
//! | [`update_profile`](ProfileRepository::update_profile) | Rewrites name and email; the password is left untouched. |
//! | [`logout`](ProfileRepository::logout) | Removes all three keys. |
//!
//! Multi-key operations are sequences of independent single-key writes; the
//! backing stores have no transaction primitive, so a failure mid-sequence
//! leaves the keys written so far in place.
//!
//! Credentials are stored and compared in plaintext. That matches the
//! behavior this app ships with and is not a secure authentication scheme.

use crate::error::StoreError;
use crate::keys;
use crate::kv::KeyValueStore;
use crate::models::{LoginOutcome, SessionStatus, UserProfile};

/// High-level operations over the single stored profile record.
pub struct ProfileRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ProfileRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Resolve the session from the store: authenticated only when both
    /// credential keys are present and non-empty.
    pub async fn session_status(&self) -> Result<SessionStatus, StoreError> {
        let email = self.store.get(keys::USER_EMAIL).await?;
        let password = self.store.get(keys::USER_PASSWORD).await?;
        match (email.as_deref(), password.as_deref()) {
            (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => {
                Ok(SessionStatus::Authenticated)
            }
            _ => Ok(SessionStatus::Unauthenticated),
        }
    }

    /// Compare submitted credentials against the stored record. An absent
    /// record compares unequal, so the outcome is `InvalidCredentials`.
    pub async fn verify_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<LoginOutcome, StoreError> {
        let stored_email = self.store.get(keys::USER_EMAIL).await?;
        let stored_password = self.store.get(keys::USER_PASSWORD).await?;
        match (stored_email, stored_password) {
            (Some(e), Some(p)) if e == email && p == password => {
                Ok(LoginOutcome::Authenticated)
            }
            _ => Ok(LoginOutcome::InvalidCredentials),
        }
    }

    /// Create the stored record. Overwrites any previous identity; the app
    /// holds exactly one account at a time.
    pub async fn register(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), StoreError> {
        self.store.set(keys::FULL_NAME, full_name).await?;
        self.store.set(keys::USER_EMAIL, email).await?;
        self.store.set(keys::USER_PASSWORD, password).await
    }

    /// Display fields for the profile screen, or `None` when no session
    /// exists. A missing name falls back to the empty string.
    pub async fn profile(&self) -> Result<Option<UserProfile>, StoreError> {
        if self.session_status().await? == SessionStatus::Unauthenticated {
            return Ok(None);
        }
        Ok(Some(self.profile_fields().await?))
    }

    /// Display fields with empty-string fallbacks and no session check.
    /// Used to pre-fill the settings form.
    pub async fn profile_fields(&self) -> Result<UserProfile, StoreError> {
        let full_name = self.store.get(keys::FULL_NAME).await?.unwrap_or_default();
        let email = self.store.get(keys::USER_EMAIL).await?.unwrap_or_default();
        Ok(UserProfile { full_name, email })
    }

    /// Rewrite name and email as two independent writes. The password key is
    /// never touched here.
    pub async fn update_profile(
        &self,
        full_name: &str,
        email: &str,
    ) -> Result<(), StoreError> {
        self.store.set(keys::FULL_NAME, full_name).await?;
        self.store.set(keys::USER_EMAIL, email).await
    }

    /// Remove the whole record. Each key is removed independently, and
    /// removing an absent key succeeds, so a second logout is a no-op.
    pub async fn logout(&self) -> Result<(), StoreError> {
        self.store.remove(keys::FULL_NAME).await?;
        self.store.remove(keys::USER_EMAIL).await?;
        self.store.remove(keys::USER_PASSWORD).await
    }
}
