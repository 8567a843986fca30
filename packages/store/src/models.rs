//! Data returned by [`crate::ProfileRepository`] when reading the stored
//! record.

use serde::{Deserialize, Serialize};

/// Profile fields safe to render on screen. The stored password is never
/// part of this type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub full_name: String,
    pub email: String,
}

impl UserProfile {
    /// Display name, falling back to the email address when no name is
    /// stored.
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }
}

/// Whether a registered identity is present in the store.
///
/// Derived from key presence on every resolution, never stored itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Authenticated,
    Unauthenticated,
}

/// Result of checking submitted credentials against the stored record.
/// A mismatch is a normal outcome, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated,
    InvalidCredentials,
}
