//! Well-known keys for the stored profile record.
//!
//! The entire persisted state of the app is three string values under these
//! keys. Keys are written and removed independently; there is no multi-key
//! transaction.

/// Display name shown on the profile screen.
pub const FULL_NAME: &str = "fullName";

/// Registered email address; doubles as the login identifier.
pub const USER_EMAIL: &str = "userEmail";

/// Registered password, stored as entered.
pub const USER_PASSWORD: &str = "userPassword";
