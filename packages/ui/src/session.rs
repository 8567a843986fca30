//! Session state context shared by every screen.
//!
//! The session is never stored directly: it is derived from whether the
//! credential keys are present in the store. The context here caches the
//! latest resolution so screens can redirect without waiting on another
//! read; the profile and settings screens still re-read storage on mount.

use dioxus::prelude::*;
use store::UserProfile;

use crate::make_repository;

/// Resolved session state. `loading` is true until the first storage read
/// completes; until then the session is unknown rather than absent.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub profile: Option<UserProfile>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            profile: None,
            loading: true,
        }
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that resolves the session from the store on mount.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session = use_signal(SessionState::default);

    // Resolve the stored session once on mount
    let _ = use_resource(move || async move {
        let repo = make_repository();
        match repo.profile().await {
            Ok(profile) => {
                session.set(SessionState {
                    profile,
                    loading: false,
                });
            }
            Err(err) => {
                tracing::error!("failed to resolve session from storage: {err}");
                session.set(SessionState {
                    profile: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}
