//! Shared profile screen: shows the stored record, guards on session
//! presence.

use dioxus::prelude::*;

use store::UserProfile;

use crate::components::{Button, ButtonVariant, ErrorBanner};
use crate::{make_repository, use_session, SessionState};

/// Shared profile view.
#[component]
pub fn ProfileView(
    /// No stored session was found on mount.
    on_unauthenticated: EventHandler<()>,
    /// Called when the user asks for the settings screen.
    on_settings: EventHandler<()>,
    /// The stored record was cleared.
    on_logout: EventHandler<()>,
) -> Element {
    let mut session = use_session();
    let mut profile = use_signal(|| Option::<UserProfile>::None);
    let mut error = use_signal(|| Option::<String>::None);

    // Re-resolve the session from storage on every mount
    let _loader = use_resource(move || async move {
        let repo = make_repository();
        match repo.profile().await {
            Ok(Some(stored)) => profile.set(Some(stored)),
            Ok(None) => on_unauthenticated.call(()),
            Err(err) => {
                tracing::error!("profile screen failed to read storage: {err}");
                error.set(Some("An error occurred. Please try again.".to_string()));
            }
        }
    });

    let handle_logout = move |_| {
        spawn(async move {
            error.set(None);
            let repo = make_repository();
            match repo.logout().await {
                Ok(()) => {
                    session.set(SessionState {
                        profile: None,
                        loading: false,
                    });
                    on_logout.call(());
                }
                Err(err) => {
                    tracing::error!("logout failed to clear storage: {err}");
                    error.set(Some("An error occurred. Please try again.".to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "screen",

            if let Some(message) = error() {
                ErrorBanner { message: message }
            }

            if let Some(user) = profile() {
                div {
                    class: "welcome-banner",
                    "Welcome, {user.display_name()}!"
                }

                div {
                    class: "info-card",
                    p { class: "info-row", "Full Name: {user.full_name}" }
                    p { class: "info-row", "Email: {user.email}" }
                }

                div {
                    class: "actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_settings.call(()),
                        "Go to Settings"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: handle_logout,
                        "Logout"
                    }
                }
            } else {
                p { class: "muted", "Loading..." }
            }
        }
    }
}
