//! Shared settings screen: edits the stored name and email.

use dioxus::prelude::*;

use store::UserProfile;

use crate::components::{Button, ButtonVariant, ErrorBanner, Input};
use crate::validation::validate_settings;
use crate::{make_repository, use_session, SessionState};

/// Shared settings view.
#[component]
pub fn SettingsView(
    /// Name and email were written back to the store.
    on_saved: EventHandler<()>,
    /// Called when the user asks to return to the profile screen.
    on_back: EventHandler<()>,
) -> Element {
    let mut session = use_session();
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut error_message = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    // Pre-fill the form with the stored values
    let _loader = use_resource(move || async move {
        let repo = make_repository();
        match repo.profile_fields().await {
            Ok(fields) => {
                full_name.set(fields.full_name);
                email.set(fields.email);
            }
            Err(err) => {
                tracing::error!("settings screen failed to read storage: {err}");
            }
        }
    });

    let handle_update = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error_message.set(None);

            if let Err(message) = validate_settings(&full_name(), &email()) {
                error_message.set(Some(message));
                return;
            }

            let name = full_name().trim().to_string();
            let address = email().trim().to_string();

            saving.set(true);
            let repo = make_repository();
            // Two independent writes; a failure between them leaves the
            // first one in place.
            match repo.update_profile(&name, &address).await {
                Ok(()) => {
                    if session().profile.is_some() {
                        session.set(SessionState {
                            profile: Some(UserProfile {
                                full_name: name,
                                email: address,
                            }),
                            loading: false,
                        });
                    }
                    on_saved.call(());
                }
                Err(err) => {
                    tracing::error!("settings update failed to write storage: {err}");
                    saving.set(false);
                    error_message.set(Some("An error occurred. Please try again.".to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "screen",

            h1 { class: "screen-title", "Settings" }

            form {
                onsubmit: handle_update,
                class: "form",

                div {
                    class: "form-field",
                    Input {
                        placeholder: "Full Name",
                        value: full_name(),
                        oninput: move |evt: FormEvent| full_name.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Input {
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                if let Some(message) = error_message() {
                    ErrorBanner { message: message }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Update" }
                }
            }

            Button {
                variant: ButtonVariant::Secondary,
                onclick: move |_| on_back.call(()),
                "Return to Home"
            }
        }
    }
}
