//! Shared signup screen: creates the stored identity.

use dioxus::prelude::*;

use store::UserProfile;

use crate::components::{Button, ButtonVariant, ErrorBanner, Input};
use crate::validation::validate_signup;
use crate::{make_repository, use_session, SessionState};

/// Shared signup view.
#[component]
pub fn SignupView(
    /// A stored session already exists, or one was just created.
    on_authenticated: EventHandler<()>,
    /// Called when the user asks for the login screen.
    on_login: EventHandler<()>,
) -> Element {
    let mut session = use_session();
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already logged in: the app holds exactly one account
    if !session().loading && session().profile.is_some() {
        on_authenticated.call(());
    }

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let name = full_name().trim().to_string();
            let address = email().trim().to_string();
            if let Err(message) =
                validate_signup(&name, &address, &password(), &confirm_password())
            {
                error.set(Some(message));
                return;
            }

            loading.set(true);
            let repo = make_repository();
            match repo.register(&name, &address, &password()).await {
                Ok(()) => {
                    session.set(SessionState {
                        profile: Some(UserProfile {
                            full_name: name,
                            email: address,
                        }),
                        loading: false,
                    });
                    on_authenticated.call(());
                }
                Err(err) => {
                    tracing::error!("signup failed to write the profile: {err}");
                    loading.set(false);
                    error.set(Some("An error occurred. Please try again.".to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "screen",

            h1 { class: "screen-title", "Create Account" }

            form {
                onsubmit: handle_signup,
                class: "form",

                if let Some(message) = error() {
                    ErrorBanner { message: message }
                }

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
                        placeholder: "Enter your email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Input {
                        r#type: "password",
                        placeholder: "Password (min 6 characters)",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Input {
                        r#type: "password",
                        placeholder: "Confirm password",
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign Up" }
                }
            }

            button {
                class: "link-button",
                onclick: move |_| on_login.call(()),
                "Already have an account? Login"
            }
        }
    }
}
