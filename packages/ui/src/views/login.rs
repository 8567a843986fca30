//! Shared login screen: credential form with stored-session redirect.

use dioxus::prelude::*;

use store::LoginOutcome;

use crate::components::{Button, ButtonVariant, ErrorBanner, Input};
use crate::validation::{validate_login, FieldErrors};
use crate::{make_repository, use_session, SessionState};

/// Shared login view.
///
/// Platform packages wire the navigation callbacks to their router.
#[component]
pub fn LoginView(
    /// A stored session was found on mount, without a submission.
    on_session_found: EventHandler<()>,
    /// Submitted credentials matched the stored record.
    on_authenticated: EventHandler<()>,
    /// Called when the user asks for the signup screen.
    on_signup: EventHandler<()>,
) -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut field_errors = use_signal(FieldErrors::default);
    let mut submit_error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already logged in: skip the form entirely
    if !session().loading && session().profile.is_some() {
        on_session_found.call(());
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            submit_error.set(None);

            let errors = validate_login(&email(), &password());
            if !errors.is_empty() {
                field_errors.set(errors);
                return;
            }
            field_errors.set(FieldErrors::default());

            loading.set(true);
            let repo = make_repository();
            match repo.verify_login(&email(), &password()).await {
                Ok(LoginOutcome::Authenticated) => {
                    let profile = repo.profile().await.ok().flatten();
                    session.set(SessionState {
                        profile,
                        loading: false,
                    });
                    on_authenticated.call(());
                }
                Ok(LoginOutcome::InvalidCredentials) => {
                    loading.set(false);
                    submit_error.set(Some("Invalid email or password".to_string()));
                }
                Err(err) => {
                    tracing::error!("login failed to read stored credentials: {err}");
                    loading.set(false);
                    submit_error.set(Some("An error occurred. Please try again.".to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "screen",

            h1 { class: "screen-title", "Login" }

            form {
                onsubmit: handle_login,
                class: "form",

                if let Some(message) = submit_error() {
                    ErrorBanner { message: message }
                }

                div {
                    class: "form-field",
                    Input {
                        r#type: "email",
                        placeholder: "Enter your email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    if let Some(message) = field_errors().email {
                        p { class: "field-error", "{message}" }
                    }
                }

                div {
                    class: "form-field",
                    Input {
                        r#type: "password",
                        placeholder: "Enter your password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    if let Some(message) = field_errors().password {
                        p { class: "field-error", "{message}" }
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Login" }
                }
            }

            button {
                class: "link-button",
                onclick: move |_| on_signup.call(()),
                "Don't have an account? Sign Up"
            }
        }
    }
}
