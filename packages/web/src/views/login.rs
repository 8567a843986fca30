use dioxus::prelude::*;
use ui::views::LoginView;

use crate::Route;

/// Login page wired to the web router. Navigation verbs match the mobile
/// app: push on the mount redirect, replace after a successful submission.
#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        LoginView {
            on_session_found: move |_| {
                nav.push(Route::ProfileScreen {});
            },
            on_authenticated: move |_| {
                nav.replace(Route::ProfileScreen {});
            },
            on_signup: move |_| {
                nav.push(Route::Signup {});
            },
        }
    }
}
