use dioxus::prelude::*;
use ui::views::LoginView;

use crate::Route;

/// Login screen wired to the mobile router. A session found at mount pushes
/// onto the stack; a successful submission replaces the login entry.
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
