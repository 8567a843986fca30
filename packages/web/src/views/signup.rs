use dioxus::prelude::*;
use ui::views::SignupView;

use crate::Route;

/// Signup page wired to the web router.
#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();

    rsx! {
        SignupView {
            on_authenticated: move |_| {
                nav.replace(Route::ProfileScreen {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
